//! Console logging: the browser console on wasm32, stderr elsewhere.

pub fn info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[huesand] {message}");
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[huesand] warning: {message}");
}

macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::log::info(&format!($($arg)*))
    };
}

macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::log::warn(&format!($($arg)*))
    };
}

pub(crate) use console_log;
pub(crate) use console_warn;
