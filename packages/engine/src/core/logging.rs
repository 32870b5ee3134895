//! Console logging
//!
//! In the browser messages go straight to `console.log`; native builds route
//! them through `tracing` so hosts pick them up with whatever subscriber they
//! install.

/// Log a formatted message to the host console
///
/// Usage:
/// ```rust
/// use chroma_life_engine::console_log;
///
/// let generation = 3;
/// console_log!("generation {} committed", generation);
/// ```
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::core::logging::console_write(&format!($($arg)*));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            $crate::core::logging::__tracing::info!("{}", format!($($arg)*));
        }
    }};
}

#[doc(hidden)]
pub use tracing as __tracing;

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn console_write(message: &str) {
    web_sys::console::log_1(&message.into());
}
