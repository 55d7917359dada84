//! Logging macros that emit their message only the first time they are reached.
//!
//! Handy in hot loops (per ray, per pixel) where a warning would otherwise flood the output.

#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        // Only burn the `Once` if the message can actually be seen
        if log::log_enabled!(target: $target, $lvl) {
            ONCE.call_once(|| {
                log::log!(target: $target, $lvl, $($arg)+);
            });
        }
    }};
    ($lvl:expr, $($arg:tt)+) => ($crate::log_once!(target: module_path!(), $lvl, $($arg)+));
}

#[macro_export]
macro_rules! warn_once {
    (target: $target:expr, $($arg:tt)+) => ($crate::log_once!(target: $target, log::Level::Warn, $($arg)+));
    ($($arg:tt)+) => ($crate::log_once!(log::Level::Warn, $($arg)+));
}

pub use crate::{log_once, warn_once};
