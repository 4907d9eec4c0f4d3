//! Status macros.
//!
//! Every macro emits a `tracing` event carrying a `status` field. The CLI
//! formatter turns the status into a colored prefix, so libraries never have
//! to know how (or whether) the message ends up on a terminal.

pub const STATUS_INFO: &str = "info";
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_WARN: &str = "warn";
pub const STATUS_ERROR: &str = "error";

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::tracing::info!(status = $crate::logging::STATUS_INFO, $($arg)+)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::tracing::info!(status = $crate::logging::STATUS_SUCCESS, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::tracing::warn!(status = $crate::logging::STATUS_WARN, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::tracing::error!(status = $crate::logging::STATUS_ERROR, $($arg)+)
    };
}
