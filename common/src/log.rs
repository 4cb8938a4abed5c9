//! Logging macros layered on top of `tracing`.
//!
//! The CLI formatter gives events logged under [`SUCCESS_TARGET`] their own
//! colour, everything else goes through the plain `tracing` macros.

pub const SUCCESS_TARGET: &str = "carte::success";

/// Logs an `INFO` event that the terminal formatter renders as a success line.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "carte::success", $($arg)*)
    };
}
