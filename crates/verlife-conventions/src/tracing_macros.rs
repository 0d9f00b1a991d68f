//! Conditional tracing macros
//!
//! These expand to nothing when the `tracing` feature is disabled.

/// Log at info level, only when tracing feature is enabled
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

/// Log at info level, no-op when tracing feature is disabled
#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Log at debug level, only when tracing feature is enabled
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

/// Log at debug level, no-op when tracing feature is disabled
#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}
