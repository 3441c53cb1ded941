//! Internal logging macros.
//!
//! Events are forwarded to `tracing` when the `tracing` feature is enabled and
//! compile to nothing otherwise.

macro_rules! graph_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

macro_rules! graph_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}
