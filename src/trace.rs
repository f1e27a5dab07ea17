//! Crate-internal logging shims.
//!
//! Events are forwarded to `tracing` when the `tracing` feature is enabled and
//! compile to nothing otherwise, so the core carries no logging dependency by
//! default.

macro_rules! debug_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!($($arg)+);
        }
    }};
}

macro_rules! trace_event {
    ($($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)+);
        }
    }};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
