//! Macros for use in the crate.

/// Emits a trace-level event if the `tracing` feature is enabled.
///
/// Without the feature, the arguments are not evaluated at all.
macro_rules! trace {
    ( $( $arg:tt )* ) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!( $( $arg )* );
    }};
}
