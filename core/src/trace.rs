//! Tracing hooks for clause composition.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! Without it the macros expand to nothing, which keeps `#[cfg]` noise out
//! of the validation code.

/// Emit a debug-level event when a clause transitions to present.
///
/// ```ignore
/// trace_clause!("FROM", true, &tables);
/// ```
macro_rules! trace_clause {
    ($kind:expr, $dynamic:expr, $tables:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            kind = $kind,
            dynamic = $dynamic,
            tables = %$tables,
            "sqlclause.clause"
        );
    };
}

/// Emit a trace-level event when a dynamic fragment is appended.
macro_rules! trace_append {
    ($kind:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(kind = $kind, fragments = $count, "sqlclause.append");
    };
}

/// Emit a debug-level event for a rejected composition and hand the error back.
macro_rules! trace_rejected {
    ($err:expr) => {{
        let err = $err;
        #[cfg(feature = "tracing")]
        ::tracing::debug!(error = %err, "sqlclause.rejected");
        err
    }};
}

pub(crate) use trace_append;
pub(crate) use trace_clause;
pub(crate) use trace_rejected;
