//! Evaluator settings.

/// Call depth allowed when no limit is configured explicitly.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Settings for an [`Evaluator`](crate::Evaluator).
///
/// ```text
/// let config = EvalConfig::default().max_call_depth(Some(500)).strict_arity(true);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum nesting of Monkey function calls, `None` for unlimited.
    pub max_call_depth: Option<usize>,
    /// Reject calls whose argument count differs from the parameter count.
    ///
    /// Off by default: missing parameters stay unbound and extra arguments
    /// are evaluated then dropped.
    pub strict_arity: bool,
}

impl EvalConfig {
    #[must_use]
    pub fn max_call_depth(mut self, depth: Option<usize>) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn strict_arity(mut self, strict: bool) -> Self {
        self.strict_arity = strict;
        self
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
            strict_arity: false,
        }
    }
}
