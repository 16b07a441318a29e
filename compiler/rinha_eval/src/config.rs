//! Evaluation settings.

use crate::memo::MemoCache;

/// Settings for one evaluation run.
///
/// ```
/// use rinha_eval::EvalConfig;
///
/// let config = EvalConfig::new().memo_capacity(Some(10_000));
/// assert!(config.memoize);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Cache results of calls to functions without `Print`.
    ///
    /// When off, every call evaluates its body.
    pub memoize: bool,
    /// Maximum number of cached results, `None` for unbounded.
    ///
    /// When full, the oldest entry is evicted first.
    pub memo_capacity: Option<usize>,
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    #[must_use]
    pub fn memo_capacity(mut self, capacity: Option<usize>) -> Self {
        self.memo_capacity = capacity;
        self
    }

    pub(crate) fn memo_cache(&self) -> MemoCache {
        match self.memo_capacity {
            Some(capacity) => MemoCache::with_capacity(capacity),
            None => MemoCache::new(),
        }
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            memoize: true,
            memo_capacity: None,
        }
    }
}
