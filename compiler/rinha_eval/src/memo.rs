//! Memoization of pure function calls.
//!
//! A call result is cached under (function identity, argument values) when
//! the function is eligible: no `Print` term is reachable anywhere inside
//! its literal. Cached results are returned without evaluating the body.
//!
//! # Cache Bounds
//! Unbounded by default. With a capacity, the oldest entries are evicted
//! (FIFO order) to make room for new ones.

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rinha_ir::{ExprArena, ExprId, FunctionId, TermKind};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::value::{FunctionValue, Value};

/// Evaluated call arguments, inline for the common small arities.
pub type Args = SmallVec<[Value; 4]>;

/// A wrapper around argument values used as a cache key.
///
/// Implements `Borrow<[Value]>` so lookups take a plain slice.
#[derive(Clone, PartialEq, Eq)]
pub struct MemoKey(pub Args);

impl Hash for MemoKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must match the Hash impl for [Value] to work with Borrow.
        self.0.as_slice().hash(state);
    }
}

impl std::borrow::Borrow<[Value]> for MemoKey {
    fn borrow(&self) -> &[Value] {
        &self.0
    }
}

/// Counters observed over one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups of an eligible function that found nothing.
    pub misses: u64,
    /// Results inserted.
    pub stores: u64,
    /// Entries dropped to respect the capacity.
    pub evictions: u64,
}

/// Whether calls of the function literal at `expr` may be cached.
pub fn is_memoizable(arena: &ExprArena, expr: ExprId) -> bool {
    !arena.contains_kind(expr, TermKind::Print)
}

/// Call-result cache for one evaluation run.
#[derive(Default)]
pub struct MemoCache {
    entries: FxHashMap<FunctionId, FxHashMap<MemoKey, Value>>,
    /// Insertion order for FIFO eviction; only kept when bounded.
    order: VecDeque<(FunctionId, MemoKey)>,
    len: usize,
    capacity: Option<usize>,
    eligibility: FxHashMap<FunctionId, bool>,
    stats: MemoStats,
}

impl MemoCache {
    /// Create an unbounded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache holding at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        MemoCache {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Eligibility of `func`, computed once per function.
    pub fn is_eligible(&mut self, arena: &ExprArena, func: &FunctionValue) -> bool {
        *self
            .eligibility
            .entry(func.id)
            .or_insert_with(|| is_memoizable(arena, func.expr))
    }

    /// Look up a cached result.
    pub fn lookup(&mut self, func: FunctionId, args: &[Value]) -> Option<Value> {
        let hit = self
            .entries
            .get(&func)
            .and_then(|table| table.get(args))
            .cloned();
        if hit.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        hit
    }

    /// Store a result. Storing an already-present key is a no-op.
    pub fn store(&mut self, func: FunctionId, args: Args, result: Value) {
        if self.capacity == Some(0) {
            return;
        }
        let table = self.entries.entry(func).or_default();
        if table.contains_key(args.as_slice()) {
            return;
        }
        let key = MemoKey(args);
        if self.capacity.is_some() {
            self.order.push_back((func, key.clone()));
        }
        table.insert(key, result);
        self.len += 1;
        self.stats.stores += 1;
        self.evict_to_capacity();
    }

    fn evict_to_capacity(&mut self) {
        let Some(capacity) = self.capacity else {
            return;
        };
        while self.len > capacity {
            let Some((func, key)) = self.order.pop_front() else {
                break;
            };
            if let Some(table) = self.entries.get_mut(&func) {
                if table.remove(&key).is_some() {
                    self.len -= 1;
                    self.stats.evictions += 1;
                }
            }
        }
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.eligibility.clear();
        self.len = 0;
        self.stats = MemoStats::default();
    }
}

impl std::fmt::Debug for MemoCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoCache")
            .field("entries", &self.len)
            .field("capacity", &self.capacity)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
