//! Memoized line sets.
//!
//! A `LineSet` depends only on `(BoardSize, LinePolicy)`. Sessions that start
//! many games, possibly on different board sizes, fetch line sets from here
//! instead of regenerating them.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::generator::LineSet;
use crate::core::{BoardSize, ConfigError, LinePolicy};

/// Cache of generated line sets keyed by board size and policy.
#[derive(Clone, Debug, Default)]
pub struct LineSetCache {
    sets: FxHashMap<(BoardSize, LinePolicy), Arc<LineSet>>,
}

impl LineSetCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Line set for `size` under `policy`, generating it on first use.
    pub fn get_or_generate(
        &mut self,
        size: BoardSize,
        policy: LinePolicy,
    ) -> Result<Arc<LineSet>, ConfigError> {
        if let Some(set) = self.sets.get(&(size, policy)) {
            return Ok(Arc::clone(set));
        }

        tracing::debug!(%size, k = policy.minimum_run_length, "line set cache miss");
        let set = Arc::new(LineSet::generate(size, policy)?);
        self.sets.insert((size, policy), Arc::clone(&set));
        Ok(set)
    }

    /// Number of cached line sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }
}
