use alloc::vec::Vec;

use crate::fenwick::Fenwick;

type Provider = dyn Fn(usize) -> u32 + Send + Sync;

/// Lazily populated cache of per-item extents.
///
/// Extents live in a flat array indexed by item position, with a Fenwick tree
/// over the same values for prefix sums and offset → index lookup. Every
/// engine query is a prefix query, so population is always contiguous from
/// index 0; instead of a per-slot "populated" bitset the cache tracks a single
/// resolved-count watermark (the length of `extents`).
///
/// A cached extent is authoritative until explicitly invalidated; the cache
/// never re-validates entries against the provider on its own.
#[derive(Debug)]
pub(crate) struct ExtentCache {
    extents: Vec<u32>, // resolved extents, contiguous from index 0
    sums: Fenwick,
    total: usize,
}

impl ExtentCache {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            extents: Vec::new(),
            sums: Fenwick::new(),
            total,
        }
    }

    /// Drops all cached extents, keeping the item count.
    pub(crate) fn clear(&mut self) {
        self.extents.clear();
        self.sums.clear();
    }

    /// Replaces the item count and drops the cache; previously cached indices
    /// may no longer be meaningful against the new data set.
    pub(crate) fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clear();
    }

    fn resolve_next(&mut self, provider: &Provider) {
        let i = self.extents.len();
        let extent = provider(i);
        self.extents.push(extent);
        self.sums.push(extent as u64);
    }

    fn ensure_resolved(&mut self, upto: usize, provider: &Provider) {
        let upto = upto.min(self.total);
        while self.extents.len() < upto {
            self.resolve_next(provider);
        }
    }

    /// Prefix sum of extents `[0, index)`.
    pub(crate) fn prefix(&mut self, index: usize, provider: &Provider) -> u64 {
        self.ensure_resolved(index, provider);
        self.sums.prefix_sum(index)
    }

    /// Sum of all extents.
    pub(crate) fn total_extent(&mut self, provider: &Provider) -> u64 {
        self.ensure_resolved(self.total, provider);
        self.sums.total()
    }

    pub(crate) fn extent_of(&mut self, index: usize, provider: &Provider) -> u32 {
        debug_assert!(index < self.total);
        self.ensure_resolved(index + 1, provider);
        self.extents[index]
    }

    /// Maps an offset to the index of the item whose span contains it.
    ///
    /// Offsets landing exactly on an item boundary map to the item that
    /// starts there; offsets past the last item clamp to the last index.
    pub(crate) fn index_at(&mut self, offset: u64, provider: &Provider) -> usize {
        // Resolve just far enough that the resolved prefix covers `offset`.
        while self.extents.len() < self.total && self.sums.total() <= offset {
            self.resolve_next(provider);
        }
        self.sums.lower_bound(offset).min(self.total.saturating_sub(1))
    }

    /// First index whose cumulative extent reaches `target`, i.e. the item at
    /// which a walk accumulating extents from 0 first satisfies
    /// `prefix(i + 1) >= target`.
    pub(crate) fn index_spanning(&mut self, target: u64, provider: &Provider) -> usize {
        if target == 0 {
            return 0;
        }
        self.index_at(target - 1, provider)
    }

    /// Replaces a single cached extent in `O(log n)`.
    ///
    /// Unresolved slots are left alone; they will consult the provider when
    /// first reached.
    pub(crate) fn update(&mut self, index: usize, extent: u32) {
        let Some(slot) = self.extents.get_mut(index) else {
            return;
        };
        let delta = extent as i64 - *slot as i64;
        *slot = extent;
        if delta != 0 {
            self.sums.add(index, delta);
        }
    }
}
