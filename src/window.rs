use core::cmp;

use crate::cache::ExtentCache;
use crate::{Align, ItemExtent, Range, WindowError, WindowOptions};

/// A headless windowing calculator.
///
/// Given a configured logical list and a scroll offset, computes the minimal
/// contiguous slice of items to mount and the offset at which the slice
/// begins. The calculator owns no rendering state; it is a pure function of
/// its configuration and the last scroll offset, plus an internal extent
/// cache kept purely as a performance optimization.
///
/// All query methods fail with [`WindowError::Unconfigured`] until
/// [`WindowCalculator::configure`] has succeeded once.
#[derive(Debug)]
pub struct WindowCalculator {
    options: Option<WindowOptions>,
    cache: ExtentCache,
    scroll_offset: u64,
}

impl WindowCalculator {
    pub fn new() -> Self {
        Self {
            options: None,
            cache: ExtentCache::new(0),
            scroll_offset: 0,
        }
    }

    /// Validates and installs a configuration, replacing any previous one.
    ///
    /// When `total` differs from the previous configuration the extent cache
    /// is cleared; cached indices may no longer be meaningful against the new
    /// data set. A change to the extent provider's semantics must be signaled
    /// separately via [`WindowCalculator::invalidate`].
    ///
    /// `total == 0` is not an error: queries against an empty list return an
    /// empty [`Range`] and a total extent of 0.
    pub fn configure(&mut self, options: WindowOptions) -> Result<(), WindowError> {
        options.validate()?;
        wdebug!(
            total = options.total,
            viewport_extent = options.viewport_extent,
            buffer = options.buffer,
            "configure"
        );
        match &self.options {
            Some(prev) if prev.total == options.total => {}
            _ => self.cache.set_total(options.total),
        }
        self.options = Some(options);
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.options.is_some()
    }

    pub fn options(&self) -> Option<&WindowOptions> {
        self.options.as_ref()
    }

    /// The last offset passed to [`WindowCalculator::update_scroll`], after
    /// clamping.
    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// Clears the extent cache without touching configuration or scroll
    /// state.
    ///
    /// Callers must invoke this whenever the extent provider would return
    /// different values for already-cached indices, e.g. after a content
    /// reflow changed a variable-extent row. Until then cached entries stay
    /// authoritative.
    pub fn invalidate(&mut self) {
        wdebug!("invalidate");
        self.cache.clear();
    }

    /// Computes the mount range for a scroll offset.
    ///
    /// Momentarily negative offsets (elastic overscroll) are clamped to 0.
    /// Offsets past the end of the content are trusted as-is; clamping to the
    /// scrollable maximum is the scroll container's job (see
    /// [`WindowCalculator::clamp_scroll_offset`]).
    ///
    /// Deterministic: the same configuration and offset always produce the
    /// same [`Range`]. The retained scroll offset and the extent cache are
    /// updated as side effects.
    pub fn update_scroll(&mut self, offset: i64) -> Result<Range, WindowError> {
        let opts = self.configured()?;
        let offset = offset.max(0) as u64;
        self.scroll_offset = offset;
        wtrace!(offset, "update_scroll");
        Ok(self.compute_range(&opts, offset))
    }

    /// Sum of extents of all items, for sizing a spacer element.
    pub fn total_extent(&mut self) -> Result<u64, WindowError> {
        let opts = self.configured()?;
        Ok(self.total_extent_inner(&opts))
    }

    /// Prefix-sum offset at which `index` begins.
    ///
    /// This is the offset a caller assigns to its scroll container to bring
    /// the item to the top of the viewport. Out-of-range indices are clamped
    /// to the last valid index rather than rejected; a "scroll to item N"
    /// request racing a data shrink should degrade gracefully, not crash the
    /// UI. On an empty list this returns 0.
    pub fn offset_for_index(&mut self, index: usize) -> Result<u64, WindowError> {
        let opts = self.configured()?;
        if opts.total == 0 {
            return Ok(0);
        }
        let index = index.min(opts.total - 1);
        Ok(self.prefix(&opts, index))
    }

    /// Like [`WindowCalculator::offset_for_index`], with an alignment target.
    ///
    /// `Align::Start` matches `offset_for_index` except that the result is
    /// clamped to the scrollable maximum. `Align::Auto` keeps the current
    /// offset when the item is already fully visible and otherwise scrolls
    /// the minimal distance.
    pub fn offset_for_index_aligned(
        &mut self,
        index: usize,
        align: Align,
    ) -> Result<u64, WindowError> {
        let opts = self.configured()?;
        if opts.total == 0 {
            return Ok(0);
        }
        let index = index.min(opts.total - 1);
        let start = self.prefix(&opts, index);
        let size = self.extent_of(&opts, index) as u64;
        let end = start.saturating_add(size);
        let view = opts.viewport_extent as u64;

        let target = match align {
            Align::Start => start,
            Align::End => end.saturating_sub(view),
            Align::Center => start
                .saturating_add(size / 2)
                .saturating_sub(view / 2),
            Align::Auto => {
                let cur = self.scroll_offset;
                let cur_end = cur.saturating_add(view);
                if start >= cur && end <= cur_end {
                    cur
                } else if start < cur {
                    start
                } else {
                    end.saturating_sub(view)
                }
            }
        };

        let max = self.total_extent_inner(&opts).saturating_sub(view);
        Ok(target.min(max))
    }

    /// Largest offset at which the viewport still shows content.
    pub fn max_scroll_offset(&mut self) -> Result<u64, WindowError> {
        let opts = self.configured()?;
        let view = opts.viewport_extent as u64;
        Ok(self.total_extent_inner(&opts).saturating_sub(view))
    }

    pub fn clamp_scroll_offset(&mut self, offset: u64) -> Result<u64, WindowError> {
        Ok(offset.min(self.max_scroll_offset()?))
    }

    /// Index of the item whose extent span contains `offset`.
    ///
    /// Boundary offsets belong to the item that starts there; offsets past
    /// the last item clamp to the last index. `None` only for an empty list.
    pub fn index_at_offset(&mut self, offset: u64) -> Result<Option<usize>, WindowError> {
        let opts = self.configured()?;
        if opts.total == 0 {
            return Ok(None);
        }
        Ok(Some(self.index_at(&opts, offset)))
    }

    /// Replaces the cached extent of a single item in `O(log n)`.
    ///
    /// Cheaper than a full [`WindowCalculator::invalidate`] when the caller
    /// knows exactly which row reflowed. The provider must already return the
    /// new value for `index`, otherwise a later cache rebuild resurrects the
    /// old one. No-op for uniform-extent lists, for indices past the end, and
    /// for indices the cache has not resolved yet.
    pub fn update_extent(&mut self, index: usize, extent: u32) -> Result<(), WindowError> {
        let opts = self.configured()?;
        if index >= opts.total {
            return Ok(());
        }
        wtrace!(index, extent, "update_extent");
        if let ItemExtent::Variable(_) = opts.extent {
            self.cache.update(index, extent);
        }
        Ok(())
    }

    fn configured(&self) -> Result<WindowOptions, WindowError> {
        // Cheap clone: the provider is behind an Arc.
        self.options.clone().ok_or(WindowError::Unconfigured)
    }

    fn compute_range(&mut self, opts: &WindowOptions, offset: u64) -> Range {
        let total = opts.total;
        if total == 0 {
            return Range::default();
        }

        let raw_start = self.index_at(opts, offset);
        let start = raw_start.saturating_sub(opts.buffer);
        let render_offset = self.prefix(opts, start);

        // The buffer below the viewport is expressed in item counts but the
        // walk is extent-based, so it is approximated in default-extent
        // units. Observed behavior of the reference design, kept as-is.
        let span = opts.viewport_extent as u64
            + opts.buffer as u64 * opts.default_extent as u64;
        let last = self.index_spanning(opts, render_offset.saturating_add(span));
        let end = cmp::min(last.saturating_add(opts.buffer), total - 1) + 1;

        Range {
            start,
            end,
            render_offset,
        }
    }

    fn index_at(&mut self, opts: &WindowOptions, offset: u64) -> usize {
        match &opts.extent {
            ItemExtent::Fixed(e) => {
                let i = offset / *e as u64;
                i.min((opts.total - 1) as u64) as usize
            }
            ItemExtent::Variable(p) => self.cache.index_at(offset, p.as_ref()),
        }
    }

    /// First index whose cumulative extent reaches `target`.
    fn index_spanning(&mut self, opts: &WindowOptions, target: u64) -> usize {
        match &opts.extent {
            ItemExtent::Fixed(e) => {
                if target == 0 {
                    return 0;
                }
                let i = (target - 1) / *e as u64;
                i.min((opts.total - 1) as u64) as usize
            }
            ItemExtent::Variable(p) => self.cache.index_spanning(target, p.as_ref()),
        }
    }

    fn prefix(&mut self, opts: &WindowOptions, index: usize) -> u64 {
        match &opts.extent {
            ItemExtent::Fixed(e) => index as u64 * *e as u64,
            ItemExtent::Variable(p) => self.cache.prefix(index, p.as_ref()),
        }
    }

    fn extent_of(&mut self, opts: &WindowOptions, index: usize) -> u32 {
        match &opts.extent {
            ItemExtent::Fixed(e) => *e,
            ItemExtent::Variable(p) => self.cache.extent_of(index, p.as_ref()),
        }
    }

    fn total_extent_inner(&mut self, opts: &WindowOptions) -> u64 {
        match &opts.extent {
            ItemExtent::Fixed(e) => opts.total as u64 * *e as u64,
            ItemExtent::Variable(p) => self.cache.total_extent(p.as_ref()),
        }
    }
}

impl Default for WindowCalculator {
    fn default() -> Self {
        Self::new()
    }
}
