/// Alignment for programmatic scroll-to-index targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// The computed mount window: which items to materialize and where.
///
/// `start..end` is half-open; `render_offset` is the cumulative extent of all
/// items strictly before `start`, i.e. the position at which the first mounted
/// item begins. An empty range (`start >= end`) means nothing should be
/// mounted, which is how an empty list is reported without ever pointing at
/// an out-of-bounds item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub start: usize,
    pub end: usize, // exclusive
    /// Prefix sum of extents `[0, start)`.
    pub render_offset: u64,
}

impl Range {
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}
