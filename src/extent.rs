use alloc::sync::Arc;

/// How per-item extents along the scroll axis are obtained.
///
/// Uniform lists should use [`ItemExtent::Fixed`]: it needs no cache and maps
/// offsets to indices with plain division. [`ItemExtent::Variable`] consults a
/// provider per index; results are cached until invalidated.
#[derive(Clone)]
pub enum ItemExtent {
    /// Every item has the same extent.
    Fixed(u32),
    /// Per-item extents, resolved lazily through the provider.
    Variable(Arc<dyn Fn(usize) -> u32 + Send + Sync>),
}

impl ItemExtent {
    /// Creates a variable provider from a closure.
    pub fn variable(f: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        Self::Variable(Arc::new(f))
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl core::fmt::Debug for ItemExtent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Variable(_) => f.write_str("Variable(..)"),
        }
    }
}
