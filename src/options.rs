use crate::{ItemExtent, WindowError};

/// Configuration for [`crate::WindowCalculator`].
///
/// Options are replaced wholesale via `configure`; the calculator never
/// mutates them in place. The type is cheap to clone: a variable extent
/// provider is stored behind an `Arc`.
#[derive(Clone, Debug)]
pub struct WindowOptions {
    /// Number of logical items.
    pub total: usize,
    /// Size of the visible window along the scroll axis.
    pub viewport_extent: u32,
    /// Fallback per-item extent; also the unit in which `buffer` is converted
    /// to a pixel span for variable-extent lists.
    pub default_extent: u32,
    /// Extra items kept mounted beyond each edge of the visible window.
    pub buffer: usize,
    /// How per-item extents are obtained.
    pub extent: ItemExtent,
}

impl WindowOptions {
    pub const DEFAULT_EXTENT: u32 = 40;

    /// Creates options for a uniform-extent list of `total` items.
    pub fn new(total: usize, viewport_extent: u32) -> Self {
        Self {
            total,
            viewport_extent,
            default_extent: Self::DEFAULT_EXTENT,
            buffer: 0,
            extent: ItemExtent::Fixed(Self::DEFAULT_EXTENT),
        }
    }

    /// Sets the fallback per-item extent.
    ///
    /// When no per-item provider is installed this is also the uniform item
    /// extent.
    pub fn with_default_extent(mut self, default_extent: u32) -> Self {
        self.default_extent = default_extent;
        if self.extent.is_fixed() {
            self.extent = ItemExtent::Fixed(default_extent);
        }
        self
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    /// Installs a per-item extent provider for variable-size lists.
    pub fn with_extent_fn(mut self, f: impl Fn(usize) -> u32 + Send + Sync + 'static) -> Self {
        self.extent = ItemExtent::variable(f);
        self
    }

    pub fn with_extent(mut self, extent: ItemExtent) -> Self {
        self.extent = extent;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), WindowError> {
        if self.default_extent == 0 {
            return Err(WindowError::InvalidDefaultExtent);
        }
        if self.viewport_extent == 0 {
            return Err(WindowError::InvalidViewportExtent);
        }
        if let ItemExtent::Fixed(e) = self.extent {
            if e == 0 {
                return Err(WindowError::InvalidDefaultExtent);
            }
        }
        Ok(())
    }
}
