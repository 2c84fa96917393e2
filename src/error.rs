/// Errors surfaced by [`crate::WindowCalculator`].
///
/// Only integration bugs are reported as errors: an invalid configuration or
/// a query against a calculator that was never configured. Everything else
/// (negative scroll offsets, out-of-range indices, empty lists) is recovered
/// locally and produces a well-defined result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// `default_extent` must be positive; a zero extent would make every
    /// offset map to every item.
    #[error("default_extent must be positive")]
    InvalidDefaultExtent,
    /// `viewport_extent` must be positive; a zero viewport has no visible
    /// window to fill.
    #[error("viewport_extent must be positive")]
    InvalidViewportExtent,
    /// A query method was called before `configure` ever succeeded.
    #[error("windowing calculator used before configure()")]
    Unconfigured,
}
