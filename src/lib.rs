//! A headless windowing calculator for virtualized lists and grids.
//!
//! Rendering thousands of rows directly is prohibitively expensive in any UI
//! stack. This crate computes, for a given scroll offset, the minimal
//! contiguous slice of items that must be materialized, plus the pixel offset
//! at which that slice begins so that scrolling feels continuous.
//!
//! It is UI-agnostic. A rendering layer is expected to provide:
//! - the logical item count and per-item extents (or a uniform default)
//! - the viewport extent along the scroll axis
//! - scroll offsets as they change
//!
//! In return it receives a [`Range`] describing which items to mount and
//! where, the total scrollable extent for sizing a spacer element, and the
//! offset that brings an arbitrary index into view.
//!
//! Offset → index lookup is backed by a Fenwick tree over lazily resolved
//! item extents, so queries are `O(log n)` even for variable-extent lists.
//! Uniform-extent lists skip the tree entirely and use direct arithmetic.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod error;
mod extent;
mod fenwick;
mod options;
mod types;
mod window;


pub use error::WindowError;
pub use extent::ItemExtent;
pub use options::WindowOptions;
pub use types::{Align, Range};
pub use window::WindowCalculator;
