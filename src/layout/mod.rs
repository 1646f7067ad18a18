//! Layout module: rectangle geometry for placing child regions.
//!
//! Composite widgets carve their buffer into sub-regions with [`Rect`] and
//! hand each child a [`BufferView`](crate::buffer::BufferView) over it.

mod rect;

pub use rect::Rect;
