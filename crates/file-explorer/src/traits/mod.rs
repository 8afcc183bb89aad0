//! Extension traits for plugging the explorer into a renderer.

mod layout_source;

pub use layout_source::LayoutSource;
