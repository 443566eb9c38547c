//! Plot sink implementations

mod memory;
mod svg;

pub use memory::MemorySink;
pub use svg::SvgScatterSink;
