//! Aggregation and chunking of collected history.

pub mod aggregate;
pub mod chunk;

pub use aggregate::render_log_text;
pub use chunk::split_text;
