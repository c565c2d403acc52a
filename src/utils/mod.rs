pub mod color;
pub mod exporter;
pub mod profiler;
