// Application layer - use cases and the frame source seam
pub mod frame_source;
pub mod sampler;
pub mod timeline;
