mod context;
mod frame;
mod pipeline;

pub use context::GpuContext;
pub use frame::FrameTexture;
pub use pipeline::FramePipeline;
