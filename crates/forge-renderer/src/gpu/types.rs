/// Errors that can occur during GPU rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("readback error: {0}")]
    ReadbackError(String),

    #[error("image encode error: {0}")]
    EncodeError(String),

    #[error("render target {width}x{height} exceeds device limit {max}")]
    InvalidSize { width: u32, height: u32, max: u32 },
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<wgpu::BufferAsyncError> for RendererError {
    fn from(e: wgpu::BufferAsyncError) -> Self {
        RendererError::ReadbackError(e.to_string())
    }
}

impl From<image::ImageError> for RendererError {
    fn from(e: image::ImageError) -> Self {
        RendererError::EncodeError(e.to_string())
    }
}

impl From<RendererError> for forge_common::ForgeError {
    fn from(e: RendererError) -> Self {
        forge_common::ForgeError::Renderer(e.to_string())
    }
}
