use polygon_core::GeometryError;
use thiserror::Error;

/// Fatal initialization failures. None of these are retried.
#[derive(Debug, Error)]
pub enum GpuError {
    #[error("cannot create a drawing surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("surface reports no supported texture formats")]
    UnsupportedSurface,
    #[error("request_device error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("polygon does not fit the index buffer: {0}")]
    Geometry(#[from] GeometryError),
    #[error("shader pipeline failed to build: {0}")]
    Pipeline(String),
}
