//! GPU device + surface management.
//!
//! Creates the wgpu Instance/Adapter/Device/Queue for a window, configures its
//! surface and hands out one `GpuFrame` per presented frame.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;
