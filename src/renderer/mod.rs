//! Software rendering module
//!
//! Rasterizes graphics context calls into a pixel buffer on the CPU.

pub mod raster;
pub mod shapes;

pub use raster::PixelCanvas;
