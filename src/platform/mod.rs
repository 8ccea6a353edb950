//! Platform abstraction layer
//!
//! The game loop talks to the outside world only through [`Presentation`]:
//! input polling, drawing, presenting, and frame pacing. The native
//! implementation lives in [`window`].

pub mod input;
pub mod time;
pub mod window;

use std::time::Instant;

use glam::Vec2;

pub use input::{FrameInput, GameKey, KeyTracker};
pub use time::FramePacer;
pub use window::WindowPresentation;

use crate::renderer::{Color, font};
use crate::sim::Rect;

/// Pixel size of one bitmap font cell
pub const TEXT_SCALE: f32 = 3.0;

/// Window, input, and drawing services consumed by the game loop.
///
/// Coordinates are playfield pixels with a top-left origin.
pub trait Presentation {
    /// Collect input since the previous poll, stamped with the frame time
    fn poll_input(&mut self) -> FrameInput;

    fn draw_rect(&mut self, rect: &Rect, color: Color);

    /// Draw one line of text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color);

    /// Show everything drawn since the last present
    fn present(&mut self);

    /// Block until the next frame is due
    fn wait_for_next_frame(&mut self);

    /// Current frame clock reading
    fn now(&self) -> Instant {
        Instant::now()
    }

    /// Rendered width of `text`, for centering
    fn text_width(&self, text: &str) -> f32 {
        font::text_width(text, TEXT_SCALE)
    }

    /// Measured frame rate, if the implementation tracks one
    fn fps(&self) -> Option<u32> {
        None
    }
}

/// Platform initialization errors.
///
/// All of these are fatal: without a window and a GPU device the game
/// cannot run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop
    EventLoopCreation(winit::error::EventLoopError),
    /// The OS refused to create the window
    WindowCreation(winit::error::OsError),
    /// wgpu could not wrap the window in a surface
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No GPU adapter compatible with the surface
    Adapter(wgpu::RequestAdapterError),
    /// The adapter refused to open a device
    Device(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format
    UnsupportedSurface,
    /// The event loop never delivered a window (or exited during startup)
    WindowUnavailable,
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::SurfaceCreation(e) => write!(f, "Surface creation failed: {}", e),
            Self::Adapter(e) => write!(f, "No suitable GPU adapter: {}", e),
            Self::Device(e) => write!(f, "GPU device request failed: {}", e),
            Self::UnsupportedSurface => write!(f, "Surface has no supported texture formats"),
            Self::WindowUnavailable => write!(f, "Window was not created during startup"),
        }
    }
}

impl std::error::Error for PlatformError {}
