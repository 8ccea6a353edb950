//! Native window presentation (winit + wgpu)
//!
//! Instead of handing control to `EventLoop::run_app`, the game owns its
//! loop and pumps pending window events once per frame. Events update a
//! [`KeyTracker`]; `poll_input` snapshots it.

use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::Vec2;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

use super::input::{FrameInput, GameKey, KeyTracker};
use super::time::FramePacer;
use super::{PlatformError, Presentation, TEXT_SCALE};
use crate::consts::*;
use crate::renderer::{Color, DrawList, RenderState};
use crate::settings::Settings;
use crate::sim::Rect;

/// Startup pumps to wait for the window before giving up
const INIT_PUMP_ATTEMPTS: u32 = 200;
const INIT_PUMP_TIMEOUT: Duration = Duration::from_millis(10);

/// Window events land here during each pump
struct WindowApp {
    vsync: bool,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    keys: KeyTracker,
    init_error: Option<PlatformError>,
}

impl WindowApp {
    fn new(vsync: bool) -> Self {
        Self {
            vsync,
            window: None,
            render_state: None,
            keys: KeyTracker::new(),
            init_error: None,
        }
    }

    /// Create the window and the GPU state that draws into it
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), PlatformError> {
        let attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                PLAYFIELD_WIDTH as f64,
                PLAYFIELD_HEIGHT as f64,
            ))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(PlatformError::WindowCreation)?,
        );
        let size = window.inner_size();
        info!(
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .map_err(PlatformError::SurfaceCreation)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(PlatformError::Adapter)?;

        info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            (PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            self.vsync,
        ))?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!("Window already exists");
            return;
        }

        if let Err(e) = self.init_graphics(event_loop) {
            error!("Graphics initialization failed: {}", e);
            self.init_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Window close requested");
                self.keys.request_quit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render_state) = &mut self.render_state {
                    render_state.resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } => {
                let key = GameKey::from_physical(event.physical_key);
                trace!(
                    "Key {:?} {:?} (repeat: {}, synthetic: {})",
                    key, event.state, event.repeat, is_synthetic
                );
                self.keys
                    .key_event(key, event.state, event.repeat, is_synthetic);
            }

            WindowEvent::Focused(false) => self.keys.release_all(),

            _ => {}
        }
    }
}

/// [`Presentation`] backed by a real OS window
pub struct WindowPresentation {
    event_loop: EventLoop<()>,
    app: WindowApp,
    draw_list: DrawList,
    pacer: FramePacer,
}

impl WindowPresentation {
    /// Open the window and initialize rendering.
    ///
    /// Pumps the event loop until the window exists, so a successful return
    /// means the first frame can be drawn immediately.
    pub fn new(settings: &Settings) -> Result<Self, PlatformError> {
        let mut event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        let mut app = WindowApp::new(settings.vsync);

        for _ in 0..INIT_PUMP_ATTEMPTS {
            let status = event_loop.pump_app_events(Some(INIT_PUMP_TIMEOUT), &mut app);
            if let Some(e) = app.init_error.take() {
                return Err(e);
            }
            if app.render_state.is_some() || matches!(status, PumpStatus::Exit(_)) {
                break;
            }
        }

        if app.render_state.is_none() {
            return Err(PlatformError::WindowUnavailable);
        }

        Ok(Self {
            event_loop,
            app,
            draw_list: DrawList::new(),
            pacer: FramePacer::new(settings.effective_fps()),
        })
    }
}

impl Presentation for WindowPresentation {
    fn poll_input(&mut self) -> FrameInput {
        if let PumpStatus::Exit(code) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app)
        {
            debug!("Event loop exited with code {}", code);
            self.app.keys.request_quit();
        }
        self.app.keys.snapshot(Instant::now())
    }

    fn draw_rect(&mut self, rect: &Rect, color: Color) {
        self.draw_list.push_rect(rect, color);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color) {
        self.draw_list.push_text(text, pos, TEXT_SCALE, color);
    }

    fn present(&mut self) {
        if let (Some(window), Some(render_state)) =
            (&self.app.window, &mut self.app.render_state)
        {
            window.pre_present_notify();
            match render_state.render(self.draw_list.vertices()) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    warn!("Surface lost, reconfiguring");
                    render_state.reconfigure();
                }
                Err(e) => warn!("Skipping frame: {:?}", e),
            }
        }
        self.draw_list.clear();
    }

    fn wait_for_next_frame(&mut self) {
        self.pacer.wait();
    }

    fn fps(&self) -> Option<u32> {
        self.pacer.fps()
    }
}
