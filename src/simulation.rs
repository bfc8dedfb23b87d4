//! Interactive runner: window, event loop and frame pacing.

use std::sync::Arc;
use std::time::Instant;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use rand::Rng;

use crate::error::{SimulationError, SwarmError};
use crate::gpu::WindowCanvas;
use crate::session::Session;
use crate::spawn::{seeded_rng, time_seed};
use crate::surface::Surface;
use crate::time::FrameClock;

/// Title of the visualization window.
pub const WINDOW_TITLE: &str = "Graph";

/// Initial logical window size.
pub const WINDOW_SIZE: (u32, u32) = (800, 600);

/// Dropped frames in a row after which the run is abandoned.
pub const MAX_CONSECUTIVE_FRAME_FAILURES: u32 = 300;

/// Opens the window and runs the visualization until it is closed.
///
/// ```ignore
/// ringswarm::Simulation::new().with_seed(7).run()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    seed: Option<u64>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed instead of one derived from the clock.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run until the window is closed or a fatal error occurs.
    pub fn run(self) -> Result<(), SimulationError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.seed.unwrap_or_else(time_seed));
        event_loop.run_app(&mut app)?;

        match app.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Counts dropped frames in a row and decides when the run must end.
#[derive(Debug, Default)]
struct DroppedFrames {
    consecutive: u32,
}

impl DroppedFrames {
    /// Run one tick of `session` on `surface`.
    ///
    /// A surface that is not ready (minimized) skips the tick without
    /// counting it. Returns the error that ends the run, if any.
    fn tick<R: Rng, S: Surface + ?Sized>(&mut self, session: &mut Session<R>, surface: &mut S) -> Option<SwarmError> {
        if let Err(err) = surface.size() {
            log::trace!("tick skipped: {}", err);
            return None;
        }

        match session.tick(surface) {
            Ok(_) => {
                self.consecutive = 0;
                None
            }
            Err(err) if err.is_fatal() => Some(err),
            Err(err) => {
                self.consecutive += 1;
                log::warn!("frame dropped: {}", err);
                (self.consecutive >= MAX_CONSECUTIVE_FRAME_FAILURES).then_some(err)
            }
        }
    }
}

struct App {
    seed: u64,
    window: Option<Arc<Window>>,
    canvas: Option<WindowCanvas>,
    session: Option<Session>,
    clock: FrameClock,
    dropped: DroppedFrames,
    fatal: Option<SimulationError>,
}

impl App {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            window: None,
            canvas: None,
            session: None,
            clock: FrameClock::default(),
            dropped: DroppedFrames::default(),
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_SIZE.0, WINDOW_SIZE.1))
            .with_resizable(true);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let canvas = pollster::block_on(WindowCanvas::new(window.clone()))?;
        let session = Session::new(&canvas, seeded_rng(self.seed))?;
        log::info!("window ready, seed {}", self.seed);

        self.window = Some(window);
        self.canvas = Some(canvas);
        self.session = Some(session);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: SimulationError) {
        log::error!("{}", err);
        self.fatal = Some(err);
        self.shutdown(event_loop);
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(session) = &mut self.session {
            session.shutdown();
        }
        event_loop.exit();
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<(), SwarmError> {
        let (Some(canvas), Some(session)) = (&mut self.canvas, &mut self.session) else {
            return Ok(());
        };
        canvas.resize(size)?;
        session.resize(canvas)
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(canvas), Some(session)) = (&mut self.canvas, &mut self.session) else {
            return;
        };

        if let Some(fps) = self.clock.tick(Instant::now()) {
            log::debug!("{:.1} fps", fps);
        }

        if let Some(err) = self.dropped.tick(session, canvas) {
            self.fail(event_loop, err.into());
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(err) = self.init(event_loop) {
                self.fail(event_loop, err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.shutdown(event_loop);
            }
            WindowEvent::Resized(physical_size) => match self.resize(physical_size) {
                Ok(()) => {}
                Err(err) if err.is_fatal() => self.fail(event_loop, err.into()),
                Err(err) => log::warn!("resize skipped: {}", err),
            },
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.fatal.is_some() {
            return;
        }
        if let Some(window) = &self.window {
            let size = window.inner_size();
            let visible = size.width > 0 && size.height > 0;
            if visible && self.clock.is_due(Instant::now()) {
                window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
        }
    }
}
