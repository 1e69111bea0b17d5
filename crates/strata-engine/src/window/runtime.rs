use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use pixels::{Pixels, SurfaceTexture};

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::paint::Rgb;
use crate::raster::Canvas;
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Frame pacing target. Zero redraws as fast as the event loop allows.
    pub target_fps: u32,
    /// Color every frame is cleared to before the app draws.
    pub clear_color: Rgb,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "strata".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            target_fps: 60,
            clear_color: Rgb::new(30, 30, 30),
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.commands.push(Command::SetTitle(title.into()));
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

enum Command {
    SetTitle(String),
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    /// Size of the `pixels` frame buffer; trails the window size until `Resized` arrives.
    buffer_size: PhysicalSize<u32>,

    window: Window,

    #[borrows(window)]
    #[covariant]
    surface: Pixels<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            entry: None,
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.request_exit(event_loop);
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let size = window.inner_size();
        let buffer_size = PhysicalSize::new(size.width.max(1), size.height.max(1));

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::with_target_fps(self.config.target_fps),
            buffer_size,
            window,
            surface_builder: |w| create_surface(w, buffer_size),
        }
            .try_build()
            .context("failed to create presentation surface")?;

        log::debug!("window created at {}x{}", buffer_size.width, buffer_size.height);
        Ok(entry)
    }

    fn resize(&mut self, size: PhysicalSize<u32>) -> Result<()> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(());
        };

        // Minimized windows report a zero size; keep the old buffer until restored.
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }

        entry.with_mut(|fields| -> Result<()> {
            fields
                .surface
                .resize_surface(size.width, size.height)
                .context("failed to resize surface")?;
            fields
                .surface
                .resize_buffer(size.width, size.height)
                .context("failed to resize frame buffer")?;
            *fields.buffer_size = size;
            Ok(())
        })?;

        log::debug!("resized to {}x{}", size.width, size.height);
        entry.with_window(|w| w.request_redraw());
        Ok(())
    }

    /// Drives one frame: clear, let the app draw, clear per-frame input, present.
    fn redraw(&mut self) -> Result<RuntimeCtx> {
        let mut runtime_ctx = RuntimeCtx::default();
        let clear = self.config.clear_color;

        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else {
            return Ok(runtime_ctx);
        };

        let control = entry.with_mut(|fields| -> Result<AppControl> {
            let time = fields.clock.tick();

            // Minimized windows keep pacing but draw nothing.
            let inner = fields.window.inner_size();
            if inner.width == 0 || inner.height == 0 {
                return Ok(AppControl::Continue);
            }

            let size = *fields.buffer_size;

            let control = {
                let mut canvas = Canvas::new(size.width, size.height, fields.surface.frame_mut())?;
                canvas.clear(clear);

                let mut ctx = FrameCtx {
                    viewport: Viewport::new(size.width as i32, size.height as i32),
                    canvas: &mut canvas,
                    input: &*fields.input_state,
                    input_frame: &*fields.input_frame,
                    time,
                    runtime: &mut runtime_ctx,
                };

                app.on_frame(&mut ctx)
            };

            // A click is valid for exactly one frame.
            fields.input_frame.clear();

            fields.window.pre_present_notify();
            fields.surface.render().context("failed to present frame")?;

            Ok(control)
        })?;

        if control == AppControl::Exit {
            runtime_ctx.exit();
        }

        Ok(runtime_ctx)
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::SetTitle(title) => {
                    if let Some(entry) = &self.entry {
                        entry.with_window(|w| w.set_title(&title));
                    }
                }
                Command::Exit => self.request_exit(event_loop),
            }
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(e) => self.fail(event_loop, e.context("failed to create initial window")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = &self.entry else {
            return;
        };

        let deadline = entry.with_clock(|c| c.next_deadline());
        if Instant::now() >= deadline {
            entry.with_window(|w| w.request_redraw());
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        entry.with_mut(|fields| {
            if let Some(ev) = translate_window_event(fields.input_state, &event) {
                fields.input_state.apply_event(fields.input_frame, ev);
            }
        });

        match &event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Err(e) = self.resize(*new_size) {
                    self.fail(event_loop, e);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = self.entry.as_ref().map(|e| e.with_window(|w| w.inner_size()));
                if let Some(new_size) = new_size {
                    if let Err(e) = self.resize(new_size) {
                        self.fail(event_loop, e);
                    }
                }
            }

            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(ctx) => self.apply_commands(event_loop, ctx),
                Err(e) => self.fail(event_loop, e),
            },

            _ => {}
        }
    }
}

fn create_surface(window: &Window, size: PhysicalSize<u32>) -> Result<Pixels<'_>, pixels::Error> {
    let texture = SurfaceTexture::new(size.width, size.height, window);
    Pixels::new(size.width, size.height, texture)
}
