use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use trigon_geom::Rgb;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Icon, Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputEvent, InputFrame, InputState, Key, KeyState};
use crate::render::RenderCtx;
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Window icon image. A missing or undecodable file is logged and ignored.
    pub icon: Option<PathBuf>,
    /// Handed to the app each frame as `FrameCtx::clear_color`.
    pub clear_color: Rgb,
    /// Pressing Escape ends the run.
    pub exit_on_escape: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            icon: None,
            clear_color: Rgb::new(0.0, 0.0, 0.0),
            exit_on_escape: true,
        }
    }
}

/// Runtime context passed to the application.
///
/// Requests are applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    exit: bool,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.exit = true;
    }

    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, drives `app` until the window closes, and returns the
    /// first fatal error (window, GPU or app initialization) if any.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
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

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            exit_requested: false,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        self.exit(event_loop);
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        // Dropping the entry releases GPU resources before the loop winds down.
        self.entry = None;
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        if let Some(path) = self.config.icon.as_deref() {
            match load_icon(path) {
                Ok(icon) => attrs = attrs.with_window_icon(Some(icon)),
                Err(e) => log::warn!("{e:#}"),
            }
        }

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
    }

    fn init_app(&mut self, entry: &WindowEntry) -> Result<()> {
        let app = &mut self.app;
        entry.with(|fields| {
            let viewport = WindowCtx { window: fields.window }.viewport();
            let gpu = fields.gpu;
            let rctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), viewport);
            app.on_init(&rctx).context("app initialization failed")
        })
    }

    fn redraw(&mut self) -> AppControl {
        let Some(entry) = self.entry.as_mut() else {
            return AppControl::Continue;
        };

        let app = &mut self.app;
        let clear_color = self.config.clear_color;
        let mut runtime_ctx = RuntimeCtx::default();
        let mut app_control = AppControl::Continue;

        entry.with_mut(|fields| {
            let ft: FrameTime = fields.clock.tick();

            // Scope to ensure `ctx` is dropped before mutating frame state.
            {
                let mut ctx = FrameCtx {
                    window: WindowCtx { window: fields.window },
                    gpu: fields.gpu,
                    input: fields.input_state,
                    input_frame: fields.input_frame,
                    time: ft,
                    clear_color,
                    runtime: &mut runtime_ctx,
                };

                app_control = app.on_frame(&mut ctx);
            }

            // Clear per-frame deltas after the frame is consumed.
            fields.input_frame.clear();
        });

        if runtime_ctx.exit_requested() {
            AppControl::Exit
        } else {
            app_control
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        let entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => return self.fail(event_loop, e),
        };

        if let Err(e) = self.init_app(&entry) {
            return self.fail(event_loop, e);
        }

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: every demo animates or follows the pointer.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, entry, exit_on_escape) = (&mut self.app, &mut self.entry, self.config.exit_on_escape);
        let Some(entry) = entry.as_mut() else {
            return;
        };

        let mut exit = false;

        entry.with_mut(|fields| {
            let scale = fields.window.scale_factor();
            if let Some(ev) = translate_window_event(scale, &event) {
                if exit_on_escape && is_escape_press(&ev) {
                    exit = true;
                }
                fields.input_state.apply_event(fields.input_frame, ev);
            }

            if app.on_window_event(&event) == AppControl::Exit {
                exit = true;
            }
        });

        if exit {
            return self.exit(event_loop);
        }

        // Runtime-managed window lifecycle / resize / redraw handling.
        match &event {
            WindowEvent::CloseRequested => self.exit(event_loop),

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                if self.redraw() == AppControl::Exit {
                    self.exit(event_loop);
                }
            }

            _ => {}
        }
    }
}

fn is_escape_press(ev: &InputEvent) -> bool {
    matches!(
        ev,
        InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Pressed,
            ..
        }
    )
}

fn load_icon(path: &Path) -> Result<Icon> {
    let rgba = image::open(path)
        .with_context(|| format!("failed to load window icon {}", path.display()))?
        .to_rgba8();
    let (w, h) = rgba.dimensions();
    Icon::from_rgba(rgba.into_raw(), w, h)
        .with_context(|| format!("invalid window icon {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_press_is_detected() {
        let press = InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Pressed,
            repeat: false,
        };
        let release = InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Released,
            repeat: false,
        };
        let other = InputEvent::Key {
            key: Key::W,
            state: KeyState::Pressed,
            repeat: false,
        };
        assert!(is_escape_press(&press));
        assert!(!is_escape_press(&release));
        assert!(!is_escape_press(&other));
    }

    #[test]
    fn missing_icon_is_an_error() {
        assert!(load_icon(Path::new("definitely/not/here.png")).is_err());
    }

    #[test]
    fn default_config_exits_on_escape() {
        let cfg = RuntimeConfig::default();
        assert!(cfg.exit_on_escape);
        assert!(cfg.icon.is_none());
    }
}
