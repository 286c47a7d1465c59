use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, InitCtx};
use crate::device::{GlContext, GlInit};
use crate::time::FrameClock;

use super::placement::centered_position;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub size: PhysicalSize<u32>,
    /// Center on the primary display when the platform reports one.
    pub center_on_primary: bool,
    pub gl: GlInit,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "prism".to_string(),
            size: PhysicalSize::new(1024, 800),
            center_on_primary: true,
            gl: GlInit::default(),
        }
    }
}

/// Render loop state.
///
/// `Closing` is terminal and is entered only by a close request.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Closing,
}

impl LoopState {
    pub fn next(self, event: &WindowEvent) -> Self {
        match (self, event) {
            (LoopState::Running, WindowEvent::CloseRequested) => LoopState::Closing,
            (state, _) => state,
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, initializes `app` and renders until the window is
    /// closed. Startup failures and swap failures are returned.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    app: A,

    gl: Option<GlContext>,
    clock: FrameClock,
    loop_state: LoopState,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            gl: None,
            clock: FrameClock::default(),
            loop_state: LoopState::Running,
            failure: None,
        }
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_decorations(true);

        if self.config.center_on_primary {
            match event_loop.primary_monitor() {
                Some(monitor) => {
                    let pos = centered_position(monitor.size(), self.config.size);
                    log::debug!("placing window at {},{} on {:?}", pos.x, pos.y, monitor.name());
                    attrs = attrs.with_position(pos);
                }
                None => log::debug!("no primary monitor reported; placement left to the platform"),
            }
        }

        let ctx = GlContext::create(event_loop, attrs, &self.config.gl)?;

        self.app
            .on_init(&mut InitCtx { gl: ctx.gl() })
            .context("app initialization failed")?;

        ctx.window().request_redraw();
        self.gl = Some(ctx);
        Ok(())
    }

    fn render_frame(&mut self) -> Result<AppControl> {
        let Some(ctx) = self.gl.as_ref() else {
            return Ok(AppControl::Continue);
        };

        let time = self.clock.tick();
        let control = self.app.on_frame(&mut FrameCtx { gl: ctx.gl(), time });

        ctx.window().pre_present_notify();
        ctx.swap_buffers()?;

        Ok(control)
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.loop_state = LoopState::Closing;
        // Releases surface, context and window.
        self.gl = None;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.close(event_loop);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl.is_some() || !self.loop_state.is_running() {
            return;
        }

        if let Err(e) = self.open_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.loop_state.is_running() {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; swap_buffers paces the loop.
        if let Some(ctx) = self.gl.as_ref() {
            ctx.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if !self.loop_state.is_running() {
            return;
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.close(event_loop);
            return;
        }

        self.loop_state = self.loop_state.next(&event);
        if !self.loop_state.is_running() {
            log::info!("close requested, shutting down");
            self.close(event_loop);
            return;
        }

        match event {
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(ctx) = self.gl.as_ref() {
                    ctx.resize_surface();
                }
            }

            WindowEvent::RedrawRequested => match self.render_frame() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.close(event_loop),
                Err(e) => self.fail(event_loop, e),
            },

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_close_events() -> Vec<WindowEvent> {
        vec![
            WindowEvent::RedrawRequested,
            WindowEvent::Focused(true),
            WindowEvent::Focused(false),
            WindowEvent::Resized(PhysicalSize::new(640, 480)),
            WindowEvent::Occluded(true),
            WindowEvent::Destroyed,
        ]
    }

    #[test]
    fn close_request_enters_closing() {
        assert_eq!(
            LoopState::Running.next(&WindowEvent::CloseRequested),
            LoopState::Closing
        );
    }

    #[test]
    fn other_events_keep_running() {
        let mut state = LoopState::Running;
        for _ in 0..1_000 {
            for event in non_close_events() {
                state = state.next(&event);
            }
        }
        assert!(state.is_running());
    }

    #[test]
    fn closing_is_terminal() {
        let mut state = LoopState::Closing;
        for event in non_close_events() {
            state = state.next(&event);
        }
        assert_eq!(state.next(&WindowEvent::CloseRequested), LoopState::Closing);
        assert!(!state.is_running());
    }

    #[test]
    fn default_config_matches_demo_window() {
        let config = RuntimeConfig::default();
        assert_eq!(config.size, PhysicalSize::new(1024, 800));
        assert_eq!(config.gl.version, (3, 3));
        assert!(config.gl.core_profile && config.gl.double_buffer);
    }
}
