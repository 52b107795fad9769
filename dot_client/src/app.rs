//! winit host for a [`WindowHandler`]

use std::sync::Arc;
use std::time::Instant;

use dot_core::{Config, DotController, Host, WindowHandler};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::error::ClientError;
use crate::frame::Frame;
use crate::input::{key_action, KeyAction};
use crate::renderer::Renderer;
use crate::timing::Ticker;

/// Ends the winit loop when the handler asks to exit
struct LoopHost<'a> {
    event_loop: &'a ActiveEventLoop,
}

impl Host for LoopHost<'_> {
    fn exit(&mut self) {
        self.event_loop.exit();
    }
}

pub struct App {
    controller: DotController,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    ticker: Ticker,
    frame: Frame,
    error: Option<ClientError>,
}

impl App {
    pub fn new(controller: DotController) -> Result<Self, ClientError> {
        let ticker = Ticker::from_secs(controller.config().update_rate, Instant::now())?;
        Ok(Self {
            controller,
            window: None,
            renderer: None,
            ticker,
            frame: Frame::default(),
            error: None,
        })
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ClientError> {
        let config = self.controller.config();
        let attributes = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(
                config.screen_width as f64,
                config.screen_height as f64,
            ))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(attributes)?);
        tracing::info!(
            title = %config.title,
            width = config.screen_width,
            height = config.screen_height,
            "window created"
        );

        let renderer = futures::executor::block_on(Renderer::new(
            window.clone(),
            config.screen_width,
            config.screen_height,
        ))?;

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.ticker.reset(Instant::now());
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        self.controller.on_draw(&mut self.frame);
        match renderer.draw(&self.frame) {
            Ok(()) => {}
            Err(ClientError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                tracing::warn!("surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(ClientError::Surface(wgpu::SurfaceError::Timeout)) => {
                tracing::warn!("surface timed out, skipping frame");
            }
            Err(e) => {
                tracing::error!(error = %e, "render failed");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            tracing::error!(error = %e, "startup failed");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                match key_action(event.physical_key, event.state, event.repeat) {
                    Some(KeyAction::Press(key)) => {
                        let mut host = LoopHost { event_loop };
                        self.controller.on_key_press(key, &mut host);
                    }
                    Some(KeyAction::Release(key)) => self.controller.on_key_release(key),
                    None => {}
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() || event_loop.exiting() {
            return;
        }

        let ticks = self.ticker.poll(Instant::now());
        for _ in 0..ticks {
            self.controller.on_update(self.ticker.dt());
        }
        if ticks > 0 {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.ticker.deadline()));
    }
}

/// Open the window and run until escape, close, or a fatal error
pub fn run(config: Config) -> Result<(), ClientError> {
    let controller = DotController::new(config)?;
    let event_loop = EventLoop::new()?;
    let mut app = App::new(controller)?;

    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
