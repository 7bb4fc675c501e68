use crate::config::ViewerConfig;
use crate::objects::Mesh;
use crate::render::{DrawList, RenderError, Renderer};

use thiserror::Error;
use tracing::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to run the event loop: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] OsError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Shows a single mesh until the window is closed.
pub struct App<R: Renderer> {
    config: ViewerConfig,
    mesh_name: String,
    draw_list: DrawList,
    renderer: R,
    window: Option<Window>,
    failure: Option<AppError>,
}

impl<R: Renderer> App<R> {
    pub fn new(config: ViewerConfig, mesh: &Mesh, renderer: R) -> Self {
        let draw_list = DrawList::from_mesh(mesh, config.topology);

        return App {
            config,
            mesh_name: mesh.name.clone(),
            draw_list,
            renderer,
            window: None,
            failure: None,
        };
    }

    pub fn draw_list(&self) -> &DrawList {
        return &self.draw_list;
    }

    pub fn renderer(&self) -> &R {
        return &self.renderer;
    }

    /// Runs the event loop to completion and hands the renderer back.
    pub fn run(mut self) -> Result<R, AppError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self.renderer),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        info!(title = %self.config.title, "creating window");
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));
        let window = event_loop.create_window(window_attributes)?;

        info!(
            mesh = %self.mesh_name,
            triangles = self.draw_list.triangle_count(),
            "uploading mesh"
        );
        self.renderer.upload(&self.draw_list)?;

        self.window = Some(window);
        return Ok(());
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, failure: AppError) {
        error!("{}", failure);
        self.failure = Some(failure);
        event_loop.exit();
    }
}

impl<R: Renderer> ApplicationHandler for App<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested; stopping");
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.renderer.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.renderer.draw_frame() {
                    self.fail(event_loop, e.into());
                    return;
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }
}
