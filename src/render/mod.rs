//! The boundary between parsed meshes and whatever draws them.

mod draw_list;
mod headless;

pub use draw_list::*;
pub use headless::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no geometry has been uploaded")]
    NothingUploaded,
}

/// A backend that owns GPU-side buffers for one mesh at a time.
pub trait Renderer {
    /// Replaces the current vertex buffer with `draw_list`.
    fn upload(&mut self, draw_list: &DrawList) -> Result<(), RenderError>;

    fn draw_frame(&mut self) -> Result<(), RenderError>;

    fn resize(&mut self, width: u32, height: u32);
}
