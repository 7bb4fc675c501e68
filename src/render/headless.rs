use tracing::{debug, trace};

use crate::render::{DrawList, RenderError, Renderer};

/// Keeps the uploaded buffer in memory and counts frames instead of drawing.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    buffer: Option<Vec<f32>>,
    extent: (u32, u32),
    frames: u64,
}

impl HeadlessRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        return HeadlessRenderer {
            buffer: None,
            extent: (width, height),
            frames: 0,
        };
    }

    pub fn frames(&self) -> u64 {
        return self.frames;
    }

    pub fn extent(&self) -> (u32, u32) {
        return self.extent;
    }

    pub fn uploaded_vertices(&self) -> usize {
        return self
            .buffer
            .as_ref()
            .map_or(0, |buffer| buffer.len() / DrawList::COMPONENTS);
    }
}

impl Renderer for HeadlessRenderer {
    fn upload(&mut self, draw_list: &DrawList) -> Result<(), RenderError> {
        debug!(
            vertices = draw_list.vertex_count(),
            bytes = draw_list.size_in_bytes(),
            "uploading vertex buffer"
        );
        self.buffer = Some(draw_list.positions.clone());

        return Ok(());
    }

    fn draw_frame(&mut self) -> Result<(), RenderError> {
        if self.buffer.is_none() {
            return Err(RenderError::NothingUploaded);
        }

        self.frames += 1;
        trace!(frame = self.frames, vertices = self.uploaded_vertices(), "frame drawn");

        return Ok(());
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.extent = (width, height);
    }
}
