use crate::foundation::core::{Canvas, Rgba8Premul};

/// Premultiplied RGBA8 pixel buffer, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    canvas: Canvas,
    data: Vec<u8>,
}

impl Surface {
    /// Transparent surface of the given size.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            data: vec![0; canvas.byte_len()],
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Reallocate (and clear) when the size changed. Returns whether it did.
    pub(crate) fn ensure_size(&mut self, canvas: Canvas) -> bool {
        if self.canvas == canvas {
            return false;
        }
        *self = Self::new(canvas);
        true
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    pub fn fill(&mut self, color: Rgba8Premul) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Pixel at `x`, `y`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        let i = self.index(x, y)?;
        let p = &self.data[i..i + 4];
        Some(Rgba8Premul {
            r: p[0],
            g: p[1],
            b: p[2],
            a: p[3],
        })
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        Some(((y as usize) * (self.canvas.width as usize) + (x as usize)) * 4)
    }

    /// True when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|p| p[3] == 0)
    }
}
