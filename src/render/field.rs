//! Closed-form per-pixel fields (plasma, checkerboard floor, rotozoom).
//!
//! Two strategies evaluate the same field: a sequential CPU loop, and a "shader" path that runs
//! the fragment function for every output pixel on a worker pool.

use rayon::prelude::*;

use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{CracktroError, CracktroResult};

/// Largest edge the shader path accepts, mirroring common GPU texture limits.
pub const MAX_SHADER_EDGE: u32 = 8192;

/// Strategy used to evaluate per-pixel fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldBackend {
    #[default]
    Cpu,
    Shader,
}

/// A fragment function: straight-alpha color of the pixel at `x`, `y`.
pub trait Field: Sync {
    fn sample(&self, x: u32, y: u32) -> Color;
}

/// Evaluate `field` for every pixel, replacing the premultiplied `pixels`.
pub(crate) fn paint_field_cpu(pixels: &mut [u8], canvas: Canvas, field: &dyn Field) {
    let width = canvas.width as usize;
    for (i, px) in pixels.chunks_exact_mut(4).enumerate() {
        let x = (i % width) as u32;
        let y = (i / width) as u32;
        px.copy_from_slice(&field.sample(x, y).to_rgba8_premul().to_array());
    }
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> CracktroResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(CracktroError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| CracktroError::render(format!("failed to build rayon thread pool: {e}")))
}

/// Worker pool standing in for a GPU fragment pipeline.
pub struct ShaderContext {
    pool: rayon::ThreadPool,
}

impl ShaderContext {
    pub fn new(threads: Option<usize>) -> CracktroResult<Self> {
        Ok(Self {
            pool: build_thread_pool(threads)?,
        })
    }

    /// Fails for empty targets and targets beyond [`MAX_SHADER_EDGE`].
    pub fn check_target(canvas: Canvas) -> CracktroResult<()> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(CracktroError::render("shader target is empty"));
        }
        if canvas.width > MAX_SHADER_EDGE || canvas.height > MAX_SHADER_EDGE {
            return Err(CracktroError::render(format!(
                "shader target {}x{} exceeds {MAX_SHADER_EDGE} px per edge",
                canvas.width, canvas.height
            )));
        }
        Ok(())
    }

    /// Evaluate `field` row-parallel into `pixels`.
    pub(crate) fn run(&self, pixels: &mut [u8], canvas: Canvas, field: &dyn Field) -> CracktroResult<()> {
        Self::check_target(canvas)?;
        let row_bytes = canvas.width as usize * 4;
        if pixels.len() != row_bytes * canvas.height as usize {
            return Err(CracktroError::render("shader target byte len mismatch"));
        }
        self.pool.install(|| {
            pixels
                .par_chunks_mut(row_bytes)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, px) in row.chunks_exact_mut(4).enumerate() {
                        let c = field.sample(x as u32, y as u32);
                        px.copy_from_slice(&c.to_rgba8_premul().to_array());
                    }
                });
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/field.rs"]
mod tests;
