use crate::assets::color::Color;
use crate::foundation::core::Canvas;
use crate::foundation::error::{CracktroError, CracktroResult};
use crate::render::blend::blend_in_place;
use crate::render::frame::FrameRGBA;
use crate::render::surface::Surface;
use crate::scene::model::BlendMode;

/// Grid cell edge in pixels.
pub const GRID_SPACING: u32 = 50;

/// Cosmetic overlays drawn above every effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Overlays {
    /// 1px white lines every [`GRID_SPACING`] pixels.
    pub grid: bool,
    /// Dark line on every other row.
    pub scanlines: bool,
}

/// One painted effect layer, ready for compositing.
#[derive(Clone, Copy, Debug)]
pub struct CompositeLayer<'a> {
    pub surface: &'a Surface,
    pub opacity: f64,
    pub blend_mode: BlendMode,
}

/// Fill `background`, stack `layers` bottom-up, then draw `overlays`.
///
/// Layers must already be in paint order.
pub fn compose(
    canvas: Canvas,
    background: Color,
    layers: &[CompositeLayer<'_>],
    overlays: Overlays,
) -> CracktroResult<FrameRGBA> {
    let mut out = Surface::new(canvas);
    out.fill(background.to_rgba8_premul());

    for layer in layers {
        if layer.surface.canvas() != canvas {
            return Err(CracktroError::render(format!(
                "layer is {}x{}, frame is {}x{}",
                layer.surface.canvas().width,
                layer.surface.canvas().height,
                canvas.width,
                canvas.height
            )));
        }
        let opacity = layer.opacity.clamp(0.0, 1.0) as f32;
        if opacity <= 0.0 {
            continue;
        }
        blend_in_place(layer.blend_mode, out.data_mut(), layer.surface.data(), opacity)?;
    }

    if overlays.grid {
        draw_grid(&mut out);
    }
    if overlays.scanlines {
        draw_scanlines(&mut out);
    }

    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: out.into_data(),
        premultiplied: true,
    })
}

fn tint_pixel(data: &mut [u8], i: usize, src: [u8; 4]) {
    let d = &mut data[i..i + 4];
    let out = crate::render::blend::over([d[0], d[1], d[2], d[3]], src, 1.0);
    d.copy_from_slice(&out);
}

// Vertical and horizontal lines are separate passes, so crossings are brighter.
fn draw_grid(out: &mut Surface) {
    let canvas = out.canvas();
    let line = Color::WHITE.with_alpha(0.1).to_rgba8_premul().to_array();
    let width = canvas.width as usize;
    let data = out.data_mut();
    for y in 0..canvas.height as usize {
        for x in (0..width).step_by(GRID_SPACING as usize) {
            tint_pixel(data, (y * width + x) * 4, line);
        }
    }
    for y in (0..canvas.height as usize).step_by(GRID_SPACING as usize) {
        for x in 0..width {
            tint_pixel(data, (y * width + x) * 4, line);
        }
    }
}

// The pattern repeats from the bottom edge upward.
fn draw_scanlines(out: &mut Surface) {
    let canvas = out.canvas();
    let shade = Color::BLACK.with_alpha(0.1).to_rgba8_premul().to_array();
    let width = canvas.width as usize;
    let height = canvas.height as usize;
    let data = out.data_mut();
    for y in 0..height {
        if (height - 1 - y) % 2 != 0 {
            continue;
        }
        for x in 0..width {
            tint_pixel(data, (y * width + x) * 4, shade);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
