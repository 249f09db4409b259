//! Drawing API handed to effect renderers.
//!
//! Vector primitives are queued into a `vello_cpu` context and rasterized lazily; pixel-level
//! helpers flush the queue first so painting order is preserved.

use kurbo::{Affine, BezPath, Circle, Line, Point, Rect, Shape as _, Stroke, StrokeOpts};

use crate::assets::color::Color;
use crate::assets::raster::PreparedImage;
use crate::foundation::core::Canvas;
use crate::foundation::error::{CracktroError, CracktroResult};
use crate::render::blend::{blend, over};
use crate::render::font;
use crate::render::surface::Surface;
use crate::scene::model::BlendMode;

const STROKE_TOLERANCE: f64 = 0.1;

/// Reusable `vello_cpu` state for one thread of rendering.
#[derive(Default)]
pub struct Rasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    scratch: Option<vello_cpu::Pixmap>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure(&mut self, canvas: Canvas) -> CracktroResult<()> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CracktroError::render("layer width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CracktroError::render("layer height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        self.ctx = Some(ctx);

        let stale = self
            .scratch
            .as_ref()
            .is_none_or(|p| p.width() != width || p.height() != height);
        if stale {
            self.scratch = Some(vello_cpu::Pixmap::new(width, height));
        }
        Ok(())
    }
}

/// One effect's drawing target for the current frame.
pub struct Layer<'a> {
    surface: &'a mut Surface,
    ctx: &'a mut vello_cpu::RenderContext,
    scratch: &'a mut vello_cpu::Pixmap,
    transform: Affine,
    pending: bool,
}

impl<'a> Layer<'a> {
    pub fn new(surface: &'a mut Surface, raster: &'a mut Rasterizer) -> CracktroResult<Self> {
        raster.ensure(surface.canvas())?;
        let (Some(ctx), Some(scratch)) = (raster.ctx.as_mut(), raster.scratch.as_mut()) else {
            return Err(CracktroError::render("rasterizer failed to initialize"));
        };
        Ok(Self {
            surface,
            ctx,
            scratch,
            transform: Affine::IDENTITY,
            pending: false,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.surface.canvas()
    }

    /// Transform applied to subsequent vector primitives. Pixel helpers ignore it.
    pub fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn reset_transform(&mut self) {
        self.transform = Affine::IDENTITY;
    }

    /// Discard queued primitives and clear to transparent.
    pub fn clear(&mut self) {
        if self.pending {
            self.ctx.reset();
            self.pending = false;
        }
        self.surface.clear();
    }

    /// Paint `color` over the whole surface. Translucent colors leave fading trails.
    pub fn fill_all(&mut self, color: Color) {
        self.flush();
        if color.a == 255 {
            self.surface.fill(color.to_rgba8_premul());
            return;
        }
        let src = color.to_rgba8_premul().to_array();
        for px in self.surface.data_mut().chunks_exact_mut(4) {
            let out = over([px[0], px[1], px[2], px[3]], src, 1.0);
            px.copy_from_slice(&out);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 || rect.is_zero_area() {
            return;
        }
        self.prepare(color);
        self.ctx.fill_rect(&rect_to_cpu(rect));
        self.pending = true;
    }

    pub fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        if !positive(radius) {
            return;
        }
        let path = Circle::new(center, radius).to_path(STROKE_TOLERANCE);
        self.fill_path(&path, color);
    }

    pub fn fill_path(&mut self, path: &BezPath, color: Color) {
        if color.a == 0 || path.elements().is_empty() {
            return;
        }
        self.prepare(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
        self.pending = true;
    }

    pub fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color) {
        if !positive(width) || path.elements().is_empty() {
            return;
        }
        let outline = kurbo::stroke(
            path.iter(),
            &Stroke::new(width),
            &StrokeOpts::default(),
            STROKE_TOLERANCE,
        );
        self.fill_path(&outline, color);
    }

    pub fn stroke_line(&mut self, from: Point, to: Point, width: f64, color: Color) {
        let path = Line::new(from, to).to_path(STROKE_TOLERANCE);
        self.stroke_path(&path, width, color);
    }

    pub fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        if !positive(radius) {
            return;
        }
        let path = Circle::new(center, radius).to_path(STROKE_TOLERANCE);
        self.stroke_path(&path, width, color);
    }

    /// Dot-matrix text, left edge at `x`, vertical middle at `y_mid`.
    pub fn fill_text(&mut self, text: &str, x: f64, y_mid: f64, size: f64, color: Color) {
        let path = font::text_path(text, x, y_mid, size);
        self.fill_path(&path, color);
    }

    /// Soft halo around `path`, approximating a canvas shadow blur.
    pub fn glow_path(&mut self, path: &BezPath, radius: f64, color: Color) {
        if !positive(radius) || color.a == 0 {
            return;
        }
        for step in 1..=3 {
            let w = radius * f64::from(step) / 1.5;
            self.stroke_path(path, w, color.fade(0.18));
        }
    }

    /// Rasterize `path` as a coverage mask and color each covered pixel with `shade(x, y)`.
    pub fn fill_path_shaded(&mut self, path: &BezPath, shade: impl Fn(f64, f64) -> Color) {
        if path.elements().is_empty() {
            return;
        }
        self.flush();
        self.prepare(Color::WHITE);
        self.ctx.fill_path(&bezpath_to_cpu(path));
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut *self.scratch);
        self.ctx.reset();

        let width = self.surface.canvas().width as usize;
        let mask = self.scratch.data_as_u8_slice();
        let dst = self.surface.data_mut();
        for (i, (d, m)) in dst.chunks_exact_mut(4).zip(mask.chunks_exact(4)).enumerate() {
            let coverage = m[3];
            if coverage == 0 {
                continue;
            }
            let x = (i % width) as f64 + 0.5;
            let y = (i / width) as f64 + 0.5;
            let c = shade(x, y);
            let src = c.fade(f64::from(coverage) / 255.0).to_rgba8_premul().to_array();
            let out = over([d[0], d[1], d[2], d[3]], src, 1.0);
            d.copy_from_slice(&out);
        }
    }

    /// Radial gradient disc: `stops` are `(offset, color)` pairs over `[0, 1]` of `radius`.
    pub fn fill_radial(&mut self, center: Point, radius: f64, stops: &[(f64, Color)]) {
        let bounds = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        self.radial(bounds, center, center, radius, stops, true);
    }

    /// Radial gradient over all of `rect`; pixels beyond `radius` take the last stop.
    pub fn fill_rect_radial(&mut self, rect: Rect, center: Point, radius: f64, stops: &[(f64, Color)]) {
        self.radial(rect, center, center, radius, stops, false);
    }

    /// Disc shaded by a two-point radial gradient growing from `focal` (radius 0) to the full
    /// circle, like a lit sphere.
    pub fn fill_circle_focal(
        &mut self,
        center: Point,
        radius: f64,
        focal: Point,
        stops: &[(f64, Color)],
    ) {
        let bounds = Rect::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        );
        self.radial(bounds, center, focal, radius, stops, true);
    }

    fn radial(
        &mut self,
        rect: Rect,
        center: Point,
        focal: Point,
        radius: f64,
        stops: &[(f64, Color)],
        clip_disc: bool,
    ) {
        if !positive(radius) || stops.is_empty() {
            return;
        }
        self.flush();
        let canvas = self.surface.canvas();
        let rect = rect.intersect(Rect::new(0.0, 0.0, canvas.w(), canvas.h()));
        if rect.is_zero_area() {
            return;
        }
        let d = center - focal;
        let a = d.hypot2() - radius * radius;
        for y in rect.y0.floor() as i64..rect.y1.ceil() as i64 {
            for x in rect.x0.floor() as i64..rect.x1.ceil() as i64 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if clip_disc && (p - center).hypot2() > radius * radius {
                    continue;
                }
                let q = p - focal;
                let t = if a.abs() < f64::EPSILON || d.hypot2() < f64::EPSILON {
                    q.hypot() / radius
                } else {
                    let qd = q.dot(d);
                    (qd - (qd * qd - a * q.hypot2()).max(0.0).sqrt()) / a
                };
                self.blend_pixel(x, y, gradient_at(stops, t));
            }
        }
    }

    /// Composite a solid `rect` (device space) with `mode` instead of source-over.
    pub fn fill_rect_blend(&mut self, rect: Rect, color: Color, mode: BlendMode) {
        if color.a == 0 {
            return;
        }
        self.flush();
        let canvas = self.surface.canvas();
        let rect = rect.intersect(Rect::new(0.0, 0.0, canvas.w(), canvas.h()));
        if rect.is_zero_area() {
            return;
        }
        let src = color.to_rgba8_premul().to_array();
        let (x0, y0) = (rect.x0.round() as u32, rect.y0.round() as u32);
        let (x1, y1) = (rect.x1.round() as u32, rect.y1.round() as u32);
        for y in y0..y1 {
            for x in x0..x1 {
                if let Some(i) = self.surface.index(x, y) {
                    let d = &mut self.surface.data_mut()[i..i + 4];
                    let out = blend(mode, [d[0], d[1], d[2], d[3]], src, 1.0);
                    d.copy_from_slice(&out);
                }
            }
        }
    }

    /// Linear gradient from `from` to `to` clipped to `rect` (device space).
    pub fn fill_rect_gradient(&mut self, rect: Rect, from: Point, to: Point, stops: &[(f64, Color)]) {
        if stops.is_empty() || rect.is_zero_area() {
            return;
        }
        self.flush();
        let canvas = self.surface.canvas();
        let rect = rect.intersect(Rect::new(0.0, 0.0, canvas.w(), canvas.h()));
        if rect.is_zero_area() {
            return;
        }
        let axis = to - from;
        let len2 = axis.hypot2();
        let (x0, y0) = (rect.x0.round() as i64, rect.y0.round() as i64);
        let (x1, y1) = (rect.x1.round() as i64, rect.y1.round() as i64);
        for y in y0..y1 {
            for x in x0..x1 {
                let p = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                let t = if len2 > 0.0 {
                    ((p - from).dot(axis) / len2).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                self.blend_pixel(x, y, gradient_at(stops, t));
            }
        }
    }

    /// Blend a horizontal run of pixels on row `y`, spanning `[x0, x1)`.
    pub fn hspan(&mut self, y: i64, x0: f64, x1: f64, color: impl Fn(f64) -> Color) {
        self.flush();
        let canvas = self.surface.canvas();
        if y < 0 || y >= i64::from(canvas.height) {
            return;
        }
        let start = x0.round().max(0.0) as i64;
        let end = (x1.round() as i64).min(i64::from(canvas.width));
        for x in start..end {
            self.blend_pixel(x, y, color(x as f64 + 0.5));
        }
    }

    /// Replace the pixel at `x`, `y` with `color`.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(i) = self.surface.index(x as u32, y as u32) {
            let px = color.to_rgba8_premul().to_array();
            self.surface.data_mut()[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Source-over `color` onto the pixel at `x`, `y`.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || color.a == 0 {
            return;
        }
        if let Some(i) = self.surface.index(x as u32, y as u32) {
            let data = self.surface.data_mut();
            let d = &mut data[i..i + 4];
            let out = over([d[0], d[1], d[2], d[3]], color.to_rgba8_premul().to_array(), 1.0);
            d.copy_from_slice(&out);
        }
    }

    /// Premultiplied pixels after all queued primitives have been rasterized.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        self.flush();
        self.surface.data_mut()
    }

    /// Draw `image` scaled into `dest` under the current transform.
    pub(crate) fn draw_image(&mut self, image: &PreparedImage, dest: Rect, opacity: f64) {
        if image.width == 0 || image.height == 0 || dest.is_zero_area() || !positive(opacity) {
            return;
        }
        let sx = dest.width() / f64::from(image.width);
        let sy = dest.height() / f64::from(image.height);
        let place = Affine::translate(dest.origin().to_vec2()) * Affine::scale_non_uniform(sx, sy);

        self.ctx.set_transform(affine_to_cpu(self.transform * place));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(image.paint.clone());
        let faded = opacity < 1.0;
        if faded {
            self.ctx.push_opacity_layer(opacity as f32);
        }
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        if faded {
            self.ctx.pop_layer();
        }
        self.pending = true;
    }

    /// Rasterize anything still queued. Called by the session once painting is done.
    pub fn finish(mut self) {
        self.flush();
    }

    fn prepare(&mut self, color: Color) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
    }

    // vello_cpu renders into a fresh buffer, so we render into the scratch pixmap and then
    // premul-over onto the layer surface.
    fn flush(&mut self) {
        if !self.pending {
            return;
        }
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut *self.scratch);
        self.ctx.reset();
        self.pending = false;

        let src = self.scratch.data_as_u8_slice();
        for (d, s) in self.surface.data_mut().chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            if s[3] == 0 {
                continue;
            }
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], 1.0);
            d.copy_from_slice(&out);
        }
    }
}

/// Color at `t` along `(offset, color)` stops, clamping outside the first and last stop.
pub(crate) fn gradient_at(stops: &[(f64, Color)], t: f64) -> Color {
    let Some(&(first_off, first)) = stops.first() else {
        return Color::rgba(0, 0, 0, 0);
    };
    if t <= first_off {
        return first;
    }
    for pair in stops.windows(2) {
        let (a_off, a) = pair[0];
        let (b_off, b) = pair[1];
        if t <= b_off {
            let span = b_off - a_off;
            let local = if span > 0.0 { (t - a_off) / span } else { 1.0 };
            return a.lerp(b, local);
        }
    }
    stops.last().map_or(first, |&(_, c)| c)
}

/// Evenly spaced stops over a palette.
pub(crate) fn even_stops(colors: &[Color]) -> Vec<(f64, Color)> {
    match colors.len() {
        0 => Vec::new(),
        1 => vec![(0.0, colors[0]), (1.0, colors[0])],
        n => colors
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64 / (n - 1) as f64, c))
            .collect(),
    }
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;
