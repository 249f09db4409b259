use super::*;

fn surface(w: u32, h: u32) -> Surface {
    Surface::new(Canvas::new(w, h).unwrap())
}

#[test]
fn fill_rect_covers_interior_pixels() {
    let mut s = surface(8, 8);
    let mut raster = Rasterizer::new();
    let mut layer = Layer::new(&mut s, &mut raster).unwrap();
    layer.fill_rect(Rect::new(2.0, 2.0, 6.0, 6.0), Color::rgb(255, 0, 0));
    layer.finish();

    assert_eq!(s.pixel(3, 3).unwrap().to_array(), [255, 0, 0, 255]);
    assert_eq!(s.pixel(0, 0).unwrap().a, 0);
}

#[test]
fn later_primitives_paint_over_earlier_ones() {
    let mut s = surface(4, 4);
    let mut raster = Rasterizer::new();
    let mut layer = Layer::new(&mut s, &mut raster).unwrap();
    layer.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgb(255, 0, 0));
    layer.put_pixel(1, 1, Color::rgb(0, 0, 255));
    layer.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::rgb(0, 255, 0));
    layer.finish();

    assert_eq!(s.pixel(1, 1).unwrap().to_array(), [0, 0, 255, 255]);
    assert_eq!(s.pixel(0, 0).unwrap().to_array(), [0, 255, 0, 255]);
    assert_eq!(s.pixel(3, 3).unwrap().to_array(), [255, 0, 0, 255]);
}

#[test]
fn clear_discards_queued_work() {
    let mut s = surface(4, 4);
    let mut raster = Rasterizer::new();
    let mut layer = Layer::new(&mut s, &mut raster).unwrap();
    layer.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::WHITE);
    layer.clear();
    layer.finish();
    assert!(s.is_blank());
}

#[test]
fn translucent_fill_all_fades_toward_color() {
    let mut s = surface(2, 2);
    s.fill(Color::WHITE.to_rgba8_premul());
    let mut raster = Rasterizer::new();
    let mut layer = Layer::new(&mut s, &mut raster).unwrap();
    layer.fill_all(Color::rgba(0, 0, 0, 128));
    layer.finish();
    let p = s.pixel(0, 0).unwrap();
    assert!(p.r > 100 && p.r < 150, "{p:?}");
    assert_eq!(p.a, 255);
}

#[test]
fn transform_moves_vector_primitives() {
    let mut s = surface(8, 8);
    let mut raster = Rasterizer::new();
    let mut layer = Layer::new(&mut s, &mut raster).unwrap();
    layer.set_transform(Affine::translate((4.0, 4.0)));
    layer.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::WHITE);
    layer.finish();
    assert_eq!(s.pixel(5, 5).unwrap().a, 255);
    assert_eq!(s.pixel(1, 1).unwrap().a, 0);
}

#[test]
fn radial_fill_fades_from_center() {
    let mut s = surface(21, 21);
    let mut raster = Rasterizer::new();
    let mut layer = Layer::new(&mut s, &mut raster).unwrap();
    layer.fill_radial(
        Point::new(10.5, 10.5),
        10.0,
        &[(0.0, Color::WHITE), (1.0, Color::rgba(255, 255, 255, 0))],
    );
    layer.finish();
    let center = s.pixel(10, 10).unwrap().a;
    let edge = s.pixel(10, 1).unwrap().a;
    assert!(center > 240);
    assert!(edge < center);
    assert_eq!(s.pixel(0, 0).unwrap().a, 0);
}

#[test]
fn hspan_clips_to_surface() {
    let mut s = surface(4, 2);
    let mut raster = Rasterizer::new();
    let mut layer = Layer::new(&mut s, &mut raster).unwrap();
    layer.hspan(1, -10.0, 10.0, |_| Color::WHITE);
    layer.hspan(7, 0.0, 4.0, |_| Color::WHITE);
    layer.finish();
    for x in 0..4 {
        assert_eq!(s.pixel(x, 1).unwrap().a, 255);
        assert_eq!(s.pixel(x, 0).unwrap().a, 0);
    }
}

#[test]
fn shaded_fill_uses_position() {
    let mut s = surface(10, 2);
    let mut raster = Rasterizer::new();
    let mut layer = Layer::new(&mut s, &mut raster).unwrap();
    let path = Rect::new(0.0, 0.0, 10.0, 2.0).to_path(0.1);
    layer.fill_path_shaded(&path, |x, _| if x < 5.0 { Color::rgb(255, 0, 0) } else { Color::rgb(0, 0, 255) });
    layer.finish();
    assert_eq!(s.pixel(1, 0).unwrap().to_array(), [255, 0, 0, 255]);
    assert_eq!(s.pixel(8, 1).unwrap().to_array(), [0, 0, 255, 255]);
}

#[test]
fn gradient_at_interpolates_and_clamps() {
    let stops = [(0.0, Color::BLACK), (1.0, Color::WHITE)];
    assert_eq!(gradient_at(&stops, -1.0), Color::BLACK);
    assert_eq!(gradient_at(&stops, 2.0), Color::WHITE);
    assert_eq!(gradient_at(&stops, 0.5).r, 127);
    assert_eq!(gradient_at(&[], 0.5).a, 0);
}

#[test]
fn even_stops_spread_palette() {
    let stops = even_stops(&[Color::BLACK, Color::WHITE, Color::BLACK]);
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[1].0, 0.5);
    assert_eq!(even_stops(&[Color::WHITE]).len(), 2);
    assert!(even_stops(&[]).is_empty());
}

#[test]
fn rasterizer_reuses_context_across_sizes() {
    let mut raster = Rasterizer::new();
    for (w, h) in [(4, 4), (6, 3), (4, 4)] {
        let mut s = surface(w, h);
        let mut layer = Layer::new(&mut s, &mut raster).unwrap();
        layer.fill_rect(Rect::new(0.0, 0.0, f64::from(w), f64::from(h)), Color::WHITE);
        layer.finish();
        assert_eq!(s.pixel(w - 1, h - 1).unwrap().a, 255);
    }
}
