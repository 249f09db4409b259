use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

fn solid(c: Canvas, color: Color) -> Surface {
    let mut s = Surface::new(c);
    s.fill(color.to_rgba8_premul());
    s
}

#[test]
fn empty_stack_is_background() {
    let c = canvas(3, 2);
    let frame = compose(c, Color::rgb(10, 20, 30), &[], Overlays::default()).unwrap();
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), c.byte_len());
    assert_eq!(frame.pixel(2, 1), Some([10, 20, 30, 255]));
}

#[test]
fn later_layers_win_in_normal_mode() {
    let c = canvas(2, 2);
    let red = solid(c, Color::rgb(255, 0, 0));
    let blue = solid(c, Color::rgb(0, 0, 255));
    let layers = [
        CompositeLayer { surface: &red, opacity: 1.0, blend_mode: BlendMode::Normal },
        CompositeLayer { surface: &blue, opacity: 1.0, blend_mode: BlendMode::Normal },
    ];
    let frame = compose(c, Color::BLACK, &layers, Overlays::default()).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 255, 255]));
}

#[test]
fn zero_opacity_layer_contributes_nothing() {
    let c = canvas(2, 2);
    let white = solid(c, Color::WHITE);
    let layers = [CompositeLayer { surface: &white, opacity: 0.0, blend_mode: BlendMode::Screen }];
    let frame = compose(c, Color::BLACK, &layers, Overlays::default()).unwrap();
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn multiply_darkens_background() {
    let c = canvas(1, 1);
    let gray = solid(c, Color::rgb(128, 128, 128));
    let layers = [CompositeLayer { surface: &gray, opacity: 1.0, blend_mode: BlendMode::Multiply }];
    let frame = compose(c, Color::rgb(200, 200, 200), &layers, Overlays::default()).unwrap();
    let px = frame.pixel(0, 0).unwrap();
    assert!(px[0] > 95 && px[0] < 105, "{px:?}");
}

#[test]
fn mismatched_layer_size_is_render_error() {
    let small = Surface::new(canvas(1, 1));
    let layers = [CompositeLayer { surface: &small, opacity: 1.0, blend_mode: BlendMode::Normal }];
    let err = compose(canvas(2, 2), Color::BLACK, &layers, Overlays::default()).unwrap_err();
    assert!(err.to_string().starts_with("render error:"));
}

#[test]
fn grid_brightens_every_fiftieth_column() {
    let c = canvas(101, 3);
    let frame = compose(c, Color::BLACK, &[], Overlays { grid: true, scanlines: false }).unwrap();
    assert!(frame.pixel(50, 1).unwrap()[0] > 0);
    assert_eq!(frame.pixel(49, 1).unwrap()[0], 0);
    assert!(frame.pixel(10, 0).unwrap()[0] > 0);
}

#[test]
fn scanlines_darken_alternate_rows_from_bottom() {
    let c = canvas(1, 4);
    let frame = compose(c, Color::WHITE, &[], Overlays { grid: false, scanlines: true }).unwrap();
    assert!(frame.pixel(0, 3).unwrap()[0] < 255);
    assert_eq!(frame.pixel(0, 2).unwrap()[0], 255);
    assert!(frame.pixel(0, 1).unwrap()[0] < 255);
}
