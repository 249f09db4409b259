use super::*;
use crate::assets::color::Color;
use crate::effects::testing::{canvas, paint_once};

fn params() -> RasterBarsParams {
    RasterBarsParams {
        bar_count: 1,
        bar_height: 4.0,
        speed: 2.0,
        colors: vec![Color::rgb(255, 0, 0), Color::rgb(255, 255, 0)],
        amplitude: 0.0,
        spacing: 0.0,
    }
}

#[test]
fn still_bar_sits_at_the_centre() {
    let surface = paint_once::<RasterBars>(&mut RasterBarsState { time: 0.0 }, &params(), canvas(10, 20), true);
    for y in 10..14 {
        assert_eq!(surface.pixel(5, y).unwrap().a, 255, "row {y}");
    }
    assert_eq!(surface.pixel(5, 5).unwrap().a, 0);
    assert_eq!(surface.pixel(5, 15).unwrap().a, 0);
}

#[test]
fn bar_core_is_the_next_palette_entry() {
    let surface = paint_once::<RasterBars>(&mut RasterBarsState { time: 0.0 }, &params(), canvas(10, 20), true);
    let edge = surface.pixel(5, 10).unwrap();
    let core = surface.pixel(5, 12).unwrap();
    assert!(core.g > edge.g);
}

#[test]
fn empty_palette_is_blank() {
    let p = RasterBarsParams {
        colors: Vec::new(),
        ..params()
    };
    let surface = paint_once::<RasterBars>(&mut RasterBarsState { time: 0.0 }, &p, canvas(10, 20), true);
    assert!(surface.is_blank());
}
