use super::*;
use crate::assets::color::Color;
use crate::effects::testing::{canvas, lit_pixels, paint_once, rng};

fn params() -> TwisterParams {
    TwisterParams {
        bar_count: 4,
        speed: 1.0,
        colors: vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
        amplitude: 20.0,
        segments: 8,
    }
}

#[test]
fn time_advances_at_fixed_rate() {
    let s = Twister::step(TwisterState { time: 0.0 }, &params(), canvas(4, 4), 10.0, &mut rng());
    assert!((s.time - 0.3).abs() < 1e-12);
}

#[test]
fn first_bar_top_segment_has_full_width() {
    let c = canvas(200, 100);
    let (x, w) = segment(&params(), c, 0.0, 0, 0);
    assert_eq!(w, 50.0);
    assert_eq!(x, 100.0 - 2.0 * 50.0);
}

#[test]
fn segment_width_never_exceeds_bar_width() {
    let c = canvas(200, 100);
    for seg in 0..=8 {
        let (_, w) = segment(&params(), c, 1.7, 2, seg);
        assert!((0.0..=50.0).contains(&w), "{w}");
    }
}

#[test]
fn bars_fill_from_top_to_bottom() {
    let c = canvas(200, 100);
    let surface = paint_once::<Twister>(&mut TwisterState { time: 0.0 }, &params(), c, true);
    assert!(lit_pixels(&surface) > 0);
    let top_row = (0..200).any(|x| surface.pixel(x, 1).unwrap().a > 0);
    let bottom_row = (0..200).any(|x| surface.pixel(x, 98).unwrap().a > 0);
    assert!(top_row && bottom_row);
}

#[test]
fn degenerate_params_draw_nothing() {
    let c = canvas(50, 50);
    for p in [
        TwisterParams { bar_count: 0, ..params() },
        TwisterParams { segments: 0, ..params() },
        TwisterParams { colors: Vec::new(), ..params() },
    ] {
        let surface = paint_once::<Twister>(&mut TwisterState { time: 0.0 }, &p, c, true);
        assert!(surface.is_blank());
    }
}
