use super::*;
use crate::assets::color::Color;
use crate::effects::testing::{canvas, lit_pixels, paint_once, rng};

fn params() -> SineWaveParams {
    SineWaveParams {
        text: "WAVE".to_owned(),
        amplitude: 10.0,
        frequency: 0.5,
        speed: 2.0,
        font_size: 14.0,
        font_family: String::new(),
        colors: vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)],
        y_position: 50.0,
    }
}

#[test]
fn phase_advances_with_speed() {
    let state = SineWave::step(SineWaveState { phase: 0.0 }, &params(), canvas(10, 10), 2.0, &mut rng());
    assert!((state.phase - 0.2).abs() < 1e-12);
}

#[test]
fn text_is_drawn_near_the_configured_row() {
    let c = canvas(120, 60);
    let surface = paint_once::<SineWave>(&mut SineWaveState { phase: 0.0 }, &params(), c, true);
    assert!(lit_pixels(&surface) > 0);
    for y in (0..5).chain(55..60) {
        for x in 0..120 {
            assert_eq!(surface.pixel(x, y).unwrap().a, 0, "{x},{y}");
        }
    }
}

#[test]
fn empty_palette_draws_nothing() {
    let p = SineWaveParams { colors: Vec::new(), ..params() };
    let surface = paint_once::<SineWave>(&mut SineWaveState { phase: 0.0 }, &p, canvas(60, 30), true);
    assert!(surface.is_blank());
}
