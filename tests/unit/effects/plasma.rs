use super::*;
use crate::effects::testing::{canvas, paint_once};

fn params() -> PlasmaParams {
    PlasmaParams {
        scale: 1.0,
        speed: 1.0,
        colors: vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
        intensity: 1.0,
    }
}

#[test]
fn value_stays_in_unit_range() {
    let field = PlasmaField {
        time: 3.7,
        scale: 0.5,
        colors: &[],
        alpha: 255,
    };
    for y in (0..200).step_by(7) {
        for x in (0..300).step_by(11) {
            let v = field.value(f64::from(x), f64::from(y));
            assert!((0.0..=1.0).contains(&v), "{v} at {x},{y}");
        }
    }
}

#[test]
fn origin_at_time_zero_is_mid_palette() {
    let colors = params().colors;
    let field = PlasmaField {
        time: 0.0,
        scale: 1.0,
        colors: &colors,
        alpha: 200,
    };
    assert_eq!(field.value(0.0, 0.0), 0.5);
    let c = field.sample(0, 0);
    assert_eq!(c.a, 200);
    assert_eq!((c.r, c.b), (127, 127));
}

#[test]
fn step_advances_time_by_speed() {
    let p = PlasmaParams { speed: 2.0, ..params() };
    let s = Plasma::step(PlasmaState { time: 0.0 }, &p, canvas(4, 4), 3.0, &mut crate::effects::testing::rng());
    assert!((s.time - 0.12).abs() < 1e-12);
}

#[test]
fn paint_covers_every_pixel_with_intensity_alpha() {
    let p = PlasmaParams { intensity: 0.5, ..params() };
    let surface = paint_once::<Plasma>(&mut PlasmaState { time: 1.0 }, &p, canvas(6, 5), true);
    for y in 0..5 {
        for x in 0..6 {
            assert_eq!(surface.pixel(x, y).unwrap().a, 128);
        }
    }
}

#[test]
fn empty_palette_paints_nothing() {
    let p = PlasmaParams { colors: Vec::new(), ..params() };
    let surface = paint_once::<Plasma>(&mut PlasmaState { time: 0.0 }, &p, canvas(3, 3), true);
    assert!(surface.is_blank());
}
