use super::*;
use crate::effects::testing::{canvas, paint_once};

fn params() -> LensFlareParams {
    LensFlareParams {
        x: 50.0,
        y: 50.0,
        size: 20.0,
        intensity: 0.8,
        colors: vec![Color::rgb(255, 215, 0), Color::rgb(0, 255, 255)],
        anamorphic: false,
        ghost_count: 0,
    }
}

#[test]
fn source_is_a_percentage_of_the_surface() {
    let p = LensFlareParams { x: 70.0, y: 30.0, ..params() };
    assert_eq!(source(&p, canvas(200, 100)), Point::new(140.0, 30.0));
}

#[test]
fn ghosts_straddle_the_centre_and_source() {
    assert!(ghost_t(0, 5) < 0.0);
    assert!(ghost_t(4, 5) > 1.0);
    let ts: Vec<f64> = (0..5).map(|i| ghost_t(i, 5)).collect();
    assert!(ts.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn core_is_brightest_at_the_source() {
    let c = canvas(400, 100);
    let surface = paint_once::<LensFlare>(&mut LensFlareState { time: 0.0 }, &params(), c, true);
    let core = surface.pixel(200, 50).unwrap();
    assert!(core.a > 150 && core.r > 150, "{core:?}");
    assert_eq!(surface.pixel(5, 5).unwrap().a, 0);
}

#[test]
fn anamorphic_streak_spans_the_row() {
    let c = canvas(400, 100);
    let plain = paint_once::<LensFlare>(&mut LensFlareState { time: 0.0 }, &params(), c, true);
    let p = LensFlareParams { anamorphic: true, ..params() };
    let streaked = paint_once::<LensFlare>(&mut LensFlareState { time: 0.0 }, &p, c, true);
    assert_eq!(plain.pixel(80, 50).unwrap().a, 0);
    assert!(streaked.pixel(80, 50).unwrap().a > 0);
    assert_eq!(streaked.pixel(80, 30).unwrap().a, 0);
}

#[test]
fn ghosts_add_light_along_the_axis() {
    let c = canvas(400, 200);
    let p = LensFlareParams { x: 90.0, y: 50.0, ghost_count: 3, ..params() };
    let with_ghosts = paint_once::<LensFlare>(&mut LensFlareState { time: 0.0 }, &p, c, true);
    let without = paint_once::<LensFlare>(
        &mut LensFlareState { time: 0.0 },
        &LensFlareParams { ghost_count: 0, ..p.clone() },
        c,
        true,
    );
    // Middle ghost sits halfway between the centre and the source.
    assert_eq!(without.pixel(280, 100).unwrap().a, 0);
    assert!(with_ghosts.pixel(280, 100).unwrap().a > 0);
}

#[test]
fn zero_size_draws_nothing() {
    let p = LensFlareParams { size: 0.0, ..params() };
    let surface = paint_once::<LensFlare>(&mut LensFlareState { time: 0.0 }, &p, canvas(50, 50), true);
    assert!(surface.is_blank());
}
