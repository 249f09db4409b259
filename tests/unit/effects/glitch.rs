use super::*;
use crate::effects::testing::{canvas, lit_pixels, paint_once};

fn quiet() -> GlitchParams {
    GlitchParams {
        intensity: 0.0,
        speed: 2.0,
        color_shift: false,
        scanlines: false,
        noise: 0.0,
        slice_count: 0,
    }
}

#[test]
fn everything_off_is_blank() {
    let surface = paint_once::<Glitch>(&mut GlitchState { time: 0.0 }, &quiet(), canvas(16, 16), true);
    assert!(surface.is_blank());
}

#[test]
fn scanlines_cover_two_of_every_four_rows() {
    let p = GlitchParams {
        scanlines: true,
        ..quiet()
    };
    let surface = paint_once::<Glitch>(&mut GlitchState { time: 0.0 }, &p, canvas(8, 8), true);
    for y in 0..8 {
        let a = surface.pixel(3, y).unwrap().a;
        if y % 4 < 2 {
            assert!(a > 0, "row {y}");
        } else {
            assert_eq!(a, 0, "row {y}");
        }
    }
}

#[test]
fn full_noise_sprinkles_pixels() {
    let p = GlitchParams {
        noise: 10.0,
        ..quiet()
    };
    let surface = paint_once::<Glitch>(&mut GlitchState { time: 0.0 }, &p, canvas(16, 16), true);
    assert!(lit_pixels(&surface) > 0);
}

#[test]
fn step_scales_with_speed() {
    let s = Glitch::step(
        GlitchState { time: 0.0 },
        &quiet(),
        canvas(4, 4),
        1.0,
        &mut crate::effects::testing::rng(),
    );
    assert!((s.time - 0.1).abs() < 1e-12);
}

#[test]
fn slice_count_is_capped_at_canvas_rows() {
    let p = GlitchParams {
        intensity: 1.0,
        slice_count: u32::MAX,
        ..quiet()
    };
    let surface = paint_once::<Glitch>(&mut GlitchState { time: 0.0 }, &p, canvas(16, 16), true);
    assert_eq!(surface.data().len(), 16 * 16 * 4);
}
