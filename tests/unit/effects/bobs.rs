use super::*;
use crate::effects::testing::{canvas, lit_pixels, paint_once, paint_onto};
use crate::render::surface::Surface;

fn params(pattern: BobPattern) -> BobsParams {
    BobsParams {
        bob_count: 4,
        speed: 1.0,
        size: 5.0,
        colors: vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)],
        pattern,
        trail_length: 0.0,
        glow_enabled: false,
    }
}

#[test]
fn circle_pattern_starts_on_the_right() {
    let c = canvas(200, 100);
    let p = bob_position(&params(BobPattern::Circle), c, 0.0, 0);
    assert!((p.x - 170.0).abs() < 1e-9 && (p.y - 50.0).abs() < 1e-9);
}

#[test]
fn wave_pattern_spreads_bobs_across_the_width() {
    let c = canvas(200, 100);
    let xs: Vec<f64> = (0..4)
        .map(|i| bob_position(&params(BobPattern::Wave), c, 0.0, i).x)
        .collect();
    assert_eq!(xs, vec![0.0, 50.0, 100.0, 150.0]);
}

#[test]
fn every_pattern_stays_near_the_surface() {
    let c = canvas(120, 90);
    for pattern in [BobPattern::Circle, BobPattern::Wave, BobPattern::Lissajous, BobPattern::Spiral] {
        for t in [0.0, 0.7, 3.1, 9.9] {
            for i in 0..4 {
                let p = bob_position(&params(pattern), c, t, i);
                assert!((0.0..=120.0).contains(&p.x) && (0.0..=90.0).contains(&p.y), "{pattern:?}");
            }
        }
    }
}

#[test]
fn bobs_are_drawn_with_a_highlight() {
    let c = canvas(200, 100);
    let surface = paint_once::<Bobs>(&mut BobsState { time: 0.0 }, &params(BobPattern::Circle), c, true);
    let body = surface.pixel(172, 52).unwrap();
    assert!(body.r > 200 && body.a == 255, "{body:?}");
    let highlight = surface.pixel(168, 48).unwrap();
    assert!(highlight.g > 100 && highlight.r > 200, "{highlight:?}");
}

#[test]
fn trail_fades_previous_frame_instead_of_clearing() {
    let c = canvas(10, 10);
    let mut surface = Surface::new(c);
    surface.fill(Color::WHITE.to_rgba8_premul());
    let p = BobsParams { bob_count: 0, trail_length: 30.0, ..params(BobPattern::Circle) };
    paint_onto::<Bobs>(&mut surface, &mut BobsState { time: 0.0 }, &p, true);
    let px = surface.pixel(0, 0).unwrap();
    assert_eq!(px.a, 255);
    assert!(px.r > 60 && px.r < 90, "{px:?}");

    let cleared = BobsParams { trail_length: 0.0, ..p };
    paint_onto::<Bobs>(&mut surface, &mut BobsState { time: 0.0 }, &cleared, true);
    assert!(surface.is_blank());
}

#[test]
fn glow_extends_past_the_body() {
    let c = canvas(200, 100);
    let plain = paint_once::<Bobs>(&mut BobsState { time: 0.0 }, &params(BobPattern::Circle), c, true);
    let glowing_params = BobsParams { glow_enabled: true, ..params(BobPattern::Circle) };
    let glowing = paint_once::<Bobs>(&mut BobsState { time: 0.0 }, &glowing_params, c, true);
    assert!(lit_pixels(&glowing) > lit_pixels(&plain));
}
