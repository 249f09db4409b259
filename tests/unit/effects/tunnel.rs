use super::*;
use crate::assets::color::Color;
use crate::effects::testing::{canvas, lit_pixels, paint_once, rng};

fn params() -> TunnelParams {
    TunnelParams {
        speed: 2.0,
        ring_count: 6,
        colors: vec![Color::rgb(0, 255, 255), Color::rgb(255, 0, 255)],
        rotation: 1.0,
        perspective: 500.0,
    }
}

#[test]
fn ring_is_a_closed_hexagon() {
    let path = ring(Point::new(0.0, 0.0), 10.0);
    // move_to, six line_to, close.
    assert_eq!(path.elements().len(), 8);
}

#[test]
fn step_advances_at_fixed_rate() {
    let s = Tunnel::step(TunnelState { time: 0.0 }, &params(), canvas(4, 4), 4.0, &mut rng());
    assert_eq!(s.time, 2.0);
}

#[test]
fn paint_draws_rings() {
    let surface = paint_once::<Tunnel>(&mut TunnelState { time: 3.0 }, &params(), canvas(40, 40), true);
    assert!(lit_pixels(&surface) > 0);
}

#[test]
fn empty_palette_draws_nothing() {
    let p = TunnelParams {
        colors: Vec::new(),
        ..params()
    };
    let surface = paint_once::<Tunnel>(&mut TunnelState { time: 3.0 }, &p, canvas(40, 40), true);
    assert!(surface.is_blank());
}
