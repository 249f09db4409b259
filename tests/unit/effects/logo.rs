use super::*;
use crate::effects::testing::{canvas, lit_pixels, paint_once, rng};

fn params() -> LogoParams {
    LogoParams {
        text: "LOGO".to_owned(),
        font_size: 20.0,
        font_family: String::new(),
        colors: vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
        bounce_amplitude: 10.0,
        bounce_speed: 1.0,
        rotation_enabled: false,
        rotation_speed: 1.0,
        scale_effect: false,
        glow_enabled: false,
        glow_color: Color::WHITE,
    }
}

#[test]
fn drifting_stops_stay_sorted_and_in_range() {
    let colors = [Color::rgb(1, 0, 0), Color::rgb(2, 0, 0), Color::rgb(3, 0, 0)];
    for t in [0.0, 1.3, 7.9, 42.0] {
        let stops = drifting_stops(&colors, t);
        assert_eq!(stops.len(), 3);
        assert!(stops.windows(2).all(|w| w[0].0 <= w[1].0));
        assert!(stops.iter().all(|s| (0.0..1.0).contains(&s.0)));
    }
    assert!(drifting_stops(&colors[..1], 0.0).is_empty());
}

#[test]
fn time_advances_regardless_of_params() {
    let s = Logo::step(LogoState { time: 1.0 }, &params(), canvas(4, 4), 2.0, &mut rng());
    assert!((s.time - 1.1).abs() < 1e-12);
}

#[test]
fn logo_is_centred_at_rest() {
    let c = canvas(160, 80);
    let surface = paint_once::<Logo>(&mut LogoState { time: 0.0 }, &params(), c, true);
    assert!(lit_pixels(&surface) > 0);
    assert_eq!(surface.pixel(2, 40).unwrap().a, 0);
    assert_eq!(surface.pixel(157, 40).unwrap().a, 0);
}

#[test]
fn glow_widens_the_footprint() {
    let c = canvas(160, 80);
    let plain = paint_once::<Logo>(&mut LogoState { time: 0.0 }, &params(), c, true);
    let glowing_params = LogoParams { glow_enabled: true, ..params() };
    let glowing = paint_once::<Logo>(&mut LogoState { time: 0.0 }, &glowing_params, c, true);
    assert!(lit_pixels(&glowing) > lit_pixels(&plain));
}
