use super::*;
use crate::effects::testing::{canvas, lit_pixels, paint_once, rng, run};

fn params(star_count: u32, speed: f64) -> StarfieldParams {
    StarfieldParams {
        star_count,
        speed,
        star_color: Color::WHITE,
        max_size: 3.0,
        depth: 1.0,
    }
}

#[test]
fn reseed_places_every_star_in_depth_range() {
    let state = Starfield::reseed(&params(300, 1.0), canvas(320, 200), &mut rng());
    assert_eq!(state.stars.len(), 300);
    for s in &state.stars {
        assert!(s.z > 0.0 && s.z <= FAR_PLANE, "{s:?}");
        assert!(s.x.abs() <= 160.0 && s.y.abs() <= 100.0);
    }
}

#[test]
fn step_moves_stars_toward_viewer() {
    let c = canvas(100, 100);
    let p = params(1, 2.0);
    let state = StarfieldState {
        stars: vec![Star { x: 1.0, y: 2.0, z: 500.0 }],
    };
    let next = Starfield::step(state, &p, c, 1.0, &mut rng());
    assert_eq!(next.stars[0].z, 490.0);
    assert_eq!((next.stars[0].x, next.stars[0].y), (1.0, 2.0));
}

#[test]
fn stars_passing_the_viewer_respawn_far_away() {
    let c = canvas(100, 100);
    let state = StarfieldState {
        stars: vec![Star { x: 0.0, y: 0.0, z: 3.0 }],
    };
    let next = Starfield::step(state, &params(1, 1.0), c, 1.0, &mut rng());
    assert_eq!(next.stars[0].z, FAR_PLANE);
}

#[test]
fn structural_key_tracks_count_not_speed() {
    let c = canvas(64, 64);
    let a = Starfield::structural_key(&params(10, 1.0), c);
    assert_eq!(a, Starfield::structural_key(&params(10, 9.0), c));
    assert_ne!(a, Starfield::structural_key(&params(11, 1.0), c));
    assert_ne!(a, Starfield::structural_key(&params(10, 1.0), canvas(65, 64)));
}

#[test]
fn paint_leaves_a_translucent_black_veil() {
    let c = canvas(8, 8);
    let mut state = StarfieldState { stars: Vec::new() };
    let surface = paint_once::<Starfield>(&mut state, &params(0, 1.0), c, true);
    let px = surface.pixel(3, 3).unwrap();
    assert_eq!((px.r, px.g, px.b), (0, 0, 0));
    assert!(px.a > 20 && px.a < 30, "{px:?}");
}

#[test]
fn near_star_is_drawn_at_its_projection() {
    let c = canvas(100, 100);
    let mut state = StarfieldState {
        stars: vec![Star { x: 0.0, y: 0.0, z: 100.0 }],
    };
    let surface = paint_once::<Starfield>(&mut state, &params(1, 1.0), c, true);
    let px = surface.pixel(50, 50).unwrap();
    assert!(px.r > 100, "{px:?}");
    assert!(lit_pixels(&surface) == 100 * 100);
}

#[test]
fn running_keeps_population_constant() {
    let c = canvas(80, 60);
    let state = run::<Starfield>(&params(50, 10.0), c, 300);
    assert_eq!(state.stars.len(), 50);
    assert!(state.stars.iter().all(|s| s.z > 0.0 && s.z <= FAR_PLANE));
}
