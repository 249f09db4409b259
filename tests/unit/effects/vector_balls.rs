use super::*;
use crate::effects::testing::{canvas, lit_pixels, paint_once, rng};

fn params(formation: Formation, ball_count: u32) -> VectorBallsParams {
    VectorBallsParams {
        ball_count,
        size: 15.0,
        speed: 1.0,
        rotation_x: 1.0,
        rotation_y: 1.5,
        rotation_z: 0.5,
        colors: vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0)],
        formation,
        perspective: 400.0,
    }
}

#[test]
fn cube_formation_is_a_centred_lattice() {
    let balls = formation(Formation::Cube, 27);
    assert_eq!(balls.len(), 27);
    assert_eq!(balls[0], DVec3::new(-75.0, -75.0, -75.0));
    assert_eq!(balls[26], DVec3::new(25.0, 25.0, 25.0));
    assert_eq!(formation(Formation::Cube, 10).len(), 10);
}

#[test]
fn sphere_formation_lies_on_radius_100() {
    for b in formation(Formation::Sphere, 40) {
        assert!((b.length() - 100.0).abs() < 1e-9);
    }
    let single = formation(Formation::Sphere, 1);
    assert_eq!(single.len(), 1);
    assert!(single[0].is_finite());
}

#[test]
fn torus_and_wave_have_one_ball_each() {
    assert_eq!(formation(Formation::Torus, 33).len(), 33);
    let wave = formation(Formation::Wave, 10);
    assert_eq!(wave.len(), 10);
    assert!(wave.iter().all(|b| b.y == 0.0));
    assert!(formation(Formation::Wave, 0).is_empty());
}

#[test]
fn projection_orders_far_to_near() {
    let c = canvas(200, 200);
    let p = params(Formation::Sphere, 30);
    let mut state = VectorBalls::reseed(&p, c, &mut rng());
    state.time = 37.0;
    let projected = project(&state, &p, c);
    assert_eq!(projected.len(), 30);
    assert!(projected.windows(2).all(|w| w[0].depth >= w[1].depth));
    assert!(projected.iter().all(|b| b.scale > 0.0));
}

#[test]
fn balls_behind_the_camera_are_dropped() {
    let c = canvas(100, 100);
    let p = params(Formation::Cube, 1);
    let state = VectorBallsState {
        balls: vec![DVec3::new(0.0, 0.0, -500.0), DVec3::ZERO],
        time: 0.0,
    };
    let projected = project(&state, &p, c);
    assert_eq!(projected.len(), 1);
    assert_eq!(projected[0].slot, 1);
    assert_eq!(projected[0].center, Point::new(50.0, 50.0));
}

#[test]
fn key_covers_count_and_formation() {
    let c = canvas(100, 100);
    let base = VectorBalls::structural_key(&params(Formation::Cube, 27), c);
    assert_ne!(base, VectorBalls::structural_key(&params(Formation::Cube, 28), c));
    assert_ne!(base, VectorBalls::structural_key(&params(Formation::Torus, 27), c));
    let recolored = VectorBallsParams { colors: vec![Color::WHITE], ..params(Formation::Cube, 27) };
    assert_eq!(base, VectorBalls::structural_key(&recolored, c));
}

#[test]
fn ball_is_lit_from_the_upper_left() {
    let c = canvas(100, 100);
    let p = params(Formation::Cube, 1);
    let mut state = VectorBallsState { balls: vec![DVec3::ZERO], time: 0.0 };
    let surface = paint_once::<VectorBalls>(&mut state, &p, c, true);
    assert!(lit_pixels(&surface) > 500);
    let upper_left = surface.pixel(46, 46).unwrap();
    let lower_right = surface.pixel(60, 60).unwrap();
    assert!(upper_left.r > lower_right.r, "{upper_left:?} {lower_right:?}");
    assert_eq!(surface.pixel(2, 2).unwrap().a, 0);
}

#[test]
fn time_advances_with_speed() {
    let p = VectorBallsParams { speed: 2.0, ..params(Formation::Cube, 1) };
    let s = VectorBalls::step(VectorBallsState { balls: Vec::new(), time: 0.0 }, &p, canvas(4, 4), 1.5, &mut rng());
    assert_eq!(s.time, 1.5);
}
