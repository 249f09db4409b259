use super::*;
use crate::assets::color::Color;
use crate::effects::testing::{canvas, paint_once, rng};

fn params(direction: ScrollDirection) -> DotMatrixParams {
    DotMatrixParams {
        text: "Hi".to_owned(),
        dot_size: 4.0,
        gap: 1.0,
        speed: 1.5,
        color: Color::rgb(255, 64, 0),
        background_color: Color::rgb(0, 0, 32),
        scroll_direction: direction,
    }
}

#[test]
fn offset_advances_two_pixels_per_unit_speed() {
    let p = params(ScrollDirection::Left);
    let s = DotMatrix::step(DotMatrixState { offset: 1.0 }, &p, canvas(10, 10), 2.0, &mut rng());
    assert_eq!(s.offset, 7.0);
}

#[test]
fn left_scroll_enters_from_the_right_and_wraps() {
    let c = canvas(100, 50);
    let p = params(ScrollDirection::Left);
    let total = text_width("HI", 5.0);
    assert_eq!(total, 70.0);
    assert_eq!(origin(&p, c, 0.0).x, 100.0);
    assert_eq!(origin(&p, c, 30.0).x, 70.0);
    assert_eq!(origin(&p, c, 170.0).x, 100.0);
}

#[test]
fn text_block_is_vertically_centred() {
    let c = canvas(100, 55);
    let p = params(ScrollDirection::Left);
    assert_eq!(origin(&p, c, 0.0).y, 10.0);
}

#[test]
fn vertical_scroll_keeps_text_horizontally_centred() {
    let c = canvas(100, 50);
    let up = origin(&params(ScrollDirection::Up), c, 12.0);
    assert_eq!(up.x, 15.0);
    assert_eq!(up.y, (50.0 - 35.0) / 2.0 - 12.0);
}

#[test]
fn background_fills_and_lit_dots_use_the_dot_color() {
    let c = canvas(100, 50);
    let p = params(ScrollDirection::Left);
    let mut state = DotMatrixState { offset: 85.0 };
    let surface = paint_once::<DotMatrix>(&mut state, &p, c, true);
    let corner = surface.pixel(99, 0).unwrap();
    assert_eq!((corner.r, corner.g, corner.b, corner.a), (0, 0, 32, 255));
    let lit = surface
        .data()
        .chunks_exact(4)
        .filter(|px| px[0] == 255 && px[1] == 64)
        .count();
    assert!(lit > 0);
}

#[test]
fn zero_dot_size_leaves_only_background() {
    let c = canvas(20, 20);
    let p = DotMatrixParams { dot_size: 0.0, ..params(ScrollDirection::Left) };
    let surface = paint_once::<DotMatrix>(&mut DotMatrixState { offset: 0.0 }, &p, c, true);
    assert!(surface.data().chunks_exact(4).all(|px| px == [0, 0, 32, 255]));
}
