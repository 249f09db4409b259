use super::*;
use crate::assets::color::Color;
use crate::effects::testing::{canvas, lit_pixels, paint_once, rng};

fn params(direction: ScrollDirection) -> ScrollTextParams {
    ScrollTextParams {
        text: "HI".to_owned(),
        speed: 4.0,
        font_size: 14.0,
        font_family: String::new(),
        color: Color::rgb(0, 255, 0),
        gradient_colors: vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)],
        use_gradient: false,
        direction,
        y_position: 50.0,
    }
}

#[test]
fn left_scroll_starts_off_the_right_edge() {
    let state = ScrollText::reseed(&params(ScrollDirection::Left), canvas(200, 50), &mut rng());
    assert_eq!(state.x, 200.0);
}

#[test]
fn right_scroll_starts_off_the_left_edge() {
    let p = params(ScrollDirection::Right);
    let state = ScrollText::reseed(&p, canvas(200, 50), &mut rng());
    assert_eq!(state.x, -font::text_width("HI", 14.0));
}

#[test]
fn left_scroll_wraps_once_fully_off_screen() {
    let c = canvas(100, 50);
    let p = params(ScrollDirection::Left);
    let width = font::text_width(&p.text, p.font_size);
    let state = ScrollTextState { x: -width + 1.0, y_offset: 0.0 };
    let state = ScrollText::step(state, &p, c, 1.0, &mut rng());
    assert_eq!(state.x, 100.0);
}

#[test]
fn vertical_scroll_moves_the_row() {
    let c = canvas(100, 100);
    let p = params(ScrollDirection::Up);
    let state = ScrollText::reseed(&p, c, &mut rng());
    let state = ScrollText::step(state, &p, c, 2.5, &mut rng());
    assert_eq!(state.y_offset, -10.0);
}

#[test]
fn down_scroll_reenters_from_above() {
    let c = canvas(100, 100);
    let p = params(ScrollDirection::Down);
    let state = ScrollTextState { x: 0.0, y_offset: 57.0 };
    let state = ScrollText::step(state, &p, c, 1.0, &mut rng());
    assert_eq!(state.y_offset, -7.0 - 50.0);
}

#[test]
fn solid_and_gradient_fills_both_draw_text() {
    let c = canvas(120, 40);
    let mut state = ScrollTextState { x: 10.0, y_offset: 0.0 };
    let solid = paint_once::<ScrollText>(&mut state, &params(ScrollDirection::Left), c, true);
    let gradient_params = ScrollTextParams { use_gradient: true, ..params(ScrollDirection::Left) };
    let gradient = paint_once::<ScrollText>(&mut state, &gradient_params, c, true);
    assert!(lit_pixels(&solid) > 0);
    assert!(lit_pixels(&gradient) > 0);
    assert_ne!(solid.data(), gradient.data());
}
