//! 5x7 dot-matrix font shared by every text-drawing effect.
//!
//! Each glyph is five column bitmasks; bit 6 is the top row and bit 0 the bottom row.

use kurbo::{BezPath, Rect, Shape as _};

use crate::foundation::math::Fnv1a64;

pub(crate) const GLYPH_COLS: usize = 5;
pub(crate) const GLYPH_ROWS: usize = 7;
/// Cell advance in columns (glyph plus one column of spacing).
pub(crate) const ADVANCE_COLS: usize = GLYPH_COLS + 1;

pub(crate) type Glyph = [u8; GLYPH_COLS];

/// Look up `c` (case-folded) in the built-in table.
pub(crate) fn glyph(c: char) -> Option<Glyph> {
    let g = match c.to_ascii_uppercase() {
        'A' => [0x1F, 0x28, 0x48, 0x28, 0x1F],
        'B' => [0x7F, 0x49, 0x49, 0x49, 0x36],
        'C' => [0x3E, 0x41, 0x41, 0x41, 0x22],
        'D' => [0x7F, 0x41, 0x41, 0x22, 0x1C],
        'E' => [0x7F, 0x49, 0x49, 0x49, 0x41],
        'F' => [0x7F, 0x48, 0x48, 0x48, 0x40],
        'G' => [0x3E, 0x41, 0x49, 0x49, 0x2E],
        'H' => [0x7F, 0x08, 0x08, 0x08, 0x7F],
        'I' => [0x41, 0x41, 0x7F, 0x41, 0x41],
        'J' => [0x02, 0x01, 0x41, 0x7E, 0x40],
        'K' => [0x7F, 0x08, 0x14, 0x22, 0x41],
        'L' => [0x7F, 0x01, 0x01, 0x01, 0x01],
        'M' => [0x7F, 0x20, 0x10, 0x20, 0x7F],
        'N' => [0x7F, 0x10, 0x08, 0x04, 0x7F],
        'O' => [0x3E, 0x41, 0x41, 0x41, 0x3E],
        'P' => [0x7F, 0x48, 0x48, 0x48, 0x30],
        'Q' => [0x3E, 0x41, 0x45, 0x42, 0x3D],
        'R' => [0x7F, 0x48, 0x4C, 0x4A, 0x31],
        'S' => [0x32, 0x49, 0x49, 0x49, 0x26],
        'T' => [0x40, 0x40, 0x7F, 0x40, 0x40],
        'U' => [0x7E, 0x01, 0x01, 0x01, 0x7E],
        'V' => [0x7C, 0x02, 0x01, 0x02, 0x7C],
        'W' => [0x7F, 0x02, 0x04, 0x02, 0x7F],
        'X' => [0x63, 0x14, 0x08, 0x14, 0x63],
        'Y' => [0x60, 0x10, 0x0F, 0x10, 0x60],
        'Z' => [0x43, 0x45, 0x49, 0x51, 0x61],
        '0' => [0x3E, 0x45, 0x49, 0x51, 0x3E],
        '1' => [0x00, 0x21, 0x7F, 0x01, 0x00],
        '2' => [0x21, 0x43, 0x45, 0x49, 0x31],
        '3' => [0x22, 0x41, 0x49, 0x49, 0x36],
        '4' => [0x0C, 0x14, 0x24, 0x7F, 0x04],
        '5' => [0x72, 0x51, 0x51, 0x51, 0x4E],
        '6' => [0x1E, 0x29, 0x49, 0x49, 0x06],
        '7' => [0x40, 0x47, 0x48, 0x50, 0x60],
        '8' => [0x36, 0x49, 0x49, 0x49, 0x36],
        '9' => [0x30, 0x49, 0x49, 0x4A, 0x3C],
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00],
        '!' => [0x00, 0x00, 0x7D, 0x00, 0x00],
        '.' => [0x00, 0x01, 0x00, 0x00, 0x00],
        ',' => [0x00, 0x01, 0x02, 0x00, 0x00],
        ':' => [0x00, 0x00, 0x14, 0x00, 0x00],
        '-' => [0x08, 0x08, 0x08, 0x08, 0x08],
        '_' => [0x01, 0x01, 0x01, 0x01, 0x01],
        '+' => [0x08, 0x08, 0x3E, 0x08, 0x08],
        '=' => [0x14, 0x14, 0x14, 0x14, 0x14],
        '*' => [0x2A, 0x1C, 0x7F, 0x1C, 0x2A],
        '#' => [0x14, 0x7F, 0x14, 0x7F, 0x14],
        '/' => [0x03, 0x04, 0x08, 0x10, 0x60],
        '(' => [0x00, 0x1C, 0x22, 0x41, 0x00],
        ')' => [0x00, 0x41, 0x22, 0x1C, 0x00],
        '<' => [0x08, 0x14, 0x22, 0x41, 0x00],
        '>' => [0x00, 0x41, 0x22, 0x14, 0x08],
        '?' => [0x20, 0x40, 0x45, 0x48, 0x30],
        '\'' => [0x00, 0x00, 0x60, 0x00, 0x00],
        '"' => [0x00, 0x60, 0x00, 0x60, 0x00],
        _ => return None,
    };
    Some(g)
}

/// Table glyph, or a stable pseudo-glyph derived from the code point.
///
/// Used for scripts the table does not cover (matrix rain katakana, user text).
pub(crate) fn glyph_or_hashed(c: char) -> Glyph {
    if let Some(g) = glyph(c) {
        return g;
    }
    let mut h = Fnv1a64::new_default();
    h.write_u32(u32::from(c));
    let bits = h.finish();
    let mut out = [0u8; GLYPH_COLS];
    for (i, col) in out.iter_mut().enumerate() {
        *col = ((bits >> (i * 7)) & 0x7F) as u8;
    }
    // Keep a recognizable frame so hashed glyphs never render empty.
    out[0] |= 0x41;
    out[GLYPH_COLS - 1] |= 0x41;
    out
}

/// Table glyph, or blank for anything unknown.
pub(crate) fn glyph_or_blank(c: char) -> Glyph {
    glyph(c).unwrap_or([0; GLYPH_COLS])
}

/// Whether the dot at `col`, `row` (row 0 = top) is lit.
pub(crate) fn is_lit(g: &Glyph, col: usize, row: usize) -> bool {
    col < GLYPH_COLS && row < GLYPH_ROWS && (g[col] >> (GLYPH_ROWS - 1 - row)) & 1 == 1
}

/// Size of one font pixel for a glyph `size` pixels tall.
pub(crate) fn unit(size: f64) -> f64 {
    (size / GLYPH_ROWS as f64).max(0.0)
}

/// Horizontal advance of one character.
pub(crate) fn char_advance(size: f64) -> f64 {
    unit(size) * ADVANCE_COLS as f64
}

/// Rendered width of `text`, excluding the trailing spacing column.
pub(crate) fn text_width(text: &str, size: f64) -> f64 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    char_advance(size) * n as f64 - unit(size)
}

/// Append the lit cells of `g` to `path`, with the glyph's top-left at `x`, `y`.
pub(crate) fn push_glyph(path: &mut BezPath, g: &Glyph, x: f64, y: f64, size: f64) {
    let u = unit(size);
    if u <= 0.0 {
        return;
    }
    for col in 0..GLYPH_COLS {
        for row in 0..GLYPH_ROWS {
            if !is_lit(g, col, row) {
                continue;
            }
            let x0 = x + col as f64 * u;
            let y0 = y + row as f64 * u;
            // Slight overlap avoids hairline seams between adjacent cells.
            let cell = Rect::new(x0, y0, x0 + u + 0.01, y0 + u + 0.01);
            path.extend(cell.path_elements(0.1));
        }
    }
}

/// Path of a single character centred on `center`.
pub(crate) fn char_path(c: char, center: kurbo::Point, size: f64) -> BezPath {
    let u = unit(size);
    let mut path = BezPath::new();
    push_glyph(
        &mut path,
        &glyph_or_hashed(c),
        center.x - u * GLYPH_COLS as f64 / 2.0,
        center.y - size / 2.0,
        size,
    );
    path
}

/// Path of `text` with its left edge at `x` and vertical middle at `y_mid`.
pub(crate) fn text_path(text: &str, x: f64, y_mid: f64, size: f64) -> BezPath {
    let mut path = BezPath::new();
    let advance = char_advance(size);
    let top = y_mid - size / 2.0;
    for (i, c) in text.chars().enumerate() {
        push_glyph(&mut path, &glyph_or_hashed(c), x + advance * i as f64, top, size);
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
