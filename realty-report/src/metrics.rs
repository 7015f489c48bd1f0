//! Advance widths of the builtin Helvetica faces.
//!
//! Values are the standard Adobe Font Metrics for Helvetica and
//! Helvetica-Bold, in thousandths of an em, for printable ASCII. Anything
//! outside that range is measured as a wide glyph so estimates err on the
//! side of fitting.

/// Millimetres per PostScript point.
pub const PT_TO_MM: f32 = 0.352_778;

const FIRST: u32 = 0x20;
const FALLBACK_EM: u16 = 1000;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn advance_em(
    ch: char,
    bold: bool,
) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    (ch as u32)
        .checked_sub(FIRST)
        .and_then(|idx| table.get(idx as usize))
        .copied()
        .unwrap_or(FALLBACK_EM)
}

/// Rendered width of `text` in millimetres at `font_size` points.
pub fn text_width_mm(
    text: &str,
    font_size: f32,
    bold: bool,
) -> f32 {
    let em: u32 = text.chars().map(|ch| u32::from(advance_em(ch, bold))).sum();
    em as f32 / 1000.0 * font_size * PT_TO_MM
}

/// Longest prefix of `text` whose rendered width stays within `max_mm`.
pub fn fit_prefix(
    text: &str,
    max_mm: f32,
    font_size: f32,
    bold: bool,
) -> &str {
    let limit_em = max_mm / (font_size * PT_TO_MM) * 1000.0;
    let mut used = 0.0;
    for (idx, ch) in text.char_indices() {
        used += f32::from(advance_em(ch, bold));
        if used > limit_em {
            return &text[..idx];
        }
    }
    text
}
