#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{config::FIELD_SIZE, coord::Coord, field::Field};

const LEFT_PAD: &str = "  ";
const GAP: &str = "        ";

fn column_header(out: &mut String) {
    out.push_str("  ");
    for x in 0..FIELD_SIZE {
        if x > 0 {
            out.push(' ');
        }
        out.push((b'A' + x as u8) as char);
    }
    out.push_str("  ");
}

fn field_row(out: &mut String, field: &Field, y: usize) {
    let label = y + 1;
    let _ = write!(out, "{} ", label);
    for x in 0..FIELD_SIZE {
        if x > 0 {
            out.push(' ');
        }
        let state = Coord::new(x, y).map(|c| field.get(c));
        out.push(state.map_or(' ', |s| s.symbol()));
    }
    let _ = write!(out, " {}", label);
}

/// Draw the own field (left) and the opponent view (right) side by side,
/// with column letters above and below and row numbers on both sides.
pub fn render_field_pair(own: &Field, opponent: &Field) -> String {
    let mut out = String::new();
    let header = |out: &mut String| {
        out.push_str(LEFT_PAD);
        column_header(out);
        out.push_str(GAP);
        column_header(out);
        out.push('\n');
    };

    header(&mut out);
    for y in 0..FIELD_SIZE {
        out.push_str(LEFT_PAD);
        field_row(&mut out, own, y);
        out.push_str(GAP);
        field_row(&mut out, opponent, y);
        out.push('\n');
    }
    header(&mut out);
    out
}
