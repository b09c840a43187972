use std::io::{self, Write};

use palette_engine::ColorSet;

/// Print a palette: one canonical `RRGGBBAA` color per line, in order.
pub fn write_palette<W: Write>(set: &ColorSet, mut out: W) -> io::Result<()> {
    for color in set {
        writeln!(out, "{color}")?;
    }
    out.flush()
}
