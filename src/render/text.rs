//! Text rendering: one line per row, one character per block.

use crate::color::Swatch;
use crate::matrix::BlockMatrix;

/// Render `matrix` with the swatch characters. Lines are joined by `\n`, with
/// no trailing newline.
pub fn render_text(matrix: &BlockMatrix, swatch: Swatch<char>) -> String {
    matrix
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|&cell| if cell { swatch.foreground } else { swatch.background })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
