//! Cell rendering of a field view onto a terminal.

use console::Term;
use starfall_field::{
    FieldView, Piece, FIELD_COLUMN_COUNT, FIELD_HIDDEN_ROW_COUNT, FIELD_ROW_COUNT,
};

const RESET: &str = "\x1b[0m";

// ANSI color per cell value 1..=7.
const CELL_COLORS: [&str; 8] = [
    "\x1b[0m",
    "\x1b[0;31m",
    "\x1b[0;35m",
    "\x1b[0;33m",
    "\x1b[0;36m",
    "\x1b[0;34m",
    "\x1b[0;32m",
    "\x1b[0;37m",
];

/// The mask value of `piece` at an absolute grid cell, 0 when the cell is
/// outside the piece's 4x4 box.
fn piece_cell(piece: &Piece, col: i32, row: i32) -> u8 {
    let x = col - piece.cell_x;
    let y = row - piece.cell_y;
    if (0..4).contains(&x) && (0..4).contains(&y) {
        piece.cells()[(y * 4 + x) as usize]
    } else {
        0
    }
}

fn next_piece_line(piece: &Piece, mask_row: usize) -> String {
    let mask = Piece::mask(piece.kind, 0);
    let mut line = String::new();
    for x in 0..4 {
        let cell = mask[mask_row * 4 + x];
        if cell == 0 {
            line.push_str("  ");
        } else {
            line.push_str(CELL_COLORS[cell as usize]);
            line.push_str("[]");
            line.push_str(RESET);
        }
    }
    line
}

fn side_panel_line(view: &dyn FieldView, visible_row: usize) -> String {
    let score = view.score_data();
    match visible_row {
        0 => "  NEXT".to_string(),
        2..=5 => match view.next_piece() {
            Some(piece) => format!("  {}", next_piece_line(piece, visible_row - 2)),
            None => String::new(),
        },
        7 => format!("  SCORE {}", score.score),
        8 => format!("  LINES {}", score.lines),
        9 => format!("  LEVEL {}", score.level),
        11 if view.is_game_over() => "  GAME OVER".to_string(),
        _ => String::new(),
    }
}

/// Renders the visible rows of the field (hidden spawn rows clipped) with
/// the active piece, ghost piece, next-piece preview and score panel.
pub fn render(term: &Term, view: &dyn FieldView, status: &str) -> std::io::Result<()> {
    let mut lines = Vec::new();
    lines.push(format!("┌{}┐", "──".repeat(FIELD_COLUMN_COUNT)));

    for row in FIELD_HIDDEN_ROW_COUNT..FIELD_ROW_COUNT {
        let mut line = String::from("│");
        for col in 0..FIELD_COLUMN_COUNT {
            let locked = view.grid().cell(col, row);
            let active = view
                .active_piece()
                .map_or(0, |p| piece_cell(p, col as i32, row as i32));
            let ghost = view
                .ghost_piece()
                .map_or(0, |p| piece_cell(p, col as i32, row as i32));

            if locked != 0 || active != 0 {
                let value = if active != 0 { active } else { locked };
                line.push_str(CELL_COLORS[value as usize]);
                line.push_str("[]");
                line.push_str(RESET);
            } else if ghost != 0 {
                line.push_str("::");
            } else {
                line.push_str("  ");
            }
        }
        line.push('│');
        line.push_str(&side_panel_line(view, row - FIELD_HIDDEN_ROW_COUNT));
        lines.push(line);
    }

    lines.push(format!("└{}┘", "──".repeat(FIELD_COLUMN_COUNT)));
    lines.push(status.to_string());

    term.move_cursor_to(0, 0)?;
    for line in lines {
        term.clear_line()?;
        term.write_line(&line)?;
    }
    term.flush()
}
