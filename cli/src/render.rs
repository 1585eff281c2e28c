use std::fmt::Write;

use minefield_core::{BoardView, CellSnapshot, CellView, GameOutcome, Hud};

/// Shown instead of the mine counter when the player placed more flags than
/// there are mines.
pub(crate) const OVERFLAGGED: &str = "-?-";

/// Three-digit counter, like the seven-segment displays it imitates.
pub(crate) fn counter(value: isize) -> String {
    if value < 0 {
        OVERFLAGGED.to_owned()
    } else {
        format!("{:03}", value.min(999))
    }
}

fn cell_glyph(cell: CellSnapshot) -> char {
    if cell.exploded {
        return '*';
    }
    if cell.wrong_flag {
        return 'X';
    }
    match cell.view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Mine => '@',
    }
}

fn face(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::NotStarted | GameOutcome::InProgress => ":)",
        GameOutcome::Won => "B)",
        GameOutcome::Lost { .. } => "X(",
    }
}

pub(crate) fn hud_line(hud: &Hud, elapsed_secs: u32) -> String {
    let status = match hud.outcome {
        GameOutcome::NotStarted => "reveal any cell to start".to_owned(),
        GameOutcome::InProgress => "in progress".to_owned(),
        GameOutcome::Won => "cleared, you win".to_owned(),
        GameOutcome::Lost { at: (x, y) } => format!("boom at {x} {y}"),
    };
    format!(
        "[{}] {} [{}]  {}",
        counter(hud.mines_left),
        face(hud.outcome),
        counter(elapsed_secs as isize),
        status
    )
}

/// Renders the board with column numbers on top and row numbers on the left.
pub(crate) fn board(view: &BoardView) -> String {
    let (size_x, _) = view.size;
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..size_x {
        let _ = write!(out, "{:>3}", x);
    }
    out.push('\n');

    for (y, row) in view.rows().enumerate() {
        let _ = write!(out, "{:>3} ", y);
        for cell in row {
            let _ = write!(out, "{:>3}", cell_glyph(cell));
        }
        out.push('\n');
    }
    out
}
