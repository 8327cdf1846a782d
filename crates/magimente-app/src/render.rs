//! Plain-text board rendering.

use std::fmt::Write as _;

use magimente_core::CellState;
use magimente_game::EngineView;

const CELL_WIDTH: usize = 8;

/// Formats a puzzle number without a trailing `.0` for integers.
pub fn number(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e9 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn cell(state: &CellState) -> String {
    match state {
        CellState::Fixed(value) => format!("[{}]", number(*value)),
        CellState::Filled(value) => format!("({})", number(*value)),
        CellState::Empty => ".".to_owned(),
    }
}

fn aggregate(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), number)
}

/// Renders the full game view: header, grid with line aggregates, bank.
#[must_use]
pub fn draw(view: &EngineView<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "level {}, operation {}, target {}",
        view.level,
        view.operation,
        number(view.target_value),
    );
    let _ = writeln!(out);

    for (row, row_aggregate) in view.board.rows().zip(view.row_aggregates) {
        for state in row {
            let _ = write!(out, "{:>CELL_WIDTH$}", cell(state));
        }
        let _ = writeln!(out, "   = {}", aggregate(*row_aggregate));
    }

    let _ = writeln!(out);
    for col_aggregate in view.col_aggregates {
        let _ = write!(out, "{:>CELL_WIDTH$}", aggregate(*col_aggregate));
    }
    let _ = writeln!(out);
    let _ = writeln!(out);

    if view.bank.is_empty() {
        let _ = writeln!(out, "bank: (empty)");
    } else {
        let numbers: Vec<_> = view.bank.iter().copied().map(number).collect();
        let _ = writeln!(out, "bank: {}", numbers.join("  "));
    }

    if view.is_won {
        let _ = writeln!(out, "\nsolved!");
    }

    out
}
