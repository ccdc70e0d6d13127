//! Terminal rendering for the layout, the table summary and the final result.

use crate::game::domino_game::{DominoGame, Outcome};
use crate::game::layout::Layout;
use crate::game::tile::Tile;

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const BOLD: &str = "\x1b[1m";

/// Layouts longer than this show only their first and last five tiles.
const ELIDE_AFTER: usize = 10;
const ELIDED_EDGE: usize = 5;

pub fn render_tiles<'a>(tiles: impl IntoIterator<Item = &'a Tile>) -> String {
    tiles
        .into_iter()
        .map(Tile::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_layout(layout: &Layout) -> String {
    if layout.is_empty() {
        return "The table is empty.".to_string();
    }

    let tiles = if layout.len() > ELIDE_AFTER {
        format!(
            "{} {YELLOW}...{RESET} {}",
            render_tiles(layout.tiles().take(ELIDED_EDGE)),
            render_tiles(layout.tiles().skip(layout.len() - ELIDED_EDGE)),
        )
    } else {
        render_tiles(layout.tiles())
    };

    let ends = layout.ends();
    format!(
        "{CYAN}Table:{RESET} {tiles}\n{CYAN}Ends:{RESET} left={}, right={}",
        face(ends.left()),
        face(ends.right()),
    )
}

fn face(value: Option<u8>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn render_state(game: &DominoGame) -> String {
    let rule = "=".repeat(50);
    let mut lines = vec![
        format!("{MAGENTA}{rule}{RESET}"),
        render_layout(game.layout()),
        format!("{YELLOW}Stock:{RESET} {} tiles left", game.stock_len()),
    ];
    for (i, seat) in game.seats().iter().enumerate() {
        if i == game.current_seat() {
            lines.push(format!("{GREEN}> {}:{RESET} {} tiles", seat.name, seat.hand.len()));
        } else {
            lines.push(format!("  {}: {} tiles", seat.name, seat.hand.len()));
        }
    }
    lines.push(format!("{MAGENTA}{rule}{RESET}"));
    lines.join("\n")
}

pub fn render_outcome(game: &DominoGame, outcome: &Outcome) -> String {
    let seats = game.seats();
    match outcome {
        Outcome::Domino { winner } => format!(
            "{GREEN}{BOLD}{} wins! No tiles left.{RESET}",
            seats[*winner].name
        ),
        Outcome::Locked { winner, pip_totals } => {
            let mut lines = vec![format!("{YELLOW}The game is locked. Counting pips...{RESET}")];
            for (seat, total) in seats.iter().zip(pip_totals) {
                lines.push(format!("{}: {} points", seat.name, total));
            }
            lines.push(format!(
                "{GREEN}{BOLD}{} wins with {} points!{RESET}",
                seats[*winner].name, pip_totals[*winner]
            ));
            lines.join("\n")
        }
    }
}
