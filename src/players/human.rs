use crate::display::{CYAN, GREEN, RED, RESET, YELLOW};
use crate::game::game_state::GameView;
use crate::game::tile::Move;
use crate::players::MoveSource;
use crate::{DominoError, Result};
use std::io::{BufRead, Write};

/// Terminal player: lists the legal placements and reads the chosen index.
pub struct HumanPlayer<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_choice(&mut self, count: usize) -> Result<usize> {
        loop {
            write!(
                self.output,
                "\n{GREEN}Choose a move (0-{}): {RESET}",
                count - 1
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(DominoError::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(choice) if choice < count => return Ok(choice),
                Ok(_) => writeln!(self.output, "{RED}Invalid choice. Try again.{RESET}")?,
                Err(_) => writeln!(self.output, "{RED}Please enter a number.{RESET}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanPlayer<R, W> {
    fn decide_move(&mut self, view: &GameView<'_>) -> Result<Option<Move>> {
        let moves = view.hand.valid_moves(view.ends);
        if moves.is_empty() {
            writeln!(
                self.output,
                "{YELLOW}No valid move available. Drawing from the stock or passing.{RESET}"
            )?;
            return Ok(None);
        }

        writeln!(self.output, "\n{CYAN}Your hand:{RESET}")?;
        for (i, tile) in view.hand.tiles().iter().enumerate() {
            writeln!(self.output, "  {i}: {tile}")?;
        }
        writeln!(self.output, "{YELLOW}Stock:{RESET} {} tiles left", view.stock_len)?;

        writeln!(self.output, "\n{CYAN}Valid moves:{RESET}")?;
        for (i, mv) in moves.iter().enumerate() {
            writeln!(self.output, "  {i}: Play {} on the {} side", mv.tile, mv.side)?;
        }

        let choice = self.read_choice(moves.len())?;
        Ok(Some(moves[choice]))
    }

    fn describe(&self) -> String {
        "human".to_string()
    }
}
