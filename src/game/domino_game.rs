//! Turn loop for a two-seat game: opening, draws, passes, domino and lock.

use crate::display::{render_outcome, render_state, RESET, YELLOW};
use crate::game::create_set::PLAYER_COUNT;
use crate::game::game_state::GameView;
use crate::game::hand::Hand;
use crate::game::layout::Layout;
use crate::game::tile::{Move, Side, Tile};
use crate::players::MoveSource;
use crate::{DominoError, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A player at the table: display name, tiles held and who decides their moves.
pub struct Seat {
    pub name: String,
    pub hand: Hand,
    source: Box<dyn MoveSource>,
}

impl Seat {
    pub fn new(name: impl Into<String>, hand: Hand, source: Box<dyn MoveSource>) -> Self {
        Self {
            name: name.into(),
            hand,
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A seat played its last tile.
    Domino { winner: usize },
    /// Nobody can play and the stock is empty; lowest pip total wins.
    Locked { winner: usize, pip_totals: [i32; PLAYER_COUNT] },
}

impl Outcome {
    pub fn winner(&self) -> usize {
        match self {
            Outcome::Domino { winner } | Outcome::Locked { winner, .. } => *winner,
        }
    }
}

/// What happened during one seat's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Played(Move),
    DrewAndPlayed { drawn: Tile, played: Move },
    DrewAndPassed(Tile),
    Passed,
}

pub struct DominoGame {
    layout: Layout,
    seats: [Seat; PLAYER_COUNT],
    stock: Vec<Tile>,
    current: usize,
    pass_count: usize,
}

impl DominoGame {
    pub fn new(seats: [Seat; PLAYER_COUNT], stock: Vec<Tile>) -> Self {
        Self {
            layout: Layout::new(),
            seats,
            stock,
            current: 0,
            pass_count: 0,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn seats(&self) -> &[Seat; PLAYER_COUNT] {
        &self.seats
    }

    pub fn current_seat(&self) -> usize {
        self.current
    }

    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    pub fn pass_count(&self) -> usize {
        self.pass_count
    }

    fn next_seat(&self) -> usize {
        (self.current + 1) % PLAYER_COUNT
    }

    /// Seat and tile that open the game: the highest double, or failing
    /// that the highest-value tile. Earlier seats and tiles win ties.
    pub fn find_starting_player(&self) -> Option<(usize, Tile)> {
        let held = || {
            self.seats
                .iter()
                .enumerate()
                .flat_map(|(i, seat)| seat.hand.tiles().iter().map(move |tile| (i, *tile)))
        };

        let mut best_double: Option<(usize, Tile)> = None;
        for (seat, tile) in held().filter(|(_, tile)| tile.is_double()) {
            if best_double.is_none_or(|(_, best)| tile.left > best.left) {
                best_double = Some((seat, tile));
            }
        }
        if best_double.is_some() {
            return best_double;
        }

        let mut highest: Option<(usize, Tile)> = None;
        for (seat, tile) in held() {
            if highest.is_none_or(|(_, best)| tile.value() > best.value()) {
                highest = Some((seat, tile));
            }
        }
        highest
    }

    /// Places the opening tile and hands the turn to the other seat.
    pub fn open(&mut self) -> Result<(usize, Tile)> {
        let (seat, tile) = self
            .find_starting_player()
            .ok_or_else(|| DominoError::InvalidConfig("no tiles were dealt".to_string()))?;

        self.current = seat;
        self.play_move(Move::new(tile, Side::Left))?;
        info!("{} opens with {}", self.seats[seat].name, tile);

        self.current = self.next_seat();
        Ok((seat, tile))
    }

    /// Plays one turn for the current seat. Does not advance the turn.
    pub fn play_turn(&mut self) -> Result<TurnEvent> {
        let ends = self.layout.ends();

        if self.seats[self.current].hand.has_valid_move(ends) {
            return match self.ask_current()? {
                Some(mv) => {
                    self.play_move(mv)?;
                    self.pass_count = 0;
                    Ok(TurnEvent::Played(mv))
                }
                None => {
                    self.pass_count += 1;
                    Ok(TurnEvent::Passed)
                }
            };
        }

        let Some(drawn) = self.stock.pop() else {
            self.pass_count += 1;
            return Ok(TurnEvent::Passed);
        };
        self.seats[self.current].hand.add(drawn);
        debug!("{} draws {}", self.seats[self.current].name, drawn);

        if !(drawn.matches(ends.left()) || drawn.matches(ends.right())) {
            self.pass_count += 1;
            return Ok(TurnEvent::DrewAndPassed(drawn));
        }

        match self.ask_current()? {
            Some(played) => {
                self.play_move(played)?;
                self.pass_count = 0;
                Ok(TurnEvent::DrewAndPlayed { drawn, played })
            }
            None => {
                self.pass_count += 1;
                Ok(TurnEvent::DrewAndPassed(drawn))
            }
        }
    }

    fn ask_current(&mut self) -> Result<Option<Move>> {
        let current = self.current;
        let [first, second] = &mut self.seats;
        let (seat, other) = if current == 0 {
            (first, second)
        } else {
            (second, first)
        };

        let view = GameView {
            layout: &self.layout,
            ends: self.layout.ends(),
            hand: &seat.hand,
            opponent_hand: &other.hand,
            stock_len: self.stock.len(),
        };
        let decision = seat.source.decide_move(&view)?;
        debug!("{} ({}) decides {:?}", seat.name, seat.source.describe(), decision);
        Ok(decision)
    }

    /// Validates `mv` against the layout, then moves the tile from hand to table.
    fn play_move(&mut self, mv: Move) -> Result<()> {
        let hand = &mut self.seats[self.current].hand;
        if !hand.contains(&mv.tile) {
            return Err(DominoError::TileNotInHand(mv.tile));
        }
        self.layout.apply(mv)?;
        hand.remove(&mv.tile)?;
        Ok(())
    }

    pub fn check_outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.seats.iter().position(|seat| seat.hand.is_empty()) {
            return Some(Outcome::Domino { winner });
        }

        if self.pass_count >= PLAYER_COUNT && self.stock.is_empty() {
            let pip_totals = [self.seats[0].hand.pip_total(), self.seats[1].hand.pip_total()];
            let mut winner = 0;
            for (i, total) in pip_totals.iter().enumerate() {
                if *total < pip_totals[winner] {
                    winner = i;
                }
            }
            return Some(Outcome::Locked { winner, pip_totals });
        }

        None
    }

    /// Runs the game to the end, narrating every turn to `out`.
    pub fn play(&mut self, out: &mut dyn Write) -> Result<Outcome> {
        let (opener, tile) = self.open()?;
        writeln!(out, "\n{YELLOW}{} opens with {}{RESET}", self.seats[opener].name, tile)?;

        loop {
            if let Some(outcome) = self.check_outcome() {
                info!("game over: {:?}", outcome);
                writeln!(out, "\n{}", render_outcome(self, &outcome))?;
                return Ok(outcome);
            }

            writeln!(out, "\n{}", render_state(self))?;
            let event = self.play_turn()?;
            self.narrate(out, event)?;

            self.current = self.next_seat();
        }
    }

    fn narrate(&self, out: &mut dyn Write, event: TurnEvent) -> Result<()> {
        let name = &self.seats[self.current].name;
        info!("{}: {:?}", name, event);
        match event {
            TurnEvent::Played(mv) => writeln!(out, "{name} plays {mv}.")?,
            TurnEvent::DrewAndPlayed { drawn, played } => {
                writeln!(out, "{name} has no valid move and draws {drawn} from the stock.")?;
                writeln!(out, "{name} plays {played}.")?;
            }
            TurnEvent::DrewAndPassed(_) => {
                writeln!(out, "{name} has no valid move and draws from the stock.")?;
                writeln!(out, "{name} passes.")?;
            }
            TurnEvent::Passed => writeln!(out, "{name} passes.")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::difficulty::Difficulty;
    use crate::players::AiPlayer;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ai(seed: u64) -> Box<dyn MoveSource> {
        Box::new(AiPlayer::new(Difficulty::Medium, StdRng::seed_from_u64(seed)))
    }

    fn game(first: Vec<Tile>, second: Vec<Tile>, stock: Vec<Tile>) -> DominoGame {
        DominoGame::new(
            [
                Seat::new("North", Hand::new(first), ai(1)),
                Seat::new("South", Hand::new(second), ai(2)),
            ],
            stock,
        )
    }

    #[test]
    fn test_highest_double_opens() {
        let g = game(
            vec![Tile::new(6, 5), Tile::new(2, 2)],
            vec![Tile::new(4, 4), Tile::new(1, 0)],
            vec![],
        );
        assert_eq!(g.find_starting_player(), Some((1, Tile::new(4, 4))));
    }

    #[test]
    fn test_highest_value_opens_without_doubles() {
        let g = game(
            vec![Tile::new(1, 2), Tile::new(6, 5)],
            vec![Tile::new(5, 6), Tile::new(0, 3)],
            vec![],
        );
        // [6|5] and [5|6] tie; the first seat found keeps it.
        assert_eq!(g.find_starting_player(), Some((0, Tile::new(6, 5))));
    }

    #[test]
    fn test_open_places_tile_and_passes_turn() {
        let mut g = game(
            vec![Tile::new(3, 3), Tile::new(1, 2)],
            vec![Tile::new(0, 1)],
            vec![],
        );
        let (seat, tile) = g.open().unwrap();
        assert_eq!((seat, tile), (0, Tile::new(3, 3)));
        assert_eq!(g.layout().len(), 1);
        assert_eq!(g.seats()[0].hand.len(), 1);
        assert_eq!(g.current_seat(), 1);
    }

    #[test]
    fn test_draw_then_pass_when_drawn_tile_does_not_fit() {
        let mut g = game(
            vec![Tile::new(6, 6), Tile::new(6, 1)],
            vec![Tile::new(0, 2)],
            vec![Tile::new(3, 4)],
        );
        g.open().unwrap();

        let event = g.play_turn().unwrap();
        assert_eq!(event, TurnEvent::DrewAndPassed(Tile::new(3, 4)));
        assert_eq!(g.stock_len(), 0);
        assert_eq!(g.seats()[1].hand.len(), 2);
        assert_eq!(g.pass_count(), 1);
    }

    #[test]
    fn test_draw_then_play_when_drawn_tile_fits() {
        let mut g = game(
            vec![Tile::new(6, 6), Tile::new(1, 1)],
            vec![Tile::new(0, 2)],
            vec![Tile::new(6, 4)],
        );
        g.open().unwrap();

        let event = g.play_turn().unwrap();
        assert_matches!(event, TurnEvent::DrewAndPlayed { drawn, .. } if drawn == Tile::new(6, 4));
        assert_eq!(g.layout().len(), 2);
        assert_eq!(g.pass_count(), 0);
    }

    #[test]
    fn test_locked_game_lowest_total_wins() {
        let mut g = game(
            vec![Tile::new(6, 6), Tile::new(5, 5)],
            vec![Tile::new(0, 2)],
            vec![],
        );
        g.open().unwrap();
        // South cannot follow [6|6] and there is no stock.
        assert_eq!(g.play_turn().unwrap(), TurnEvent::Passed);
        assert_eq!(g.check_outcome(), None);
        g.current = g.next_seat();
        assert_eq!(g.play_turn().unwrap(), TurnEvent::Passed);

        assert_eq!(
            g.check_outcome(),
            Some(Outcome::Locked { winner: 1, pip_totals: [10, 2] })
        );
    }

    #[test]
    fn test_game_runs_to_completion() {
        let mut g = game(
            vec![Tile::new(6, 6), Tile::new(6, 1), Tile::new(1, 3)],
            vec![Tile::new(6, 2), Tile::new(2, 2), Tile::new(4, 5)],
            vec![Tile::new(0, 0), Tile::new(3, 4)],
        );
        let mut out = Vec::new();
        let outcome = g.play(&mut out).unwrap();

        assert!(outcome.winner() < PLAYER_COUNT);
        let narration = String::from_utf8(out).unwrap();
        assert!(narration.contains("North opens with [6|6]"));
    }

    #[test]
    fn test_play_move_rejects_foreign_tile() {
        let mut g = game(vec![Tile::new(6, 6)], vec![Tile::new(0, 2)], vec![]);
        g.open().unwrap();
        let err = g.play_move(Move::new(Tile::new(6, 3), Side::Left)).unwrap_err();
        assert_matches!(err, DominoError::TileNotInHand(_));
    }
}
