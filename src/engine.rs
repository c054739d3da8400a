use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// What a single `reveal` call did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitHole,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// The game state machine: owns the grid, tracks aggregate counters, and
/// drives `InProgress -> Won | Lost` transitions.
///
/// Constructed after hole placement; from then on it is the sole mutator of
/// revealed/status state. Single-threaded by design, callers embedding it in
/// a concurrent host must synchronize externally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    grid: Grid,
    revealed_count: Saturating<CellCount>,
    hole_revealed: bool,
    status: GameStatus,
}

impl GameEngine {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            revealed_count: Saturating(0),
            hole_revealed: false,
            status: GameStatus::default(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> CellCount {
        self.grid.size()
    }

    pub fn hole_count(&self) -> CellCount {
        self.grid.hole_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the cell at `pos` and recomputes the game status.
    ///
    /// Fails with `OutOfBounds` before any mutation when `pos` is off the
    /// grid. Once the game is finished further calls are accepted but leave
    /// the state untouched.
    pub fn reveal(&mut self, pos: Pos) -> Result<RevealOutcome> {
        let pos = self.grid.validate(pos)?;

        if self.status.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }

        if self.grid[pos].is_hole() {
            self.hole_revealed = true;
            // The board counts as fully revealed on a loss; the sweep in
            // transition() makes the cells agree.
            self.revealed_count = Saturating(self.grid.size());
            self.transition();
            return Ok(RevealOutcome::HitHole);
        }

        let opened = self.flood_reveal(pos);
        self.transition();

        Ok(match (self.status, opened) {
            (GameStatus::Won, _) => RevealOutcome::Won,
            (_, 0) => RevealOutcome::NoChange,
            _ => RevealOutcome::Revealed,
        })
    }

    /// Breadth-first expansion from `root`: reveals the connected region of
    /// empty cells plus its bordering numbered cells. Numbered cells are
    /// revealed but never expanded, and holes are never enqueued. The
    /// visited set bounds the walk to one queue entry per cell.
    fn flood_reveal(&mut self, root: Pos) -> CellCount {
        let mut to_visit = VecDeque::from([root]);
        let mut enqueued = BTreeSet::from([root]);
        let mut opened = 0;

        while let Some(pos) = to_visit.pop_front() {
            if self.grid[pos].is_revealed() {
                continue;
            }
            self.grid[pos].mark_revealed();
            self.revealed_count += 1;
            opened += 1;

            if self.grid[pos].is_empty() {
                for neighbor in self.grid.neighbors(pos) {
                    let cell = self.grid[neighbor];
                    if !cell.is_revealed() && !cell.is_hole() && enqueued.insert(neighbor) {
                        to_visit.push_back(neighbor);
                    }
                }
            }
        }

        opened
    }

    fn transition(&mut self) {
        if self.hole_revealed {
            self.status = GameStatus::Lost;
            self.reveal_all();
        } else if self.grid.hole_count() + self.revealed_count.0 == self.grid.size() {
            self.status = GameStatus::Won;
        }
    }

    /// Terminal sweep on a loss so the final board shows every hole and
    /// number. Idempotent.
    fn reveal_all(&mut self) {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.columns() {
                if !self.grid[(row, col)].is_revealed() {
                    self.grid[(row, col)].mark_revealed();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rows: Coord, columns: Coord, holes: &[Pos]) -> GameEngine {
        GameEngine::new(Grid::with_holes(rows, columns, holes).unwrap())
    }

    #[test]
    fn fresh_engine_is_in_progress_with_nothing_revealed() {
        let engine = engine(3, 3, &[(2, 2)]);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.revealed_count(), 0);
        assert!(!engine.hole_revealed());
    }

    #[test]
    fn revealing_numbered_cell_opens_exactly_one_cell() {
        let mut engine = engine(3, 3, &[(1, 1)]);

        let outcome = engine.reveal((1, 2)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed);
        assert_eq!(engine.revealed_count(), 1);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert!(engine.grid()[(1, 2)].is_revealed());
        assert_eq!(engine.grid()[(1, 2)].adjacent_holes(), 1);
        for pos in [(0, 0), (0, 1), (0, 2), (1, 0), (2, 0), (2, 1), (2, 2)] {
            assert!(!engine.grid()[pos].is_revealed());
        }
    }

    #[test]
    fn flood_fill_opens_empty_region_and_numbered_border() {
        let mut engine = engine(3, 3, &[(2, 2)]);

        let outcome = engine.reveal((0, 0)).unwrap();

        // All 8 safe cells open in one move, the hole stays hidden, and
        // revealing the full safe region wins the game.
        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(engine.revealed_count(), 8);
        assert_eq!(engine.status(), GameStatus::Won);
        assert!(!engine.grid()[(2, 2)].is_revealed());
        assert!(!engine.hole_revealed());
    }

    #[test]
    fn flood_fill_stops_at_numbered_boundary() {
        // Holes down column 3 wall off the right side of a 5x5 board.
        let holes = [(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)];
        let mut engine = engine(5, 5, &holes);

        engine.reveal((0, 0)).unwrap();

        // Left of the wall: the empty region (columns 0-1) plus its numbered
        // border (column 2) are open, 15 cells in total.
        assert_eq!(engine.revealed_count(), 15);
        assert_eq!(engine.status(), GameStatus::InProgress);
        for row in 0..5 {
            assert!(engine.grid()[(row, 2)].is_revealed());
            assert!(!engine.grid()[(row, 3)].is_revealed());
            assert!(!engine.grid()[(row, 4)].is_revealed());
        }
    }

    #[test]
    fn revealing_hole_loses_and_exposes_whole_board() {
        let mut engine = engine(3, 3, &[(1, 1)]);

        let outcome = engine.reveal((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitHole);
        assert_eq!(engine.status(), GameStatus::Lost);
        assert!(engine.hole_revealed());
        assert_eq!(engine.revealed_count(), engine.size());
        for row in 0..3 {
            for col in 0..3 {
                assert!(engine.grid()[(row, col)].is_revealed());
            }
        }
    }

    #[test]
    fn reveal_after_loss_is_a_no_op() {
        let mut engine = engine(3, 3, &[(1, 1)]);
        engine.reveal((1, 1)).unwrap();
        let frozen = engine.clone();

        assert_eq!(engine.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine.reveal((1, 1)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine, frozen);
    }

    #[test]
    fn reveal_after_win_cannot_flip_the_result() {
        let mut engine = engine(3, 3, &[(2, 2)]);
        engine.reveal((0, 0)).unwrap();
        assert_eq!(engine.status(), GameStatus::Won);

        assert_eq!(engine.reveal((2, 2)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(engine.status(), GameStatus::Won);
        assert!(!engine.grid()[(2, 2)].is_revealed());
    }

    #[test]
    fn revealing_same_numbered_cell_twice_does_not_inflate_count() {
        let mut engine = engine(3, 3, &[(1, 1)]);
        engine.reveal((1, 2)).unwrap();

        let outcome = engine.reveal((1, 2)).unwrap();

        assert_eq!(outcome, RevealOutcome::NoChange);
        assert_eq!(engine.revealed_count(), 1);
    }

    #[test]
    fn win_requires_every_safe_cell() {
        // Two holes boxed into a corner; open the numbered cells one by one.
        let mut engine = engine(3, 3, &[(0, 0), (0, 1)]);

        for pos in [(1, 0), (1, 1), (1, 2), (0, 2)] {
            assert_eq!(engine.status(), GameStatus::InProgress);
            engine.reveal(pos).unwrap();
        }
        // Bottom row is an empty-plus-border region; last reveal wins.
        let outcome = engine.reveal((2, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(engine.status(), GameStatus::Won);
        assert_eq!(
            engine.hole_count() + engine.revealed_count(),
            engine.size()
        );
    }

    #[test]
    fn out_of_bounds_reveal_fails_without_mutation() {
        let mut engine = engine(3, 3, &[(1, 1)]);
        let frozen = engine.clone();

        assert_eq!(engine.reveal((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(engine.reveal((0, 3)), Err(GameError::OutOfBounds));
        assert_eq!(engine, frozen);
    }
}
