use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Per-cell projection handed to the rendering layer.
///
/// Carries full cell truth, including `is_hole` and the count for unrevealed
/// cells; the renderer is trusted to withhold hidden-cell data from the
/// player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub adjacent_holes: u8,
    pub is_hole: bool,
    pub is_revealed: bool,
    pub is_empty: bool,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        Self {
            adjacent_holes: cell.adjacent_holes(),
            is_hole: cell.is_hole(),
            is_revealed: cell.is_revealed(),
            is_empty: cell.is_empty(),
        }
    }
}

/// Read-only snapshot of the whole game state, taken after every operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: Coord,
    pub columns: Coord,
    pub size: CellCount,
    pub status: GameStatus,
    pub revealed_count: CellCount,
    pub hole_count: CellCount,
    pub cells: Array2<CellView>,
}

impl GameSnapshot {
    pub fn cell_at(&self, pos: Pos) -> CellView {
        self.cells[pos.to_nd_index()]
    }
}

impl From<&GameEngine> for GameSnapshot {
    fn from(engine: &GameEngine) -> Self {
        let grid = engine.grid();
        let (rows, columns) = (grid.rows(), grid.columns());
        let cells = Array2::from_shape_fn((rows, columns).to_nd_index(), |(row, col)| {
            grid[(row as Coord, col as Coord)].into()
        });

        Self {
            rows,
            columns,
            size: grid.size(),
            status: engine.status(),
            revealed_count: engine.revealed_count(),
            hole_count: grid.hole_count(),
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_mirrors_engine_state() {
        let mut engine = GameEngine::new(Grid::with_holes(3, 3, &[(1, 1)]).unwrap());
        engine.reveal((0, 0)).unwrap();

        let snapshot = GameSnapshot::from(&engine);

        assert_eq!(snapshot.rows, 3);
        assert_eq!(snapshot.columns, 3);
        assert_eq!(snapshot.size, 9);
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.revealed_count, 1);
        assert_eq!(snapshot.hole_count, 1);
        assert_eq!(
            snapshot.cell_at((0, 0)),
            CellView {
                adjacent_holes: 1,
                is_hole: false,
                is_revealed: true,
                is_empty: false,
            }
        );
    }

    #[test]
    fn snapshot_exposes_hidden_cell_truth() {
        let engine = GameEngine::new(Grid::with_holes(3, 3, &[(1, 1)]).unwrap());

        let view = GameSnapshot::from(&engine).cell_at((1, 1));

        assert!(view.is_hole);
        assert!(!view.is_revealed);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let engine = GameEngine::new(Grid::with_holes(4, 5, &[(0, 0), (3, 4)]).unwrap());
        let snapshot = GameSnapshot::from(&engine);

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, snapshot);
    }
}
