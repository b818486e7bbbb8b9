//! `EightPuzzle`: the 3x3 sliding-tile puzzle.
//!
//! A board lists the tiles row by row with `0` for the gap. Actions move the
//! gap; the goal board is `0 1 2 / 3 4 5 / 6 7 8`.

use std::fmt;

use thiserror::Error;
use wayfind_search::problem::Problem;

use crate::contract::SearchWorld;

const HEURISTICS: &[&str] = &["misplaced_tiles", "manhattan"];

/// Tiles in row-major order; `0` is the gap.
///
/// `gap` always holds the square of tile `0`. Every constructor establishes
/// it and [`Board::move_gap`] maintains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; 9],
    gap: u8,
}

/// Typed failure for board construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The tiles are not a permutation of `0..=8`.
    #[error("board is not a permutation of 0..=8: {tiles:?}")]
    NotAPermutation { tiles: [u8; 9] },
}

impl Board {
    /// The solved board.
    pub const GOAL: Self = Self {
        tiles: [0, 1, 2, 3, 4, 5, 6, 7, 8],
        gap: 0,
    };

    /// # Errors
    ///
    /// Returns [`BoardError::NotAPermutation`] unless every tile `0..=8`
    /// appears exactly once.
    pub fn new(tiles: [u8; 9]) -> Result<Self, BoardError> {
        let mut seen = [false; 9];
        let mut gap = 0u8;
        for (square, &tile) in (0u8..).zip(&tiles) {
            match seen.get_mut(usize::from(tile)) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(BoardError::NotAPermutation { tiles }),
            }
            if tile == 0 {
                gap = square;
            }
        }
        Ok(Self { tiles, gap })
    }

    /// Three gap moves from the goal.
    #[must_use]
    pub fn three_moves_from_goal() -> Self {
        Self {
            tiles: [1, 2, 5, 3, 4, 0, 6, 7, 8],
            gap: 5,
        }
    }

    /// A scrambled board of moderate difficulty.
    #[must_use]
    pub fn scrambled() -> Self {
        Self {
            tiles: [1, 4, 2, 7, 5, 8, 3, 0, 6],
            gap: 7,
        }
    }

    /// The reversed board, one of the hardest solvable positions.
    #[must_use]
    pub fn extreme() -> Self {
        Self {
            tiles: [0, 8, 7, 6, 5, 4, 3, 2, 1],
            gap: 0,
        }
    }

    #[must_use]
    pub fn tiles(&self) -> &[u8; 9] {
        &self.tiles
    }

    /// Square holding the gap.
    #[must_use]
    pub fn gap(&self) -> usize {
        usize::from(self.gap)
    }

    /// Whether the gap can move in `direction`.
    #[must_use]
    pub fn can_move_gap(&self, direction: Move) -> bool {
        let gap = self.gap;
        match direction {
            Move::Up => gap >= 3,
            Move::Down => gap < 6,
            Move::Left => gap % 3 != 0,
            Move::Right => gap % 3 != 2,
        }
    }

    /// The board after moving the gap; unchanged if the move is blocked.
    #[must_use]
    pub fn move_gap(&self, direction: Move) -> Self {
        if !self.can_move_gap(direction) {
            return *self;
        }
        let gap = self.gap;
        let target = match direction {
            Move::Up => gap - 3,
            Move::Down => gap + 3,
            Move::Left => gap - 1,
            Move::Right => gap + 1,
        };
        let mut tiles = self.tiles;
        tiles.swap(usize::from(gap), usize::from(target));
        Self { tiles, gap: target }
    }

    /// Tiles (gap excluded) not on their goal square.
    #[must_use]
    pub fn misplaced_tiles(&self) -> u32 {
        let count = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(square, &tile)| tile != 0 && usize::from(tile) != square)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Sum of the grid distances of every tile (gap excluded) to its goal
    /// square.
    #[must_use]
    pub fn manhattan_distance(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(square, &tile)| {
                let goal = usize::from(tile);
                let rows = (square / 3).abs_diff(goal / 3);
                let cols = (square % 3).abs_diff(goal % 3);
                u32::try_from(rows + cols).unwrap_or(u32::MAX)
            })
            .sum()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.tiles.chunks(3).enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }
            write!(f, "{}{}{}", chunk[0], chunk[1], chunk[2])?;
        }
        Ok(())
    }
}

/// Direction the gap moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Successor order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];
}

/// The eight-puzzle from a given starting board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EightPuzzle {
    start: Board,
}

impl EightPuzzle {
    #[must_use]
    pub fn new(start: Board) -> Self {
        Self { start }
    }
}

impl Problem for EightPuzzle {
    type State = Board;
    type Action = Move;

    fn initial_state(&self) -> Board {
        self.start
    }

    fn actions(&self, state: &Board) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|m| state.can_move_gap(*m))
            .collect()
    }

    fn result(&self, state: &Board, action: &Move) -> Board {
        state.move_gap(*action)
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == Board::GOAL
    }
}

impl SearchWorld for EightPuzzle {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "eight_puzzle"
    }

    fn heuristics(&self) -> &[&'static str] {
        HEURISTICS
    }

    fn estimate(&self, name: &str, state: &Board) -> Option<f64> {
        match name {
            "misplaced_tiles" => Some(f64::from(state.misplaced_tiles())),
            "manhattan" => Some(f64::from(state.manhattan_distance())),
            _ => None,
        }
    }

    fn render_action(&self, action: &Move) -> String {
        format!("{action:?}")
    }

    fn render_state(&self, state: &Board) -> String {
        state.to_string()
    }
}
