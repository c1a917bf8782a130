use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported board side; inputs are n×n with 0 < n <= 26.
pub const MAX_SIZE: usize = 26;

/// Number of distinct fruit symbols, digits `'0'..='8'`.
pub const MAX_FRUIT_TYPES: u8 = 9;

/// One fruit symbol, `0..=8`.
pub type Fruit = u8;

const EMPTY_SYMBOL: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCoordinate {
    pub row: usize,
    pub col: usize,
}

impl BoardCoordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidDimension(usize),
    InvalidTypeCount(u8),
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownSymbol(char),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(n) => {
                write!(f, "board side {n} outside 1..={MAX_SIZE}")
            }
            Self::InvalidTypeCount(p) => {
                write!(f, "fruit-type count {p} outside 1..={MAX_FRUIT_TYPES}")
            }
            Self::RowWidth {
                row,
                expected,
                found,
            } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            Self::UnknownSymbol(symbol) => write!(f, "unknown cell symbol {symbol:?}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// The n×n playing field. Row 0 is the top; gravity settles fruits toward
/// row n−1. Once `apply_gravity` has run, no empty cell sits below a fruit
/// in the same column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    n: usize,
    cells: Vec<Option<Fruit>>,
}

impl Board {
    pub fn empty(n: usize) -> Result<Self, BoardError> {
        if n == 0 || n > MAX_SIZE {
            return Err(BoardError::InvalidDimension(n));
        }
        Ok(Self {
            n,
            cells: vec![None; n * n],
        })
    }

    /// Parses a board from its text rows: digits `'0'..='8'` for fruits,
    /// `'*'` for an empty cell. The row count fixes n.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let mut board = Self::empty(rows.len())?;
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != board.n {
                return Err(BoardError::RowWidth {
                    row,
                    expected: board.n,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    EMPTY_SYMBOL => None,
                    '0'..='8' => Some(symbol as Fruit - b'0'),
                    other => return Err(BoardError::UnknownSymbol(other)),
                };
                board.cells[row * board.n + col] = cell;
            }
        }
        Ok(board)
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.n
    }

    const fn square_index(&self, at: BoardCoordinate) -> usize {
        at.row * self.n + at.col
    }

    #[must_use]
    pub fn fruit_at(&self, at: BoardCoordinate) -> Option<Fruit> {
        self.cells[self.square_index(at)]
    }

    pub fn set_fruit(&mut self, at: BoardCoordinate, fruit: Option<Fruit>) {
        let idx = self.square_index(at);
        self.cells[idx] = fruit;
    }

    /// Count of occupied cells.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    fn neighbors(&self, at: BoardCoordinate) -> [Option<BoardCoordinate>; 4] {
        [
            (at.row > 0).then(|| BoardCoordinate::new(at.row - 1, at.col)),
            (at.row + 1 < self.n).then(|| BoardCoordinate::new(at.row + 1, at.col)),
            (at.col > 0).then(|| BoardCoordinate::new(at.row, at.col - 1)),
            (at.col + 1 < self.n).then(|| BoardCoordinate::new(at.row, at.col + 1)),
        ]
    }

    /// Collects the maximal 4-connected group of same-fruit cells that
    /// contains `at`; empty when the start cell itself is empty. The start
    /// cell is always first in the result.
    ///
    /// Traversal is iterative; the work stack is bounded by n², not by the
    /// call stack.
    #[must_use]
    pub fn find_group(&self, at: BoardCoordinate) -> Vec<BoardCoordinate> {
        let Some(fruit) = self.fruit_at(at) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.n * self.n];
        let mut group = Vec::new();
        let mut stack = vec![at];
        visited[self.square_index(at)] = true;

        while let Some(cell) = stack.pop() {
            group.push(cell);
            for neighbor in self.neighbors(cell).into_iter().flatten() {
                let idx = self.square_index(neighbor);
                if !visited[idx] && self.cells[idx] == Some(fruit) {
                    visited[idx] = true;
                    stack.push(neighbor);
                }
            }
        }
        group
    }

    /// Marks every cell of `cells` empty. Callers follow up with
    /// `apply_gravity` to restore the settled invariant.
    ///
    /// # Panics
    /// Panics when a cell is already empty: a move that no longer resolves
    /// to live cells means the generator and the board disagree, and there
    /// is no way to recover from that mid-search.
    pub fn remove_group(&mut self, cells: &[BoardCoordinate]) {
        for &cell in cells {
            let idx = self.square_index(cell);
            assert!(
                self.cells[idx].is_some(),
                "remove_group: cell ({}, {}) is already empty",
                cell.row,
                cell.col
            );
            self.cells[idx] = None;
        }
    }

    /// Compacts every column downward, preserving the relative vertical
    /// order of its fruits. Total and idempotent.
    pub fn apply_gravity(&mut self) {
        for col in 0..self.n {
            let mut dst = self.n;
            for row in (0..self.n).rev() {
                if let Some(fruit) = self.cells[row * self.n + col] {
                    dst -= 1;
                    self.cells[dst * self.n + col] = Some(fruit);
                }
            }
            for row in 0..dst {
                self.cells[row * self.n + col] = None;
            }
        }
    }

    /// The board as text rows, the inverse of `from_rows`.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.n)
            .map(|row| {
                (0..self.n)
                    .map(|col| match self.cells[row * self.n + col] {
                        Some(fruit) => char::from(b'0' + fruit),
                        None => EMPTY_SYMBOL,
                    })
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
