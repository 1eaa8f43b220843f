#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap
)]

use log::warn;

/// A single rotation state: rows of cells where `1` marks an occupied cell.
///
/// Masks may be non-square (the vertical I is 1 wide and 4 tall).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask(&'static [&'static [u8]]);

impl Mask {
    /// Occupied `(row, col)` offsets, recomputed on every call.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        self.0.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, cell)| **cell == 1)
                .map(move |(col, _)| (row as i32, col as i32))
        })
    }
}

const I_ROTATIONS: &[Mask] = &[
    Mask(&[&[1], &[1], &[1], &[1]]), // Vertical
    Mask(&[&[1, 1, 1, 1]]),          // Horizontal
];

const O_ROTATIONS: &[Mask] = &[Mask(&[&[1, 1], &[1, 1]])];

const S_ROTATIONS: &[Mask] = &[
    Mask(&[&[0, 1, 1], &[1, 1, 0]]),
    Mask(&[&[1, 0], &[1, 1], &[0, 1]]),
];

const Z_ROTATIONS: &[Mask] = &[
    Mask(&[&[1, 1, 0], &[0, 1, 1]]),
    Mask(&[&[0, 1], &[1, 1], &[1, 0]]),
];

const T_ROTATIONS: &[Mask] = &[
    Mask(&[&[0, 1, 0], &[1, 1, 1]]),
    Mask(&[&[1, 0], &[1, 1], &[1, 0]]),
    Mask(&[&[1, 1, 1], &[0, 1, 0]]),
    Mask(&[&[0, 1], &[1, 1], &[0, 1]]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    O,
    S,
    Z,
    T,
}

impl TetrominoType {
    pub const ALL: [TetrominoType; 5] = [
        TetrominoType::I,
        TetrominoType::O,
        TetrominoType::S,
        TetrominoType::Z,
        TetrominoType::T,
    ];

    /// Ordered rotation states; rotation is cyclic over this list.
    #[must_use]
    pub fn rotations(self) -> &'static [Mask] {
        match self {
            TetrominoType::I => I_ROTATIONS,
            TetrominoType::O => O_ROTATIONS,
            TetrominoType::S => S_ROTATIONS,
            TetrominoType::Z => Z_ROTATIONS,
            TetrominoType::T => T_ROTATIONS,
        }
    }

    #[must_use]
    pub fn rotation_count(self) -> usize {
        self.rotations().len()
    }

    #[must_use]
    pub fn mask(self, rotation: usize) -> Mask {
        let rotations = self.rotations();
        rotations[rotation % rotations.len()]
    }
}

/// Display colour picked at spawn. Has no effect on gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Green,
    Red,
    Blue,
    Orange,
}

impl PieceColor {
    pub const ALL: [PieceColor; 4] = [
        PieceColor::Green,
        PieceColor::Red,
        PieceColor::Blue,
        PieceColor::Orange,
    ];

    #[must_use]
    pub fn get_color(self) -> ratatui::style::Color {
        match self {
            PieceColor::Green => ratatui::style::Color::Rgb(0, 255, 0),
            PieceColor::Red => ratatui::style::Color::Rgb(255, 0, 0),
            PieceColor::Blue => ratatui::style::Color::Rgb(0, 0, 255),
            PieceColor::Orange => ratatui::style::Color::Rgb(255, 120, 0),
        }
    }
}

/// Grid coordinate: `x` is the column, `y` the row (row 0 is the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The locked-cell field. Stored row-major, `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<bool>>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![false; width]; height],
        }
    }

    fn index(&self, cell: Position) -> Option<(usize, usize)> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (col, row) = (cell.x as usize, cell.y as usize);
        (col < self.width && row < self.height).then_some((row, col))
    }

    /// True for any cell outside the board or already occupied.
    ///
    /// Walls, floor, ceiling and locked cells are one predicate; callers never
    /// need to tell them apart.
    #[must_use]
    pub fn is_blocked(&self, cell: Position) -> bool {
        match self.index(cell) {
            Some((row, col)) => self.cells[row][col],
            None => true,
        }
    }

    #[must_use]
    pub fn is_occupied(&self, cell: Position) -> bool {
        self.index(cell)
            .is_some_and(|(row, col)| self.cells[row][col])
    }

    pub fn set_occupied(&mut self, cell: Position, occupied: bool) {
        if let Some((row, col)) = self.index(cell) {
            self.cells[row][col] = occupied;
        }
    }

    /// Marks every given cell occupied. The caller checks `is_blocked` first.
    pub fn lock(&mut self, cells: impl IntoIterator<Item = Position>) {
        for cell in cells {
            match self.index(cell) {
                Some((row, col)) => self.cells[row][col] = true,
                None => warn!("Ignoring lock outside the board at ({}, {})", cell.x, cell.y),
            }
        }
    }

    /// Removes every full row and prepends one empty row per removal.
    ///
    /// Surviving rows keep their relative order, which gives the same grid as
    /// deleting full rows one at a time and inserting an empty row on top each time.
    pub fn clear_full_lines(&mut self) -> usize {
        let before = self.cells.len();
        self.cells.retain(|row| !row.iter().all(|cell| *cell));
        let cleared = before - self.cells.len();

        if cleared > 0 {
            let mut rows = vec![vec![false; self.width]; cleared];
            rows.append(&mut self.cells);
            self.cells = rows;
        }

        cleared
    }

    /// Rows from top to bottom, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Every occupied cell on the board.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter(|(_, cell)| **cell)
                .map(move |(col, _)| Position::new(col as i32, row as i32))
        })
    }
}

/// The live, falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub tetromino_type: TetrominoType,
    pub color: PieceColor,
    pub position: Position,
    pub rotation: usize,
}

impl Tetromino {
    #[must_use]
    pub fn new(tetromino_type: TetrominoType, color: PieceColor, position: Position) -> Self {
        Self {
            tetromino_type,
            color,
            position,
            rotation: 0,
        }
    }

    #[must_use]
    pub fn mask(&self) -> Mask {
        self.tetromino_type.mask(self.rotation)
    }

    /// Whether the piece would overlap a blocked cell at the given placement.
    #[must_use]
    pub fn collides_at(&self, board: &Board, position: Position, rotation: usize) -> bool {
        self.tetromino_type
            .mask(rotation)
            .cells()
            .any(|(row, col)| board.is_blocked(position.offset(col, row)))
    }

    /// Moves by `(dx, dy)` when the target is free. Returns whether the piece moved.
    pub fn attempt_move(&mut self, board: &Board, dx: i32, dy: i32) -> bool {
        let target = self.position.offset(dx, dy);
        if self.collides_at(board, target, self.rotation) {
            return false;
        }
        self.position = target;
        true
    }

    /// Advances to the next rotation state unless it would collide.
    pub fn attempt_rotate(&mut self, board: &Board) -> bool {
        let next = (self.rotation + 1) % self.tetromino_type.rotation_count();
        if self.collides_at(board, self.position, next) {
            return false;
        }
        self.rotation = next;
        true
    }

    /// Absolute board cells covered at the current position and rotation.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Position> {
        let origin = self.position;
        self.mask()
            .cells()
            .map(move |(row, col)| origin.offset(col, row))
    }
}

#[derive(Debug, Clone, Default)]
pub struct GameState {
    pub score: u32,
    pub lines_cleared: u32,
    pub pieces_locked: u32,
    pub drop_timer: f32,
}

impl GameState {
    pub fn update_score(&mut self, lines_cleared: usize, bonus: u32) {
        let lines = u32::try_from(lines_cleared).unwrap_or(u32::MAX);
        self.lines_cleared = self.lines_cleared.saturating_add(lines);
        self.score = self.score.saturating_add(lines.saturating_mul(bonus));
    }
}
