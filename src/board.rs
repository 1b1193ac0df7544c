use itertools::iproduct;
use log::debug;
use rand::thread_rng;
use rand::Rng;
use thiserror::Error;

pub const MIN_MINE_DENSITY: f64 = 0.1;
pub const MAX_MINE_DENSITY: f64 = 0.9;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConstructionError {
    #[error("board needs at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("mine density must be between 0.1 and 0.9, got {0}")]
    InvalidDensity(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Mine,
    Empty(u8),
}

impl Content {
    pub fn is_mine(&self) -> bool {
        match *self {
            Content::Mine => true,
            _ => false,
        }
    }

    pub fn adjacent_mines(&self) -> Option<u8> {
        match *self {
            Content::Empty(adjacent) => Some(adjacent),
            Content::Mine => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub content: Content,
    pub visible: bool,
}

impl Cell {
    fn create_hidden() -> Cell {
        Cell {
            content: Content::Empty(0),
            visible: false,
        }
    }
}

// 0-based (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point(pub usize, pub usize);

pub struct BoardSize {
    rows: usize,
    cols: usize,
}

impl BoardSize {
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    pub fn points(&self) -> Vec<Point> {
        (0..self.area())
            .filter_map(|index| self.point_from_index(index))
            .collect()
    }

    pub fn point_from_index(&self, index: usize) -> Option<Point> {
        if index >= self.area() {
            return None;
        }
        Some(Point(index / self.cols, index % self.cols))
    }
}

pub struct Board {
    size: BoardSize,
    field: Vec<Vec<Cell>>,
    mine_density: f64,
    mine_count: usize,
    revealed_non_mine_count: usize,
}

impl Board {
    pub fn new(rows: usize, cols: usize, mine_density: f64) -> Result<Board, ConstructionError> {
        if rows < 1 || cols < 1 {
            return Err(ConstructionError::InvalidDimensions { rows, cols });
        }
        if !(MIN_MINE_DENSITY..=MAX_MINE_DENSITY).contains(&mine_density) {
            return Err(ConstructionError::InvalidDensity(mine_density));
        }
        let mut board = Board::blank(rows, cols, mine_density);
        board.deploy_mines(&mut thread_rng());
        board.derive_adjacency_counts();
        debug!(
            "built a {}x{} board with {} mines",
            rows, cols, board.mine_count
        );
        Ok(board)
    }

    fn blank(rows: usize, cols: usize, mine_density: f64) -> Board {
        let size = BoardSize { rows, cols };
        // the usize cast floors, so a 1-cell board always gets zero mines
        let mine_count = (size.area() as f64 * mine_density) as usize;
        let mut field = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row_vec = Vec::with_capacity(cols);
            for _ in 0..cols {
                row_vec.push(Cell::create_hidden());
            }
            field.push(row_vec);
        }

        Board {
            size,
            field,
            mine_density,
            mine_count,
            revealed_non_mine_count: 0,
        }
    }

    fn deploy_mines<R: Rng>(&mut self, rng: &mut R) {
        let mut deployed = 0;
        while deployed < self.mine_count {
            let point = Point(
                rng.gen_range(0..self.size.rows),
                rng.gen_range(0..self.size.cols),
            );
            let cell = self.retrieve_cell_mutable(&point);
            if !cell.content.is_mine() {
                cell.content = Content::Mine;
                deployed += 1;
            }
        }
    }

    fn derive_adjacency_counts(&mut self) {
        for point in self.size.points() {
            if self.retrieve_cell(&point).content.is_mine() {
                continue;
            }
            let adjacent = self
                .neighbor_points(&point)
                .iter()
                .filter(|neighbor| self.retrieve_cell(neighbor).content.is_mine())
                .count() as u8;
            self.retrieve_cell_mutable(&point).content = Content::Empty(adjacent);
        }
    }

    pub fn retrieve_cell(&self, point: &Point) -> &Cell {
        &self.field[point.0][point.1]
    }

    fn retrieve_cell_mutable(&mut self, point: &Point) -> &mut Cell {
        &mut self.field[point.0][point.1]
    }

    pub fn neighbor_points(&self, point: &Point) -> Vec<Point> {
        iproduct!(-1i32..=1, -1i32..=1)
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| (point.0 as i32 + dr, point.1 as i32 + dc))
            .filter(|&(r, c)| {
                r >= 0 && r < self.size.rows as i32 && c >= 0 && c < self.size.cols as i32
            })
            .map(|(r, c)| Point(r as usize, c as usize))
            .collect()
    }

    /// Reveals a cell, flooding outward through zero-count cells.
    /// Out-of-bounds and already-visible targets are no-ops; a cell turns
    /// visible before its neighbors are visited, which bounds the recursion.
    pub fn reveal(&mut self, point: &Point) {
        if point.0 >= self.size.rows || point.1 >= self.size.cols {
            return;
        }
        let cell = self.retrieve_cell_mutable(point);
        if cell.visible {
            return;
        }
        cell.visible = true;
        match cell.content {
            Content::Mine => {}
            Content::Empty(adjacent) => {
                self.revealed_non_mine_count += 1;
                if adjacent == 0 {
                    self.propagate_reveal(point);
                }
            }
        }
    }

    fn propagate_reveal(&mut self, point: &Point) {
        for neighbor in self.neighbor_points(point) {
            self.reveal(&neighbor);
        }
    }

    // end-of-game disclosure: every mine turns visible, nothing else moves
    pub fn reveal_mines(&mut self) {
        debug!("disclosing all {} mine cells", self.mine_count);
        for cell in self.field.iter_mut().flatten() {
            if cell.content.is_mine() {
                cell.visible = true;
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.size.rows
    }

    pub fn cols(&self) -> usize {
        self.size.cols
    }

    pub fn mine_density(&self) -> f64 {
        self.mine_density
    }

    pub fn cell_count(&self) -> usize {
        self.size.area()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn non_mine_count(&self) -> usize {
        self.size.area() - self.mine_count
    }

    pub fn revealed_non_mine_count(&self) -> usize {
        self.revealed_non_mine_count
    }

    #[cfg(test)]
    pub(crate) fn with_mines(rows: usize, cols: usize, mines: &[Point]) -> Board {
        let mut board = Board::blank(rows, cols, MIN_MINE_DENSITY);
        board.mine_count = mines.len();
        for point in mines {
            board.field[point.0][point.1].content = Content::Mine;
        }
        board.derive_adjacency_counts();
        board
    }
}

#[cfg(test)]
use proptest::prelude::*;
