use std::fmt;

use super::board::{Board, Cell, Content, Point};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", draw(self))
    }
}

/// Renders the board as a framed grid with 1-based row and column headers.
/// Revealed mines print as `@`, revealed cells print their adjacency count,
/// hidden cells print blank.
pub fn draw(board: &Board) -> String {
    let width = digit_width(board.rows().max(board.cols()));
    let mut result = String::new();
    result += &column_numbers(board.cols(), width);
    result += "\n";
    for row in 0..board.rows() {
        result += &partition(board.cols(), width);
        result += "\n";
        result += &cell_row(board, row, width);
        result += "\n";
    }
    result += &partition(board.cols(), width);
    result += "\n";
    result
}

fn digit_width(largest: usize) -> usize {
    largest.to_string().len()
}

fn column_numbers(cols: usize, width: usize) -> String {
    let mut line = " ".repeat(width + 3);
    for col in 1..=cols {
        line += &format!(" {:>w$}  ", col, w = width);
    }
    line
}

fn partition(cols: usize, width: usize) -> String {
    let mut line = " ".repeat(width + 2);
    line += "+";
    for _ in 0..cols {
        line += &"-".repeat(width + 2);
        line += "+";
    }
    line
}

fn cell_row(board: &Board, row: usize, width: usize) -> String {
    let mut line = format!(" {:>w$} |", row + 1, w = width);
    for col in 0..board.cols() {
        let glyph = cell_glyph(board.retrieve_cell(&Point(row, col)));
        line += &format!(" {:>w$} |", glyph, w = width);
    }
    line
}

fn cell_glyph(cell: &Cell) -> String {
    if !cell.visible {
        return String::new();
    }
    match cell.content {
        Content::Mine => String::from("@"),
        Content::Empty(adjacent) => adjacent.to_string(),
    }
}
