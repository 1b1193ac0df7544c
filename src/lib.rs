pub mod board;
mod interaction;
mod render;

use board::Board;
use board::ConstructionError;

pub fn play(rows: usize, cols: usize, mine_density: f64) -> Result<(), ConstructionError> {
    loop {
        println!("MINESWEEPER");
        println!("Game Board Size: {} rows and {} columns", rows, cols);
        let mut board = Board::new(rows, cols, mine_density)?;
        game_loop(&mut board);
        if !interaction::wants_replay() {
            return Ok(());
        }
    }
}

pub fn game_loop(board: &mut Board) {
    while board.revealed_non_mine_count() != board.non_mine_count() {
        println!("{}", board);
        let point = interaction::get_player_move(board.rows(), board.cols());
        if board.retrieve_cell(&point).content.is_mine() {
            board.reveal_mines();
            break;
        }
        board.reveal(&point);
    }
    println!("{}", board);
    if board.revealed_non_mine_count() == board.non_mine_count() {
        println!("You won!");
    } else {
        println!("You lose!");
    }
}
