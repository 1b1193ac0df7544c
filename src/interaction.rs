use regex::Regex;
use std::io;
use std::io::Write;
use std::process;

use super::board::Point;

// prompts until the player enters a 1-based "row col" pair that lands on the
// board; the returned point is 0-based
pub fn get_player_move(rows: usize, cols: usize) -> Point {
    loop {
        print!("+ Please enter the row and column number: ");
        io::stdout().flush().expect("Failed to flush");
        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input).expect("Failed to read");
        if bytes == 0 {
            // stdin closed mid-game
            process::exit(1);
        }
        match parse_coordinate(&input, rows, cols) {
            Some(point) => return point,
            None => println!("\nOops! It looks like something went wrong. Please try again.\n"),
        }
    }
}

pub fn wants_replay() -> bool {
    println!();
    println!("Would you like to play again?");
    println!(" • Type any key and press Enter to play again");
    println!(" • Press Enter to quit");
    print!(" > ");
    io::stdout().flush().expect("Failed to flush");
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => false,
        Ok(_) => !input.trim().is_empty(),
    }
}

fn parse_coordinate(input: &str, rows: usize, cols: usize) -> Option<Point> {
    let re = Regex::new(r"^\s*(\d+)\s+(\d+)\s*$").unwrap();
    let cap = re.captures(input)?;
    let row: usize = cap[1].parse().ok()?;
    let col: usize = cap[2].parse().ok()?;
    if row < 1 || col < 1 {
        return None;
    }
    let point = Point(row - 1, col - 1);
    if point.0 < rows && point.1 < cols {
        Some(point)
    } else {
        None
    }
}
