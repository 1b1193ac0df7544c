use clap::Parser;
use std::process;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal")]
struct Args {
    /// Number of rows on the board
    #[arg(long, default_value_t = 3)]
    rows: usize,

    /// Number of columns on the board
    #[arg(long, default_value_t = 3)]
    cols: usize,

    /// Fraction of cells that contain mines, between 0.1 and 0.9
    #[arg(long, default_value_t = 0.25)]
    density: f64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(error) = minefield::play(args.rows, args.cols, args.density) {
        eprintln!("{}", error);
        process::exit(1);
    }
}
