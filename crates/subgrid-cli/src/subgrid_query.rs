//! Single-pair submatrix query CLI
//!
//! Usage: subgrid_query
//! Then enter a row and a column index (0-3 each) separated by a space.
//!
//! Example:
//!   subgrid_query
//!   Enter row and column (0-3 each, space-separated, or 'q' to quit): 0 0
//!   [5, 6, 7, 9, 10, 11, 13, 14, 15]

use std::env;
use std::io::{self, Write};
use subgrid_table::constants::GRID_DIM;
use subgrid_table::domain::grid::IndexGrid;
use subgrid_table::infra::render::render_entry;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        eprintln!("Usage: {}", args[0]);
        eprintln!("The command takes no arguments; pairs are read from stdin.");
        std::process::exit(1);
    }

    let grid = IndexGrid::new();

    loop {
        print!(
            "\nEnter row and column (0-{} each, space-separated, or 'q' to quit): ",
            GRID_DIM - 1
        );
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                // stdin closed
                println!("Goodbye!");
                break;
            }
            Ok(_) => {}
            Err(_) => {
                eprintln!("Error reading input.");
                break;
            }
        }

        let input = input.trim();

        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        let values: Vec<usize> = input
            .split_whitespace()
            .filter_map(|s| s.parse().ok())
            .collect();

        if values.len() != 2 {
            eprintln!(
                "Error: Expected 2 values (row and column), got {}. Please try again.",
                values.len()
            );
            continue;
        }

        match grid.submatrix(values[0], values[1]) {
            Ok(entry) => println!("{}", render_entry(&entry)),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
