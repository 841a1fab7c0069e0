//! Submatrix table enumeration CLI
//!
//! Usage: subgrid_enumerate
//!
//! Prints the full submatrix table for the flattened 4x4 index grid: one
//! entry per (row, col) pair, row-outer col-inner order, as a single
//! nested-sequence literal on standard output.
//!
//! Example:
//!   subgrid_enumerate
//!   [[5, 6, 7, 9, 10, 11, 13, 14, 15], ..., [0, 1, 2, 4, 5, 6, 8, 9, 10]]

use std::env;
use std::io;
use subgrid_table::app::table::SubmatrixTable;
use subgrid_table::domain::grid::IndexGrid;
use subgrid_table::infra::render::write_table;

fn print_usage(program: &str) {
    eprintln!("Usage: {}", program);
    eprintln!();
    eprintln!("Prints the submatrix table of the flattened 4x4 index grid:");
    eprintln!("one entry per (row, col) pair, row-outer col-inner order.");
    eprintln!("The command takes no arguments.");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unexpected argument: {}", other);
                eprintln!();
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }

    let grid = IndexGrid::new();

    let table = match SubmatrixTable::enumerate(&grid) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // the literal is the program's sole output
    if let Err(e) = write_table(&mut io::stdout().lock(), &table) {
        eprintln!("Error writing output: {}", e);
        std::process::exit(1);
    }
}
