//! Table and entry emission
//!
//! This module writes rendered results to output streams.

use crate::app::table::SubmatrixTable;
use std::io::{self, Write};

/// Write the full table literal plus a trailing newline
pub fn write_table(writer: &mut impl Write, table: &SubmatrixTable) -> io::Result<()> {
    writeln!(writer, "{}", table)
}

/// Render a single entry as a bracketed literal, e.g. `[5, 6, 7]`
pub fn render_entry(entry: &[u32]) -> String {
    let values: Vec<String> = entry.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(", "))
}
