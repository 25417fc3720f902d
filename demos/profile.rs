//! Profile Demo - the full page on a real terminal
//!
//! Runs the classic (light, no overlay) variant by default; pass
//! `--studio` for the dark variant with the pointer-tracking overlay, or a
//! path to a JSON profile to display your own content.
//!
//! Run with: cargo run --example profile [-- --studio] [-- path/to/profile.json]

use std::io;

use crossterm::terminal::size as terminal_size;
use vitrine::{PageOptions, ProfileContent, run};

fn main() -> io::Result<()> {
    let mut options = PageOptions::classic();
    let mut content = ProfileContent::sample();

    for arg in std::env::args().skip(1) {
        if arg == "--studio" {
            options = PageOptions::studio();
        } else {
            let source = std::fs::read_to_string(&arg)?;
            content = ProfileContent::from_json(&source)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        }
    }

    // The reference constants assume a pixel-tall viewport; scale them to
    // the rows we actually have.
    let (_, rows) = terminal_size()?;
    run(options.for_terminal(rows), content)
}
