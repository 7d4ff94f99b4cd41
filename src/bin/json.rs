//! Convert a UCI document to JSON for inspection.
//!
//! Reads from the file given as the first argument, or from stdin when no
//! argument is given:
//!
//! ```text
//! $ json /etc/config/network
//! {
//!   "name": "",
//!   "sections": [ ... ]
//! }
//! ```

use std::io::{self, Read};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut data = Vec::new();
    match std::env::args().nth(1) {
        Some(path) => {
            let mut file = std::fs::File::open(path)?;
            file.read_to_end(&mut data)?;
        }
        None => {
            io::stdin().lock().read_to_end(&mut data)?;
        }
    }

    let package = uci::Package::from_slice(&data)?;
    let stdout = io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &package)?;
    println!();
    Ok(())
}
