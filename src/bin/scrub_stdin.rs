//! Filter CLI: read one HTML document from stdin, write the cleaned markup
//! to stdout. Useful for piping and spot checks without touching the disk.

use std::io::{self, Read};

use wayback_scrub::scrub;

fn main() {
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    print!("{}", scrub(&html));
}
