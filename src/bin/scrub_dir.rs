//! Batch CLI: scrub every HTML file under a mirrored site directory.

use std::env;
use std::path::Path;
use std::process::exit;

use wayback_scrub::{process_tree, Options};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 1 {
        println!("Usage: scrub_dir <site-directory>");
        exit(1);
    }

    let root = Path::new(&args[0]);
    if !root.is_dir() {
        eprintln!("not a directory: {}", root.display());
        exit(1);
    }

    let summary = process_tree(root, &Options::default());
    eprintln!(
        "scrubbed {} file(s), {} failure(s)",
        summary.scrubbed, summary.failed
    );
}
