//! # BASIC
//!
//! Runs a Dartmouth BASIC program from a file.
//!

mod term;

fn main() {
    term::main();
}
