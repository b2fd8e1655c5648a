//! Chordbatch CLI entry point.

#![allow(clippy::print_stderr)]

fn main() {
    match chordbatch::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
