//! ANSI-color logging for the nsc binary.
//!
//! Status lines go to stdout, errors to stderr. Coded errors use `NS0` for
//! configuration problems and `NS1` for per-file compilation problems.

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const CYAN: &str = "\x1b[36m";

pub fn success(message: &str) {
    println!("{}\u{2713}{} {}", GREEN, RESET, message);
}

pub fn error(message: &str) {
    eprintln!("{}\u{2717}{} {}", RED, RESET, message);
}

pub fn info(message: &str) {
    println!("{}\u{2139}{} {}", BLUE, RESET, message);
}

pub fn warn(message: &str) {
    println!("{}\u{26a0}{} {}", YELLOW, RESET, message);
}

pub fn dim(message: &str) {
    println!("{}{}{}", DIM, message, RESET);
}

pub fn highlight(text: &str) -> String {
    format!("{}{}{}", CYAN, text, RESET)
}

pub fn error_code(code: &str, message: &str) {
    eprintln!("{}error {}:{} {}", RED, code, RESET, message);
}
