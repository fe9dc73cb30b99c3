use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// Honors the `color` config flag (and makes test output greppable).
pub fn set_color(enabled: bool) {
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

fn paint(color: &str) -> (String, &'static str) {
    if COLOR_ENABLED.load(Ordering::Relaxed) {
        (format!("{color}{BOLD}"), RESET)
    } else {
        (String::new(), "")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    let (pre, post) = paint(FG_BLUE);
    println!("{pre}[info]{post} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    let (pre, post) = paint(FG_GREEN);
    println!("{pre}[ok]{post} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    let (pre, post) = paint(FG_YELLOW);
    println!("{pre}[warn]{post} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    let (pre, post) = paint(FG_RED);
    eprintln!("{pre}[error]{post} {msg}");
}
