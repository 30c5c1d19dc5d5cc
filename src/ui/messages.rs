//! User-facing console messages (stdout). Diagnostics go through
//! `tracing` on stderr instead.

use ansi_term::{Colour, Style};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn tag(colour: Colour, icon: &str) -> String {
    colour.bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "\n{}",
        Colour::Blue.bold().paint(format!("====================== {msg}"))
    );
}

/// One KPI tile: label on the left, value highlighted.
pub fn metric<T: fmt::Display>(label: &str, value: T) {
    println!(
        "  {:<28} {}",
        label,
        Style::new().bold().paint(value.to_string())
    );
}

/// Dimmed footnote.
pub fn caption<T: fmt::Display>(msg: T) {
    println!("{}", Colour::Fixed(244).italic().paint(msg.to_string()));
}
