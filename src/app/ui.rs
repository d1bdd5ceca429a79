//! Form mode UI components.

use uuid::Uuid;

use super::command::SLASH_COMMANDS;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(session_id: Option<Uuid>) {
    println!(
        "{} {} - 학생 기록 보완 시스템",
        Style::header("recordwise"),
        Style::version(format!("v{VERSION}"))
    );
    if let Some(id) = session_id {
        println!("{}", Style::secondary(format!("session {id}")));
    }
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let width = SLASH_COMMANDS
        .iter()
        .map(|(cmd, _)| cmd.len())
        .max()
        .unwrap_or(0);
    for (cmd, desc) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{cmd:width$}")),
            Style::secondary(desc)
        );
    }
    println!();
}

pub fn print_warning(message: &str) {
    crate::warn!("{} {message}", Style::warning("Warning:"));
    eprintln!();
}

pub fn print_error(message: &str) {
    crate::warn!("{} {message}", Style::error("Error:"));
    eprintln!();
}
