use std::io::{self, BufRead, IsTerminal, Write};

use colored::*;
use till_core::users::Confirm;

use crate::terminal::colors;

/// Writes `msg` without a trailing newline, only when someone is typing.
pub fn inline(msg: &str) {
    if !io::stdin().is_terminal() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "{}", msg);
    let _ = stdout.flush();
}

/// Asks on stdin; anything other than `y`/`yes` declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stdout = io::stdout().lock();
        let _ = write!(
            stdout,
            "{} {} ",
            prompt.color(colors::ACCENT),
            "[y/N]".color(colors::SEPARATOR)
        );
        let _ = stdout.flush();
        drop(stdout);

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
