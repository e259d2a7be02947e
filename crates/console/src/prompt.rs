//! Interactive confirmation for destructive order transitions.

use std::io::{BufRead, Write};

use vendash_orders::ConfirmationGate;

/// Gate that asks on stderr and reads the answer from stdin.
///
/// Stderr so a piped stdout never swallows the question.
#[derive(Debug, Default, Copy, Clone)]
pub struct PromptGate;

impl ConfirmationGate for PromptGate {
    fn confirm(&self, prompt: &str) -> bool {
        let stdin = std::io::stdin();
        confirm_from(&mut stdin.lock(), &mut std::io::stderr(), prompt)
    }
}

fn confirm_from(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> bool {
    if write!(output, "{prompt} [y/N] ").and_then(|_| output.flush()).is_err() {
        return false;
    }
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => is_affirmative(&line),
        Err(_) => false,
    }
}

fn is_affirmative(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}
