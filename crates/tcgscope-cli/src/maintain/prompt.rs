//! Line-oriented prompt helpers for the maintenance passes.

use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line from stdin.
pub(super) fn ask(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Like [`ask`], but an empty answer falls back to `default`.
pub(super) fn ask_with_default(prompt: &str, default: &str) -> anyhow::Result<String> {
    let answer = ask(&format!("{prompt} [{default}]: "))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Yes/no confirmation; anything but `y`/`yes` counts as no.
pub(super) fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let answer = ask(&format!("{prompt} (y/n): "))?;
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
