use std::io::{self, Write};

/// Blocking yes/no prompt on stdin. Anything but y/yes declines, as does
/// a closed or unreadable stdin.
pub fn confirm(question: &str) -> bool {
    print!("{question} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
