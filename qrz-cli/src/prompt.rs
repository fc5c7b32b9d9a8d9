//! Interactive prompts for the account callsign and password.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Asks for the account callsign on stdin.
pub fn prompt_callsign() -> Result<String> {
    eprint!("Enter your callsign: ");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read callsign")?;

    non_empty(&line, "callsign")
}

/// Asks for the QRZ password without echoing it.
pub fn prompt_password(callsign: &str) -> Result<String> {
    let prompt = format!("Login required. Enter the QRZ password for {callsign}: ");
    let password = rpassword::prompt_password(prompt).context("Failed to read password")?;

    non_empty(&password, "password")
}

fn non_empty(value: &str, what: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        bail!("No {what} entered");
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty(" w1aw\n", "callsign").unwrap(), "w1aw");
    }

    #[test]
    fn test_non_empty_rejects_blank() {
        let err = non_empty("  \n", "password").unwrap_err();
        assert_eq!(err.to_string(), "No password entered");
    }
}
