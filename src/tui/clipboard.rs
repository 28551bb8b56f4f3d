//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` for cross-platform support, falling back to an OSC 52
//! escape sequence written to the terminal when no native clipboard is
//! reachable (headless Linux, SSH sessions). The clipboard is created
//! fresh each time to avoid holding resources.

use anyhow::{Context, Result};
use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crossterm::execute;
use crossterm::style::Print;
use std::io;

/// Which path actually performed the copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Native,
    Osc52,
}

/// Copy text to the system clipboard, best effort.
///
/// Returns the method that succeeded, or an error if both the native
/// clipboard and the OSC 52 fallback failed.
pub fn copy_to_clipboard(text: &str) -> Result<CopyMethod> {
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => Ok(CopyMethod::Native),
        Err(err) => {
            tracing::debug!(error = %err, "native clipboard unavailable, trying OSC 52");
            write_osc52(text).context("Failed to copy via OSC 52")?;
            Ok(CopyMethod::Osc52)
        }
    }
}

/// Emit an OSC 52 sequence so the hosting terminal performs the copy
fn write_osc52(text: &str) -> Result<()> {
    let encoded = STANDARD.encode(text.as_bytes());
    let mut stdout = io::stdout();
    execute!(stdout, Print(format!("\x1b]52;c;{encoded}\x1b\\")))
        .context("Failed to write OSC 52 sequence")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc52_payload_is_base64_of_the_text() {
        let encoded = STANDARD.encode("aclausen567@gmail.com".as_bytes());
        assert_eq!(
            STANDARD.decode(&encoded).unwrap(),
            b"aclausen567@gmail.com"
        );
    }
}
