//! Clipboard access over the terminal itself.
//!
//! The composed note is handed to the hosting terminal with an OSC 52 escape
//! sequence, so copying works across SSH without a display server. The trait
//! exists so app logic can be tested with a capturing fake.

use std::io::stdout;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crossterm::execute;
use crossterm::style::Print;

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        execute!(stdout(), Print(osc52_sequence(text)))
            .context("writing clipboard escape sequence")?;
        Ok(())
    }
}

fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}
