//! Terminal rendering for markdown cards and status lines.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};
use wayfare_core::display::{OperationStatus, StatusLevel};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// Headings keep their hash marks so nested cards stay readable.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Render a one-line outcome, colored by its level.
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        if !self.rich_enabled {
            print!("{status}");
            return Ok(());
        }

        let color = match status.level {
            StatusLevel::Success => 32,
            StatusLevel::Warning => 33,
            StatusLevel::Error => 31,
        };
        println!("\x1b[{color}m{}\x1b[0m", status.to_string().trim_end());
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
