//! Screen: a raw-mode terminal session with queued drawing.
//!
//! Commands are queued into an internal byte buffer and flushed once per
//! frame. Full-frame redraws only; at one 10x20 well plus a side panel there
//! is nothing worth diffing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

/// Foreground styling for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub fg: Color,
    pub bold: bool,
    pub dim: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fg: Color::Grey,
            bold: false,
            dim: false,
        }
    }
}

impl TextStyle {
    pub fn colored(fg: Color) -> Self {
        Self {
            fg,
            ..Self::default()
        }
    }

    pub fn bold(fg: Color) -> Self {
        Self {
            fg,
            bold: true,
            dim: false,
        }
    }

    pub fn dim(fg: Color) -> Self {
        Self {
            fg,
            bold: false,
            dim: true,
        }
    }
}

pub struct Screen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Start a fresh frame (clears the queue and the terminal).
    pub fn begin_frame(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    /// Queue styled text at (x, y).
    pub fn put(&mut self, x: u16, y: u16, text: &str, style: TextStyle) -> Result<()> {
        self.buf.queue(cursor::MoveTo(x, y))?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(SetForegroundColor(style.fg))?;
        if style.bold {
            self.buf.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.buf.queue(SetAttribute(Attribute::Dim))?;
        }
        self.buf.queue(Print(text))?;
        Ok(())
    }

    /// Write the queued frame to the terminal.
    pub fn flush(&mut self) -> Result<()> {
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
