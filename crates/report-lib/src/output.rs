//! Console output
//!
//! Every line of the report goes through [`Console`], which owns the writer
//! and the color setting. Measurement code only names a [`Style`] token.

use colored::Colorize;
use std::io::{self, Write};

/// Styling tokens used by the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Section headings and banners
    Heading,
    /// Measured values
    Value,
    /// Totals, costs and positive outcomes
    Success,
    /// Missing inputs and unavailable tools
    Error,
    /// Notices that need attention but are not failures
    Warning,
    /// No styling
    Plain,
}

/// Line-oriented writer for the report
pub struct Console<W: Write = io::Stdout> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Console on standard output
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Apply a style to a piece of text
    pub fn paint(&self, text: &str, style: Style) -> String {
        if !self.color {
            return text.to_string();
        }
        match style {
            Style::Heading => text.bold().to_string(),
            Style::Value => text.yellow().to_string(),
            Style::Success => text.green().to_string(),
            Style::Error => text.red().to_string(),
            Style::Warning => text.yellow().to_string(),
            Style::Plain => text.to_string(),
        }
    }

    /// Write one line of already formatted text
    pub fn line(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    /// Write one line in a single style
    pub fn styled(&mut self, text: &str, style: Style) -> io::Result<()> {
        let painted = self.paint(text, style);
        self.line(painted)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Section heading surrounded by blank lines
    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        self.blank()?;
        self.styled(title, Style::Heading)?;
        self.blank()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Format currency
pub fn format_currency(amount: f64, currency: &str) -> String {
    match currency {
        "USD" => format!("${:.2}", amount),
        "EUR" => format!("€{:.2}", amount),
        "GBP" => format!("£{:.2}", amount),
        _ => format!("{:.2} {}", amount, currency),
    }
}
