#![forbid(unsafe_code)]

//! Human-readable progress reporter with colorization support

use crate::engine::rewriter::ColorDecision;
use crate::engine::summary::RunSummary;
use crate::engine::walker::{DirectoryRecord, FileError};
use crate::output::Reporter;
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable streaming reporter
///
/// Emits one line per directory listing entry, per processed file, and per
/// colour decision, followed by a colored summary block.
pub struct HumanReporter<W: WriteColor> {
    out: W,
}

impl HumanReporter<StandardStream> {
    /// Creates a reporter writing to stdout with the specified color choice
    pub fn stdout(color_choice: ColorChoice) -> Self {
        HumanReporter {
            out: StandardStream::stdout(color_choice),
        }
    }
}

impl<W: WriteColor> HumanReporter<W> {
    /// Creates a reporter writing to an arbitrary colored sink
    pub fn new(out: W) -> Self {
        HumanReporter { out }
    }

    /// Consumes the reporter, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn with_color(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", text)?;
        self.out.reset()
    }
}

fn bold() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true);
    spec
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

fn bold_fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    spec
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

impl<W: WriteColor> Reporter for HumanReporter<W> {
    fn directory(&mut self, record: &DirectoryRecord) -> io::Result<()> {
        self.with_color(&bold(), &record.path.display().to_string())?;
        writeln!(self.out)?;

        if !record.subdirectories.is_empty() {
            writeln!(
                self.out,
                "  subdirectories: {}",
                record.subdirectories.join(", ")
            )?;
        }
        if !record.files.is_empty() {
            writeln!(self.out, "  files: {}", record.files.join(", "))?;
        }

        Ok(())
    }

    fn file_start(&mut self, path: &Path) -> io::Result<()> {
        write!(self.out, "processing: ")?;
        self.with_color(&fg(Color::Cyan), &path.display().to_string())?;
        writeln!(self.out)
    }

    fn decision(&mut self, decision: &ColorDecision) -> io::Result<()> {
        match decision {
            ColorDecision::Inverted { from, to } => {
                write!(self.out, "  ")?;
                self.with_color(&fg(Color::Green), "negated")?;
                writeln!(self.out, " {} to {}", from, to)
            }
            ColorDecision::Ignored { literal } => {
                write!(self.out, "  ")?;
                self.with_color(&fg(Color::Yellow), "skipping ignored colour:")?;
                writeln!(self.out, " {}", literal)
            }
            ColorDecision::NonColor { literal } => {
                writeln!(self.out, "  skipping non-colour \"{}\"", literal)
            }
        }
    }

    fn file_failure(&mut self, error: &FileError) -> io::Result<()> {
        self.with_color(&bold_fg(Color::Red), "error:")?;
        writeln!(self.out, " {}", error)
    }

    fn run_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        writeln!(self.out)?;
        self.with_color(&bold(), "Summary:")?;
        writeln!(self.out)?;
        writeln!(self.out)?;

        writeln!(
            self.out,
            "  {} processed, {} changed",
            count(summary.files_processed, "file", "files"),
            summary.files_changed
        )?;
        writeln!(
            self.out,
            "  {} negated, {} ignored, {} passed through",
            count(summary.inverted, "colour", "colours"),
            summary.ignored,
            count(summary.non_colors, "non-colour", "non-colours")
        )?;

        for failure in &summary.failures {
            write!(self.out, "  ")?;
            self.with_color(&fg(Color::Red), "✗")?;
            writeln!(self.out, " {}", failure.message)?;
        }

        writeln!(self.out)?;

        if summary.passed() {
            self.with_color(&bold_fg(Color::Green), "Run PASSED")?;
            writeln!(self.out)?;
        } else {
            self.with_color(
                &bold_fg(Color::Red),
                &format!(
                    "Run FAILED: {} could not be processed",
                    count(summary.failures.len(), "file", "files")
                ),
            )?;
            writeln!(self.out)?;
        }

        Ok(())
    }
}
