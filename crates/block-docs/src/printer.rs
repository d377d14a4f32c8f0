//! Terminal progress printer
//!
//! Progress of a generation run is reported as colored lines:
//!
//! ```text
//! [100%] Parsing block with id: dummy
//! [100%] Parsing file: IDummyFile
//! [Info] All blocks have been parsed, writing to file..
//! [Success] Writing to file is done! See: output/data.json
//! ```
//!
//! Reporting never feeds back into generation; a silent printer simply
//! drops every line.

use crate::diagnostics::{Diagnostic, DiagnosticSeverity};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// One line of progress output
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressLine {
    /// A block directory is being parsed
    Block { percent: u32, id: String },
    /// An individual file is being parsed
    File { percent: u32, name: String },
    /// Every unit has been parsed
    Writing,
    /// The data file has been written
    Written { path: PathBuf },
    /// A non-fatal problem
    Diagnostic(Diagnostic),
}

impl ProgressLine {
    /// Progress line for block `index` (zero based) out of `total`
    pub fn block(index: usize, total: usize, id: impl Into<String>) -> Self {
        ProgressLine::Block {
            percent: progress_percent(index, total),
            id: id.into(),
        }
    }

    /// Progress line for file `index` (zero based) out of `total`
    pub fn file(index: usize, total: usize, name: impl Into<String>) -> Self {
        ProgressLine::File {
            percent: progress_percent(index, total),
            name: name.into(),
        }
    }

    fn tag(&self) -> Option<(String, Color)> {
        match self {
            ProgressLine::Block { percent, .. } | ProgressLine::File { percent, .. } => {
                Some((format!("[{}%]", percent), Color::Cyan))
            }
            ProgressLine::Writing => Some(("[Info]".to_string(), Color::Blue)),
            ProgressLine::Written { .. } => Some(("[Success]".to_string(), Color::Green)),
            ProgressLine::Diagnostic(d) => match d.severity {
                DiagnosticSeverity::Warning => Some(("[Warning]".to_string(), Color::Yellow)),
            },
        }
    }

    fn message(&self) -> String {
        match self {
            ProgressLine::Block { id, .. } => format!("Parsing block with id: {}", id),
            ProgressLine::File { name, .. } => format!("Parsing file: {}", name),
            ProgressLine::Writing => "All blocks have been parsed, writing to file..".to_string(),
            ProgressLine::Written { path } => {
                format!("Writing to file is done! See: {}", path.display())
            }
            ProgressLine::Diagnostic(d) => match &d.file {
                Some(file) => format!("{}: {}", file.display(), d.message),
                None => d.message.clone(),
            },
        }
    }
}

impl Display for ProgressLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.tag() {
            Some((tag, _)) => write!(f, "{} {}", tag, self.message()),
            None => write!(f, "{}", self.message()),
        }
    }
}

/// Rounded completion percentage after finishing item `index` of `total`
pub fn progress_percent(index: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((index + 1) as f64 / total as f64 * 100.0).round() as u32
}

/// Writes progress lines to stdout
#[derive(Debug, Clone, Copy)]
pub struct ProgressPrinter {
    use_color: bool,
    silent: bool,
}

impl ProgressPrinter {
    /// Create a printer
    ///
    /// # Arguments
    /// * `use_color` - Whether to use ANSI colors
    /// * `silent` - Drop every line
    pub fn new(use_color: bool, silent: bool) -> Self {
        Self { use_color, silent }
    }

    /// Print a line to stdout
    pub fn print(&self, line: &ProgressLine) {
        if self.silent {
            return;
        }
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if let Err(e) = write_colored(&mut stdout, line) {
            tracing::debug!("failed to print progress: {}", e);
        }
    }

    /// Print a block progress line
    pub fn block(&self, index: usize, total: usize, id: &str) {
        self.print(&ProgressLine::block(index, total, id));
    }

    /// Print a file progress line
    pub fn file(&self, index: usize, total: usize, name: &str) {
        self.print(&ProgressLine::file(index, total, name));
    }

    /// Print the diagnostics of a run
    pub fn diagnostics(&self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.print(&ProgressLine::Diagnostic(diagnostic.clone()));
        }
    }

    /// Print the line announcing that output is being written
    pub fn writing(&self) {
        self.print(&ProgressLine::Writing);
    }

    /// Print the line announcing the data file
    pub fn written(&self, path: &Path) {
        self.print(&ProgressLine::Written {
            path: path.to_path_buf(),
        });
    }
}

/// Write one line with its tag colored
pub fn write_colored<W: WriteColor>(w: &mut W, line: &ProgressLine) -> io::Result<()> {
    if let Some((tag, color)) = line.tag() {
        w.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(w, "{}", tag)?;
        w.reset()?;
        write!(w, " ")?;
    }
    writeln!(w, "{}", line.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::{Buffer, NoColor};

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 1), 100);
        assert_eq!(progress_percent(0, 3), 33);
        assert_eq!(progress_percent(1, 3), 67);
        assert_eq!(progress_percent(0, 0), 100);
    }

    #[test]
    fn test_line_display() {
        assert_eq!(
            ProgressLine::block(0, 2, "dummy").to_string(),
            "[50%] Parsing block with id: dummy"
        );
        assert_eq!(
            ProgressLine::file(0, 4, "IDummyFile").to_string(),
            "[25%] Parsing file: IDummyFile"
        );
        let warning = Diagnostic::warning("no interface found").in_file("IEmpty.ts");
        assert_eq!(
            ProgressLine::Diagnostic(warning).to_string(),
            "[Warning] IEmpty.ts: no interface found"
        );
    }

    #[test]
    fn test_write_plain() {
        let mut out = NoColor::new(Vec::new());
        write_colored(&mut out, &ProgressLine::block(1, 2, "heroBanner")).unwrap();
        write_colored(&mut out, &ProgressLine::Writing).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(
            text,
            "[100%] Parsing block with id: heroBanner\n\
             [Info] All blocks have been parsed, writing to file..\n"
        );
    }

    #[test]
    fn test_write_colored_adds_escapes() {
        let mut out = Buffer::ansi();
        write_colored(&mut out, &ProgressLine::file(0, 1, "IPage")).unwrap();

        let text = String::from_utf8(out.into_inner()).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("[100%]"));
        assert!(text.ends_with(" Parsing file: IPage\n"));
    }
}
