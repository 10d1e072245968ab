//! Console rendering of lookup results.
//!
//! Every record becomes a small grid table: one header row with the field
//! names and one data row with the values, all cells centred.

use std::io::{self, IsTerminal, Write};

use clap::ValueEnum;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::arch::Arch;
use crate::error::{LookupError, ResolveError};
use crate::record::{Record, RecordSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Colour when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Formatting context for the presenter.
///
/// Decided once at startup and handed to the [`Presenter`]; nothing else
/// consults the environment about colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
            }
        };
        Palette { enabled }
    }

    pub fn plain() -> Self {
        Palette { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    fn title(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn column(&self, text: &str) -> String {
        if self.enabled {
            text.bright_cyan().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.enabled {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

pub struct Presenter<W: Write> {
    out: W,
    palette: Palette,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, palette: Palette) -> Self {
        Presenter { out, palette }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the calling convention table for `arch`.
    pub fn convention(&mut self, arch: Arch, set: &RecordSet) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.palette.title(&format!("Calling Convention for {arch}:"))
        )?;
        writeln!(self.out)?;
        for record in set.records() {
            self.table(record)?;
        }
        Ok(())
    }

    /// Print one table per syscall record, under a single header line.
    pub fn syscall(&mut self, name: &str, set: &RecordSet) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.palette.title(&format!("Syscall details for {name}:"))
        )?;
        for record in set.records() {
            self.table(record)?;
        }
        Ok(())
    }

    pub fn lookup_error(&mut self, err: &LookupError) -> io::Result<()> {
        self.error_line(&err.to_string())
    }

    pub fn resolve_error(&mut self, err: &ResolveError) -> io::Result<()> {
        self.error_line(&err.to_string())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn error_line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", self.palette.error(message))
    }

    fn table(&mut self, record: &Record) -> io::Result<()> {
        if record.is_empty() {
            return Ok(());
        }
        for line in grid(record, &self.palette) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

/// Lay out `record` as grid lines.
///
/// Widths are measured on the plain text in terminal columns, so colour codes
/// and wide characters never skew the alignment. Values containing newlines
/// span several physical rows.
pub fn grid(record: &Record, palette: &Palette) -> Vec<String> {
    let columns = record.columns();
    let cells = record.cells();

    let header: Vec<Vec<&str>> = columns.iter().map(|c| cell_lines(c)).collect();
    let values: Vec<Vec<&str>> = cells.iter().map(|v| cell_lines(v)).collect();

    let widths: Vec<usize> = header
        .iter()
        .zip(values.iter())
        .map(|(h, v)| h.iter().chain(v.iter()).map(|l| l.width()).max().unwrap_or(0))
        .collect();

    let mut lines = vec![border(&widths, '-')];
    lines.extend(rows(&header, &widths, |text| palette.column(text)));
    lines.push(border(&widths, '='));
    lines.extend(rows(&values, &widths, str::to_string));
    lines.push(border(&widths, '-'));
    lines
}

fn cell_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        vec![""]
    } else {
        lines
    }
}

/// One logical row, as many physical lines as its tallest cell needs.
fn rows<F>(cells: &[Vec<&str>], widths: &[usize], paint: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let height = cells.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|i| {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(lines, &w)| {
                    let text = lines.get(i).copied().unwrap_or("");
                    center(&paint(text), text.width(), w)
                })
                .collect();
            row(&padded)
        })
        .collect()
}

/// Centre `text` (whose visible width is `len`) in a cell of `width`.
/// Odd leftover space goes to the right.
fn center(text: &str, len: usize, width: usize) -> String {
    let pad = width.saturating_sub(len);
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

fn border(widths: &[usize], fill: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("+{}+", segments.join("+"))
}

fn row(cells: &[String]) -> String {
    let padded: Vec<String> = cells.iter().map(|c| format!(" {c} ")).collect();
    format!("|{}|", padded.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(value: serde_json::Value) -> RecordSet {
        RecordSet::from_json(value).unwrap()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Presenter<Vec<u8>>) -> io::Result<()>,
    {
        let mut presenter = Presenter::new(Vec::new(), Palette::plain());
        f(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_grid_layout() {
        let records = set(json!({"nr": 59, "name": "execve"}));
        let lines = grid(&records.records()[0], &Palette::plain());
        assert_eq!(
            lines,
            vec![
                "+----+--------+",
                "| nr |  name  |",
                "+====+========+",
                "| 59 | execve |",
                "+----+--------+",
            ]
        );
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let records = set(json!({"name": "読み込み", "nr": 0}));
        let lines = grid(&records.records()[0], &Palette::plain());
        assert_eq!(lines[0], "+----------+----+");
        assert_eq!(lines[1], "|   name   | nr |");
        assert_eq!(lines[3], "| 読み込み | 0  |");
    }

    #[test]
    fn test_multiline_value_spans_rows() {
        let records = set(json!({"arch": "x64", "notes": "first\nsecond line"}));
        let lines = grid(&records.records()[0], &Palette::plain());
        assert_eq!(
            lines,
            vec![
                "+------+-------------+",
                "| arch |    notes    |",
                "+======+=============+",
                "| x64  |    first    |",
                "|      | second line |",
                "+------+-------------+",
            ]
        );
    }

    #[test]
    fn test_center_puts_odd_space_right() {
        assert_eq!(center("ab", 2, 5), " ab  ");
        assert_eq!(center("abc", 3, 3), "abc");
    }

    #[test]
    fn test_null_renders_as_empty_cell() {
        let records = set(json!({"arg5": null}));
        let lines = grid(&records.records()[0], &Palette::plain());
        assert_eq!(lines[3], "|      |");
    }

    #[test]
    fn test_convention_output() {
        let out = render(|p| {
            p.convention(
                Arch::X64,
                &set(json!({"arch": "x64", "nr": "rax", "return": "rax"})),
            )
        });
        assert!(out.starts_with("\nCalling Convention for x64:\n\n"), "{out}");
        assert!(out.contains("| arch | nr  | return |"), "{out}");
        assert!(out.contains("| x64  | rax |  rax   |"), "{out}");
    }

    #[test]
    fn test_syscall_output_one_header_many_tables() {
        let out = render(|p| {
            p.syscall(
                "execve",
                &set(json!([
                    {"arch": "x86", "nr": 11},
                    {"arch": "x64", "nr": 59},
                ])),
            )
        });
        assert_eq!(out.matches("Syscall details for execve:").count(), 1);
        assert_eq!(out.lines().filter(|l| l.starts_with("+=")).count(), 2);
        let x86 = out.find("x86").unwrap();
        let x64 = out.find("x64").unwrap();
        assert!(x86 < x64, "record order not preserved: {out}");
    }

    #[test]
    fn test_empty_record_prints_no_table() {
        let out = render(|p| p.syscall("nothing", &set(json!({}))));
        assert_eq!(out, "\nSyscall details for nothing:\n");
    }

    #[test]
    fn test_error_lines_are_single_lines() {
        let out = render(|p| {
            p.lookup_error(&LookupError::NoMatchingEntry {
                syscall: "fork".to_string(),
                arch: Arch::Arm64,
            })
        });
        assert_eq!(
            out,
            "No syscall entry found for 'fork' on architecture 'arm64'.\n"
        );

        let out = render(|p| p.resolve_error(&ResolveError::MissingArgument));
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Error: "));
    }

    #[test]
    fn test_palette_modes() {
        assert!(Palette::new(ColorMode::Always).enabled());
        assert!(!Palette::new(ColorMode::Never).enabled());
        assert!(!Palette::plain().enabled());
    }
}
