//! Tabular output as aligned text or CSV.

use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Space-aligned columns
    Table,
    /// Comma-separated values with a header row
    Csv,
}

/// Rows of strings under a fixed header.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn write<W: Write>(&self, format: OutputFormat, out: W) -> anyhow::Result<()> {
        match format {
            OutputFormat::Table => self.write_aligned(out),
            OutputFormat::Csv => self.write_csv(out),
        }
    }

    fn write_aligned<W: Write>(&self, mut out: W) -> anyhow::Result<()> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let header: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        writeln!(out, "{}", pad_line(&header, &widths))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(out, "{}", pad_line(&rule, &widths))?;
        for row in &self.rows {
            writeln!(out, "{}", pad_line(row, &widths))?;
        }
        Ok(())
    }

    fn write_csv<W: Write>(&self, out: W) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(out);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

fn pad_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
