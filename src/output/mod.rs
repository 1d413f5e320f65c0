//! Output formatting for CLI results

use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;
}

/// One-line rendering used by `--format plain`
pub trait PlainLine {
    fn plain_line(&self) -> String;
}

impl<T: Tabled + Serialize + PlainLine> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Plain => Ok(self
                .iter()
                .map(PlainLine::plain_line)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}

/// Render rows as a rounded table with a centered header
fn format_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Format and print data to stdout
pub fn print<T: Formattable>(data: &T, format: OutputFormat) -> Result<()> {
    let output = data.format(format)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "NAME")]
        name: String,
    }

    impl PlainLine for Row {
        fn plain_line(&self) -> String {
            self.name.clone()
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "dagger".to_string(),
            },
            Row {
                name: "kratu".to_string(),
            },
        ]
    }

    #[test]
    fn test_plain_format() {
        assert_eq!(rows().format(OutputFormat::Plain).unwrap(), "dagger\nkratu");
    }

    #[test]
    fn test_table_format() {
        let output = rows().format(OutputFormat::Table).unwrap();
        assert!(output.contains("NAME"));
        assert!(output.contains("dagger"));
    }

    #[test]
    fn test_json_format() {
        let output = rows().format(OutputFormat::Json).unwrap();
        assert!(output.contains("\"name\": \"kratu\""));
    }

    #[test]
    fn test_empty_table_format() {
        let empty: Vec<Row> = vec![];
        assert_eq!(empty.format(OutputFormat::Table).unwrap(), "No results found.");
    }

    #[test]
    fn test_empty_plain_format() {
        let empty: Vec<Row> = vec![];
        assert_eq!(empty.format(OutputFormat::Plain).unwrap(), "");
    }
}
