//! CSV export.
//!
//! Serializes uniform record rows into comma-delimited text and writes
//! the artifact atomically (temp file, fsync, rename) so a half-written
//! export never replaces a good one.

use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One record as ordered `(field name, value)` pairs.
///
/// `None` exports as an empty field. All rows passed to [`to_csv`] must
/// share the same field names in the same order.
pub type Row = Vec<(String, Option<String>)>;

/// Serialize rows to CSV text.
///
/// Empty input yields empty text. Otherwise the header line carries the
/// field names of the first row in that row's own order, followed by
/// one line per record. Lines are joined with `\n`, no trailing
/// newline. Output round-trips through any standard CSV reader.
#[must_use]
pub fn to_csv(rows: &[Row]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        rows[0]
            .iter()
            .map(|(name, _)| escape(name))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|(_, value)| escape(value.as_deref().unwrap_or("")))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

/// Escape a single CSV field: wrap in double quotes if it contains a
/// comma, double-quote, or newline, doubling any embedded quotes.
fn escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write export content to a file atomically.
///
/// Writes to a temp file next to the target, syncs to disk, then
/// renames over the target. On failure the original file (if any)
/// remains untouched.
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn write_csv(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("csv.tmp");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        // Sync to disk before rename
        writer.get_ref().sync_all()?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(fields: &[(&str, Option<&str>)]) -> Row {
        fields
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.map(ToString::to_string)))
            .collect()
    }

    /// Minimal standard-CSV reader used to check round-tripping.
    fn parse_csv(text: &str) -> Vec<Vec<String>> {
        let mut records = Vec::new();
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut quoted = false;
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if quoted {
                match c {
                    '"' if chars.peek() == Some(&'"') => {
                        chars.next();
                        field.push('"');
                    }
                    '"' => quoted = false,
                    _ => field.push(c),
                }
            } else {
                match c {
                    '"' => quoted = true,
                    ',' => fields.push(std::mem::take(&mut field)),
                    '\n' => {
                        fields.push(std::mem::take(&mut field));
                        records.push(std::mem::take(&mut fields));
                    }
                    _ => field.push(c),
                }
            }
        }
        if !field.is_empty() || !fields.is_empty() {
            fields.push(field);
            records.push(fields);
        }
        records
    }

    #[test]
    fn test_empty_input_yields_empty_text() {
        assert_eq!(to_csv(&[]), "");
    }

    #[test]
    fn test_header_from_first_row_and_escaping() {
        let rows = vec![row(&[("a", Some("1")), ("b", Some("x,y"))])];
        assert_eq!(to_csv(&rows), "a,b\n1,\"x,y\"");
    }

    #[test]
    fn test_none_exports_as_empty_field() {
        let rows = vec![row(&[("a", Some("1")), ("b", None)])];
        assert_eq!(to_csv(&rows), "a,b\n1,");
    }

    #[test]
    fn test_quotes_are_doubled() {
        let rows = vec![row(&[("quote", Some("say \"hi\""))])];
        assert_eq!(to_csv(&rows), "quote\n\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_roundtrip_with_awkward_values() {
        let values = [
            "plain",
            "comma, inside",
            "\"quoted\"",
            "line\nbreak",
            "all, of \"the\"\nabove",
            "",
        ];
        let rows: Vec<Row> = values
            .iter()
            .map(|v| row(&[("id", Some("r1")), ("note", Some(v))]))
            .collect();

        let parsed = parse_csv(&to_csv(&rows));
        assert_eq!(parsed[0], vec!["id", "note"]);
        for (record, value) in parsed[1..].iter().zip(values) {
            assert_eq!(record[1], value);
        }
    }

    #[test]
    fn test_write_csv_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&path, "a,b\n1,2").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a,b\n1,2");
        assert!(!path.with_extension("csv.tmp").exists());
    }

    #[test]
    fn test_write_csv_overwrites_atomically() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&path, "old").unwrap();
        write_csv(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
