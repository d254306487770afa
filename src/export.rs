use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::record::{Record, FIELD_NAMES};

pub const DELIMITER: char = ',';

/// Write the header plus one row per record, replacing any existing file.
/// Returns the number of data rows written.
pub fn write_records(path: &Path, records: &[Record]) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let write_all = |w: &mut BufWriter<File>| -> io::Result<()> {
        write_row(w, &FIELD_NAMES, DELIMITER)?;
        for r in records {
            write_row(w, &r.to_row(), DELIMITER)?;
        }
        w.flush()
    };
    write_all(&mut w).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(records.len())
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// One delimited row. Cells are quoted only when they have to be.
pub fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{}", sep)?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(text: &str, author: &str, tags: &[&str]) -> Record {
        Record {
            primary_text: text.to_string(),
            attribution: author.to_string(),
            categories: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn row_string(row: &[&str]) -> String {
        let mut buf = Vec::new();
        write_row(&mut buf, row, DELIMITER).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_cells_are_not_quoted() {
        assert_eq!(row_string(&["a", "b", "[]"]), "a,b,[]\n");
    }

    #[test]
    fn delimiter_and_quotes_are_escaped() {
        assert_eq!(
            row_string(&["one, two", "say \"hi\"", "['a', 'b']"]),
            "\"one, two\",\"say \"\"hi\"\"\",\"['a', 'b']\"\n"
        );
        assert_eq!(row_string(&["line\nbreak"]), "\"line\nbreak\"\n");
    }

    #[test]
    fn m_records_give_m_plus_one_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        let records = vec![
            rec("“first”", "A", &["x", "y"]),
            rec("second", "B", &[]),
            rec("third", "C", &["z"]),
        ];

        let n = write_records(&path, &records).unwrap();
        assert_eq!(n, 3);

        let out = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "primary_text,attribution,categories");
        assert_eq!(lines[1], "“first”,A,\"['x', 'y']\"");
        assert_eq!(lines[2], "second,B,[]");
        assert_eq!(lines[3], "third,C,['z']");
    }

    #[test]
    fn no_records_is_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_records(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "primary_text,attribution,categories\n");
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        std::fs::write(&path, "stale\nstale\nstale\nstale\nstale\n").unwrap();

        write_records(&path, &[rec("t", "a", &[])]).unwrap();
        let out = std::fs::read_to_string(&path).unwrap();
        assert_eq!(out, "primary_text,attribution,categories\nt,a,[]\n");
    }

    #[test]
    fn unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("quotes.csv");
        let err = write_records(&path, &[]).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create"));
    }
}
