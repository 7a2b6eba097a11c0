//! CSV export of mood entries.
//!
//! Columns are `id,mood,note,timestamp` with the timestamp in epoch
//! milliseconds. Notes are quoted only when they contain a delimiter, quote
//! or line break; embedded quotes are doubled.

use std::io::Write;
use std::path::Path;

use crate::entry::MoodEntry;
use crate::error::Result;

pub const CSV_HEADER: [&str; 4] = ["id", "mood", "note", "timestamp"];

/// Write `entries` as CSV, in the order given.
///
/// # Errors
/// Returns an error if writing to `writer` fails.
pub fn write_csv<W: Write>(entries: &[MoodEntry], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for entry in entries {
        wtr.write_record([
            entry.id.to_string(),
            entry.mood.to_string(),
            entry.note.clone(),
            entry.timestamp.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `entries` as CSV to `path`, replacing any existing file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn export_to_file(entries: &[MoodEntry], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(entries, std::io::BufWriter::new(file))?;
    tracing::info!(path = %path.display(), rows = entries.len(), "exported mood entries");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Mood;

    fn entry(id: i64, mood: i64, note: &str, timestamp: i64) -> MoodEntry {
        MoodEntry {
            id,
            mood: Mood::new(mood).unwrap(),
            note: note.to_string(),
            timestamp,
        }
    }

    fn render(entries: &[MoodEntry]) -> String {
        let mut buf = Vec::new();
        write_csv(entries, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_only_when_empty() {
        assert_eq!(render(&[]), "id,mood,note,timestamp\n");
    }

    #[test]
    fn rows_keep_given_order() {
        let out = render(&[entry(2, 4, "good day", 2000), entry(1, 2, "", 1000)]);
        assert_eq!(
            out,
            "id,mood,note,timestamp\n2,4,good day,2000\n1,2,,1000\n"
        );
    }

    #[test]
    fn notes_with_special_characters_are_quoted() {
        let out = render(&[
            entry(1, 3, "tired, but ok", 1),
            entry(2, 3, "she said \"hi\"", 2),
            entry(3, 3, "line\nbreak", 3),
        ]);
        let lines: Vec<_> = out.splitn(2, '\n').collect();
        assert_eq!(
            lines[1],
            "1,3,\"tired, but ok\",1\n2,3,\"she said \"\"hi\"\"\",2\n3,3,\"line\nbreak\",3\n"
        );
    }

    #[test]
    fn export_to_file_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        export_to_file(&[entry(7, 5, "yay", 42)], &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "id,mood,note,timestamp\n7,5,yay,42\n");
    }
}
