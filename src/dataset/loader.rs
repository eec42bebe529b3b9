//! Delimited corpus reader.
//!
//! The default layout is the SMS Spam Collection: one message per line,
//! `label<TAB>text`, no header, no quoting.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};

use crate::config::DatasetConfig;
use crate::error::{HamspamError, Result};
use crate::ml::naive_bayes::{Label, Message};

/// Read a labeled corpus from a file.
pub fn load_messages<P: AsRef<Path>>(path: P, config: &DatasetConfig) -> Result<Vec<Message>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let messages = read_messages(BufReader::new(file), config)?;
    debug!("loaded {} messages from {}", messages.len(), path.display());
    Ok(messages)
}

/// Read a labeled corpus from any reader.
///
/// Rows with too few columns are skipped with a warning. When the text is
/// the last configured column, surplus fields are joined back into it with
/// the delimiter. A label other than `spam` or `ham` (case-insensitive) is a
/// dataset error naming the row.
pub fn read_messages<R: Read>(reader: R, config: &DatasetConfig) -> Result<Vec<Message>> {
    if !config.delimiter.is_ascii() {
        return Err(HamspamError::configuration(format!(
            "delimiter must be a single ASCII character, got {:?}",
            config.delimiter
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter as u8)
        .has_headers(config.has_headers)
        .quoting(config.quoting)
        .flexible(true)
        .from_reader(reader);

    let required = config.label_column.max(config.text_column) + 1;
    let mut messages = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(idx as u64 + 1);

        let (Some(label), Some(text)) = (
            record.get(config.label_column),
            record.get(config.text_column),
        ) else {
            warn!(
                "skipping row {row}: expected at least {required} columns, found {}",
                record.len()
            );
            continue;
        };

        let label: Label = label.parse().map_err(|_| {
            HamspamError::dataset(format!("row {row}: unknown label '{}'", label.trim()))
        })?;

        let text = if record.len() <= required {
            text.to_string()
        } else if config.text_column > config.label_column {
            debug!(
                "row {row}: joining {} trailing fields into the message text",
                record.len() - config.text_column
            );
            rejoin_fields(&record, config.text_column, config.delimiter)
        } else {
            warn!(
                "row {row}: ignoring {} fields past column {}",
                record.len() - required,
                required - 1
            );
            text.to_string()
        };
        messages.push(Message::labeled(text, label));
    }

    Ok(messages)
}

/// Join the fields from `start` on back into one string.
///
/// The text column is the last configured one, so a delimiter inside the
/// message split it across fields.
fn rejoin_fields(record: &csv::StringRecord, start: usize, delimiter: char) -> String {
    let mut buf = [0_u8; 4];
    let separator: &str = delimiter.encode_utf8(&mut buf);
    record.iter().skip(start).collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_read_tab_separated() {
        let data = "ham\tGo until jurong point, crazy..\n\
                    spam\tFree entry in 2 a wkly comp to win FA Cup final tkts\n\
                    ham\tU dun say so early hor... U c already then say...\n";

        let messages = read_messages(data.as_bytes(), &DatasetConfig::default()).unwrap();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].label, Some(Label::Ham));
        assert_eq!(messages[1].label, Some(Label::Spam));
        assert_eq!(messages[0].text, "Go until jurong point, crazy..");
    }

    #[test]
    fn test_stray_quotes_are_literal() {
        let data = "ham\t\"Hello\" he said, \"see you\"\n";

        let messages = read_messages(data.as_bytes(), &DatasetConfig::default()).unwrap();

        assert_eq!(messages[0].text, "\"Hello\" he said, \"see you\"");
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let data = "ham\tok lar\nspam\n\nham\tsee you\n";

        let messages = read_messages(data.as_bytes(), &DatasetConfig::default()).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].text, "see you");
    }

    #[test]
    fn test_delimiter_inside_text_is_kept() {
        let data = "ham\tsee you\tlater\nspam\tWIN\t\tcash now\nham\tok\n";

        let messages = read_messages(data.as_bytes(), &DatasetConfig::default()).unwrap();

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].text, "see you\tlater");
        assert_eq!(messages[1].text, "WIN\t\tcash now");
        assert_eq!(messages[1].label, Some(Label::Spam));
        assert_eq!(messages[2].text, "ok");
    }

    #[test]
    fn test_extra_fields_after_text_are_dropped() {
        let config = DatasetConfig {
            delimiter: ',',
            has_headers: false,
            quoting: true,
            label_column: 1,
            text_column: 0,
        };
        let data = "\"Win cash, now\",spam,extra\n";

        let messages = read_messages(data.as_bytes(), &config).unwrap();

        assert_eq!(messages[0].text, "Win cash, now");
        assert_eq!(messages[0].label, Some(Label::Spam));
    }

    #[test]
    fn test_unknown_label_names_row() {
        let data = "ham\tok\nmaybe\thello\n";

        let err = read_messages(data.as_bytes(), &DatasetConfig::default()).unwrap_err();

        assert!(matches!(err, HamspamError::Dataset(_)));
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_custom_layout_with_headers() {
        let config = DatasetConfig {
            delimiter: ',',
            has_headers: true,
            quoting: true,
            label_column: 1,
            text_column: 0,
        };
        let data = "text,label\n\"Win cash, now\",SPAM\nhi there,ham\n";

        let messages = read_messages(data.as_bytes(), &config).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "Win cash, now");
        assert_eq!(messages[0].label, Some(Label::Spam));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "spam\tWINNER!! Claim your prize").unwrap();
        writeln!(file, "ham\tI'll be home soon").unwrap();

        let messages = load_messages(file.path(), &DatasetConfig::default()).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].text, "I'll be home soon");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_messages(dir.path().join("absent.tsv"), &DatasetConfig::default())
            .unwrap_err();

        assert!(matches!(err, HamspamError::Io(_)));
    }
}
