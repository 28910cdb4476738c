//! Tests for text reader

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_read_inline_text() {
    let text = TextReader::read(&TextSource::Inline("cat hat bat".into())).unwrap();

    assert_eq!(text, "cat hat bat");
}

#[test]
fn test_read_text_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "line one\nline two\n").unwrap();

    let text = TextReader::read(&TextSource::File(file.path().to_path_buf())).unwrap();

    assert_eq!(text, "line one\nline two\n");
}

#[test]
fn test_read_missing_file_names_the_file() {
    let path = PathBuf::from("/nonexistent/sample.txt");

    let err = TextReader::read(&TextSource::File(path)).unwrap_err();

    assert!(matches!(err, LensError::FileRead { .. }));
    assert_eq!(err.to_string(), "Failed to read file: /nonexistent/sample.txt");
}

#[test]
fn test_read_non_utf8_file_fails() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

    let result = TextReader::read(&TextSource::File(file.path().to_path_buf()));

    assert!(result.is_err());
}
