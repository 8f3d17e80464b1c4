//! Signal and feature-table file I/O

use crate::LoadError;
use feature_engine::FeatureRow;
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Load a signal: one value per line, commas also separate values, `#` starts a comment line
pub fn load_signal(path: &Path) -> Result<Vec<f64>, LoadError> {
    let file = fs::File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let signal = parse_signal(BufReader::new(file), path)?;
    debug!("Loaded {} samples from {}", signal.len(), path.display());
    Ok(signal)
}

/// Parse signal text from any reader; `path` is used for error context only
pub fn parse_signal<R: BufRead>(reader: R, path: &Path) -> Result<Vec<f64>, LoadError> {
    let mut signal = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        for field in trimmed.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            let value = field.parse::<f64>().map_err(|_| LoadError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                value: field.to_string(),
            })?;
            signal.push(value);
        }
    }

    Ok(signal)
}

/// Write the feature table as CSV.
///
/// Nothing is written for an empty table; returns whether a file was produced.
pub fn save_features(path: &Path, rows: &[FeatureRow]) -> io::Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }

    create_parent_dir(path)?;
    let mut writer = BufWriter::new(fs::File::create(path)?);

    writeln!(writer, "{}", FeatureRow::csv_header())?;
    for row in rows {
        writeln!(writer, "{}", row.to_csv_record())?;
    }
    writer.flush()?;

    Ok(true)
}

/// Write a signal with one value per line
pub fn save_signal(path: &Path, samples: &[f64]) -> io::Result<()> {
    create_parent_dir(path)?;
    let mut writer = BufWriter::new(fs::File::create(path)?);
    for sample in samples {
        writeln!(writer, "{}", sample)?;
    }
    writer.flush()
}

fn create_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<f64>, LoadError> {
        parse_signal(Cursor::new(text), Path::new("test.csv"))
    }

    #[test]
    fn test_one_value_per_line() {
        assert_eq!(parse("1.5\n-2\n3e2\n").unwrap(), vec![1.5, -2.0, 300.0]);
    }

    #[test]
    fn test_comma_delimited_and_blank_lines() {
        assert_eq!(
            parse("# header\n1,2\n\n 3 , 4,\n").unwrap(),
            vec![1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn test_empty_input_is_empty_signal() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_value_reports_line() {
        match parse("1.0\nabc\n") {
            Err(LoadError::Parse { line, value, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_signal(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }

    #[test]
    fn test_signal_file_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/signal.csv");
        let samples = vec![0.25, -1.0, 3.125];

        save_signal(&path, &samples).unwrap();
        assert_eq!(load_signal(&path).unwrap(), samples);
    }

    #[test]
    fn test_empty_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.csv");
        assert!(!save_features(&path, &[]).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_features_written_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/features.csv");
        let row = FeatureRow {
            chunk_index: 0,
            chunk_size: 4,
            rms: 2.5,
            zero_crossings: 1,
            peak_to_peak: 3.0,
            mad: 1.0,
            moving_avg_last: Some(3.0),
            moving_med_last: Some(3.0),
        };

        assert!(save_features(&path, &[row]).unwrap());
        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(FeatureRow::csv_header().as_str()));
        assert_eq!(lines.next(), Some("0,4,2.5,1,3,1,3,3"));
        assert_eq!(lines.next(), None);
    }
}
