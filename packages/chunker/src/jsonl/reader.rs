//! Streaming batched reader for JSONL chunk files.
//!
//! Downstream consumers (embedding generation, query synthesis) read
//! chunk files in fixed-size batches without loading the whole file.
//! Lenient mode logs and skips corrupt lines; strict mode fails fast.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
#[cfg_attr(not(test), allow(unused_imports))]
use std::path::{Path, PathBuf};

use super::record::SectionRecord;
use crate::error::{ChunkerError, Result};

/// Iterator over batches of [`SectionRecord`]s from a JSONL file.
#[derive(Debug)]
pub struct BatchReader {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    batch_size: usize,
    strict: bool,
    start_line: Option<usize>,
    end_line: Option<usize>,
    line_number: usize,
    done: bool,
}

impl BatchReader {
    /// Open a JSONL file for batched reading in lenient mode.
    ///
    /// # Errors
    /// Fails if `batch_size` is zero or the file cannot be opened.
    pub fn open(path: impl Into<PathBuf>, batch_size: usize) -> Result<Self> {
        let path = path.into();
        if batch_size < 1 {
            return Err(ChunkerError::InvalidBatchSize(batch_size));
        }
        if !path.exists() {
            return Err(ChunkerError::FileNotFound(path));
        }
        let file = File::open(&path)?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            path,
            batch_size,
            strict: false,
            start_line: None,
            end_line: None,
            line_number: 0,
            done: false,
        })
    }

    /// Fail on the first unparsable line instead of skipping it.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Restrict reading to a 1-indexed inclusive line range.
    ///
    /// Useful for distributing one large file across workers.
    ///
    /// # Errors
    /// Fails if either bound is zero or `start` exceeds `end`.
    pub fn with_line_range(mut self, start: Option<usize>, end: Option<usize>) -> Result<Self> {
        for bound in [start, end].into_iter().flatten() {
            if bound < 1 {
                return Err(ChunkerError::InvalidLineRange {
                    start: start.unwrap_or(1),
                    end: end.unwrap_or(usize::MAX),
                });
            }
        }
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                return Err(ChunkerError::InvalidLineRange { start, end });
            }
        }
        self.start_line = start;
        self.end_line = end;
        Ok(self)
    }
}

impl Iterator for BatchReader {
    type Item = Result<Vec<SectionRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut batch = Vec::with_capacity(self.batch_size);

        loop {
            let Some(line) = self.lines.next() else {
                self.done = true;
                break;
            };
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };
            self.line_number += 1;

            if self.start_line.is_some_and(|start| self.line_number < start) {
                continue;
            }
            if self.end_line.is_some_and(|end| self.line_number > end) {
                self.done = true;
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match serde_json::from_str::<SectionRecord>(trimmed) {
                Ok(record) => {
                    batch.push(record);
                    if batch.len() >= self.batch_size {
                        return Some(Ok(batch));
                    }
                }
                Err(e) => {
                    if self.strict {
                        self.done = true;
                        return Some(Err(ChunkerError::JsonLine {
                            line: self.line_number,
                            path: self.path.clone(),
                            source: e,
                        }));
                    }
                    tracing::error!(
                        line = self.line_number,
                        path = %self.path.display(),
                        error = %e,
                        "Skipping unparsable JSONL line"
                    );
                }
            }
        }

        if batch.is_empty() {
            None
        } else {
            Some(Ok(batch))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;
    use crate::jsonl::writer::save_jsonl;
    use crate::splitting::MarkdownSplitter;

    fn write_fixture(dir: &Path, text: &str) -> PathBuf {
        let output = MarkdownSplitter::new().split(text);
        let path = dir.join("chunks.jsonl");
        save_jsonl(&output.sections, Some("doc.md"), &path).expect("saves");
        path
    }

    #[test]
    fn test_reads_in_batches() {
        let dir = tempdir().expect("tempdir");
        let path = write_fixture(dir.path(), "# A\na\n# B\nb\n# C\nc\n# D\nd\n# E\ne\n");

        let batches: Vec<_> = BatchReader::open(&path, 2)
            .expect("opens")
            .collect::<Result<Vec<_>>>()
            .expect("reads");

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[1].len(), 2);
        // Final partial batch
        assert_eq!(batches[2].len(), 1);
        assert_eq!(batches[2][0].header, "E");
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = write_fixture(dir.path(), "# A\na\n");
        let err = BatchReader::open(&path, 0).expect_err("must reject");
        assert!(matches!(err, ChunkerError::InvalidBatchSize(0)));
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = BatchReader::open("no/such/file.jsonl", 2).expect_err("must reject");
        assert!(matches!(err, ChunkerError::FileNotFound(_)));
    }

    #[test]
    fn test_lenient_skips_corrupt_lines() {
        let dir = tempdir().expect("tempdir");
        let path = write_fixture(dir.path(), "# A\na\n# B\nb\n");

        // Corrupt the file with a broken line in the middle
        let original = std::fs::read_to_string(&path).expect("readable");
        let mut lines: Vec<&str> = original.lines().collect();
        lines.insert(1, "{not json");
        std::fs::write(&path, lines.join("\n")).expect("writable");

        let batches: Vec<_> = BatchReader::open(&path, 10)
            .expect("opens")
            .collect::<Result<Vec<_>>>()
            .expect("lenient read succeeds");

        assert_eq!(batches.len(), 1);
        let headers: Vec<&str> = batches[0].iter().map(|r| r.header.as_str()).collect();
        assert_eq!(headers, ["A", "B"]);
    }

    #[test]
    fn test_strict_fails_on_corrupt_line() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("bad.jsonl");
        let mut file = File::create(&path).expect("creatable");
        writeln!(file, "{{not json").expect("writable");

        let result: Result<Vec<_>> = BatchReader::open(&path, 2)
            .expect("opens")
            .strict()
            .collect();
        let err = result.expect_err("strict read fails");
        assert!(matches!(err, ChunkerError::JsonLine { line: 1, .. }));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = tempdir().expect("tempdir");
        let path = write_fixture(dir.path(), "# A\na\n");

        let original = std::fs::read_to_string(&path).expect("readable");
        std::fs::write(&path, format!("\n\n{original}\n\n")).expect("writable");

        let batches: Vec<_> = BatchReader::open(&path, 5)
            .expect("opens")
            .collect::<Result<Vec<_>>>()
            .expect("reads");
        assert_eq!(batches[0].len(), 1);
    }

    #[test]
    fn test_line_range() {
        let dir = tempdir().expect("tempdir");
        let path = write_fixture(dir.path(), "# A\na\n# B\nb\n# C\nc\n# D\nd\n");

        let batches: Vec<_> = BatchReader::open(&path, 10)
            .expect("opens")
            .with_line_range(Some(2), Some(3))
            .expect("valid range")
            .collect::<Result<Vec<_>>>()
            .expect("reads");

        let headers: Vec<&str> = batches[0].iter().map(|r| r.header.as_str()).collect();
        assert_eq!(headers, ["B", "C"]);
    }

    #[test]
    fn test_invalid_line_range_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = write_fixture(dir.path(), "# A\na\n");

        let err = BatchReader::open(&path, 2)
            .expect("opens")
            .with_line_range(Some(5), Some(2))
            .expect_err("must reject");
        assert!(matches!(
            err,
            ChunkerError::InvalidLineRange { start: 5, end: 2 }
        ));
    }

    #[test]
    fn test_empty_file_yields_no_batches() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("empty.jsonl");
        File::create(&path).expect("creatable");

        let batches: Vec<_> = BatchReader::open(&path, 2).expect("opens").collect();
        assert!(batches.is_empty());
    }
}
