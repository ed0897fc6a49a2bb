//! JSONL writer for chunk files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::record::SectionRecord;
use crate::error::Result;
use crate::section::Section;

/// Generate JSONL content for a document's sections.
///
/// One JSON object per line. Sections with no non-whitespace content
/// are skipped at write time so sparse documents do not flood the
/// output with bare headers; the in-memory API never filters.
pub fn generate_jsonl(sections: &[Section], source: Option<&str>) -> Result<String> {
    let mut out = String::new();
    for section in sections {
        if section.content_text().trim().is_empty() {
            continue;
        }
        let record = SectionRecord::from_section(section, source);
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Save a document's sections as a JSONL chunk file.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then
/// renames. This ensures partial writes don't corrupt existing files
/// on crash.
///
/// # Arguments
/// * `sections` - Finalized sections in document order
/// * `source` - Originating document name recorded on each line
/// * `output_file` - Destination path; parent directories are created
///
/// # Returns
/// Path to the saved file
pub fn save_jsonl(
    sections: &[Section],
    source: Option<&str>,
    output_file: &Path,
) -> Result<PathBuf> {
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = output_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "chunks.jsonl".to_string());
    let temp_file = output_file.with_file_name(format!(".{file_name}.tmp"));

    let content = generate_jsonl(sections, source)?;

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    fs::rename(&temp_file, output_file)?;

    Ok(output_file.to_path_buf())
}
