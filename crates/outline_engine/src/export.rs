use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use outline_core::Snapshot;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Title used when the document offers none.
pub const FALLBACK_TITLE: &str = "Chat-Export";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no entries to export")]
    NoEntries,
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub entry_count: usize,
    pub output_path: PathBuf,
}

/// Renders the outline as a markdown document: title header, export date and
/// entry count, a rule, then one numbered heading per entry.
pub fn build_transcript_markdown(
    title: &str,
    exported_on: &str,
    snapshot: &Snapshot,
) -> Result<String, ExportError> {
    if snapshot.is_empty() {
        return Err(ExportError::NoEntries);
    }
    let title = effective_title(title);
    let mut buffer = format!(
        "# {title}\n\n**Exported**: {exported_on}\n**Entries**: {count}\n\n---\n\n",
        count = snapshot.len(),
    );
    for (index, entry) in snapshot.entries().iter().enumerate() {
        buffer.push_str(&format!("### {}. {}\n\n", index + 1, entry.text));
    }
    Ok(buffer)
}

/// Windows-safe, deterministic filename: `{sanitized_title}--{short_hash}.md`
pub fn export_filename(title: &str) -> String {
    let title = effective_title(title);
    let sanitized = sanitize_title(title);
    let hash = short_hash(title);
    format!("{sanitized}--{hash}.md")
}

/// Builds the markdown document and writes it atomically under `output_dir`.
pub fn save_transcript_export(
    output_dir: &Path,
    title: &str,
    exported_on: &str,
    snapshot: &Snapshot,
) -> Result<ExportSummary, ExportError> {
    let markdown = build_transcript_markdown(title, exported_on, snapshot)?;
    let output_path = write_atomic(output_dir, &export_filename(title), &markdown)?;
    Ok(ExportSummary {
        entry_count: snapshot.len(),
        output_path,
    })
}

/// Ensure `dir` exists, then write via a temp file and rename so readers
/// never observe a partial file.
pub(crate) fn write_atomic(
    dir: &Path,
    filename: &str,
    content: &str,
) -> Result<PathBuf, ExportError> {
    ensure_output_dir(dir)?;

    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace an existing file to keep saves deterministic.
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|e| ExportError::Io(e.error))?;
    Ok(target)
}

fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

fn effective_title(title: &str) -> &str {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        FALLBACK_TITLE
    } else {
        trimmed
    }
}

fn sanitize_title(input: &str) -> String {
    let mut cleaned = String::with_capacity(input.len());
    let mut prev_underscore = false;
    for c in input.chars() {
        let mapped = if is_forbidden(c) { '_' } else { c };
        if mapped == '_' {
            // Collapse runs of underscores as they appear.
            if !prev_underscore {
                cleaned.push('_');
            }
            prev_underscore = true;
        } else {
            cleaned.push(mapped);
            prev_underscore = false;
        }
    }
    let mut cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]).to_string();
    if cleaned.is_empty() {
        cleaned = FALLBACK_TITLE.to_string();
    }
    if cleaned.len() > 80 {
        let mut cut = 80;
        while cut > 0 && !cleaned.is_char_boundary(cut) {
            cut -= 1;
        }
        cleaned.truncate(cut);
    }
    if is_reserved_windows_name(&cleaned) {
        cleaned.push('_');
    }
    cleaned
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
