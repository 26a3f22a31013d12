//! Document loading for the preview.
//!
//! Opens an EPUB (or a plain `.txt` file), strips chapter markup and returns
//! the text as one string. Page splitting happens in `pagination`.

use anyhow::{Context, Result, anyhow};
use epub::doc::EpubDoc;
use preview_core::CancellationToken;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load the text of a document, checking `cancel` between chapters.
pub fn load_document_text(path: &Path, cancel: &CancellationToken) -> Result<String> {
    cancel.check_cancelled("open")?;
    match extension(path).as_deref() {
        Some("txt") => load_plain_text(path),
        Some("epub") => load_epub_text(path, cancel),
        other => Err(anyhow!(
            "Unsupported document type {:?} for {}",
            other.unwrap_or(""),
            path.display()
        )),
    }
}

fn load_plain_text(path: &Path) -> Result<String> {
    info!(path = %path.display(), "Loading plain text content");
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    info!(total_chars = text.len(), "Finished loading plain text content");
    Ok(text)
}

fn load_epub_text(path: &Path, cancel: &CancellationToken) -> Result<String> {
    info!(path = %path.display(), "Loading EPUB content");
    let mut doc =
        EpubDoc::new(path).with_context(|| format!("Failed to open EPUB at {}", path.display()))?;

    let mut combined = String::new();
    let mut chapters = 0usize;

    loop {
        cancel.check_cancelled("chapter")?;
        if let Some((chapter, _mime)) = doc.get_current_str() {
            chapters += 1;
            if !combined.is_empty() {
                combined.push_str("\n\n");
            }
            // Wide wrap width so pages reflow in the UI instead of on disk.
            let plain = match html2text::from_read(chapter.as_bytes(), 10_000) {
                Ok(clean) => clean,
                Err(err) => {
                    warn!(chapter = chapters, "html2text failed: {err}");
                    chapter
                }
            };
            debug!(
                chapter = chapters,
                added_chars = plain.len(),
                "Parsed chapter"
            );
            combined.push_str(&plain);
        }

        if !doc.go_next() {
            break;
        }
    }

    info!(
        chapters,
        total_chars = combined.len(),
        "Finished loading EPUB content"
    );
    Ok(combined)
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_file(name: &str, extension: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir().join(format!("book-preview-{name}-{nanos}.{extension}"))
    }

    #[test]
    fn loads_plain_text_files() {
        let path = unique_temp_file("plain", "txt");
        fs::write(&path, "First paragraph.\n\nSecond paragraph.").expect("write fixture");
        let text = load_document_text(&path, &CancellationToken::for_generation(1)).expect("load text");
        let _ = fs::remove_file(&path);
        assert!(text.contains("Second paragraph."));
    }

    #[test]
    fn rejects_unknown_extensions() {
        let err = load_document_text(Path::new("book.pdf"), &CancellationToken::for_generation(1))
            .expect_err("pdf is unsupported");
        assert!(err.to_string().contains("Unsupported document type"));
    }

    #[test]
    fn cancelled_token_stops_before_reading() {
        let cancel = CancellationToken::for_generation(1);
        cancel.cancel();
        let err = load_document_text(Path::new("missing.txt"), &cancel)
            .expect_err("cancelled load fails");
        assert!(err.to_string().contains("stage=open"));
    }
}
