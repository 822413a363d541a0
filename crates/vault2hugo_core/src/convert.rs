//! The conversion orchestrator.
//!
//! Sequences the pipeline for one note: create the bundle directory,
//! synthesize front matter on the raw body, rewrite wiki links, write
//! `index.md`, then copy referenced images. Synchronous and single-shot;
//! there is no rollback — a failed image copy leaves an already-written
//! `index.md` behind.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::assets;
use crate::error::{ConvertError, Result};
use crate::frontmatter;
use crate::links;

/// Everything needed to convert one note. Constructed per invocation,
/// consumed immediately, not persisted.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Raw note text as read from the vault.
    pub note_body: String,
    /// Note title (filename without the `.md` extension).
    pub title: String,
    /// Bundle directory to create and write into. Creation is idempotent:
    /// an existing directory is silently reused, and a second conversion
    /// into the same name overwrites `index.md` and images without warning.
    pub output_dir: PathBuf,
    /// Directory image references resolve against
    /// (`<vault>/<image_directory>`).
    pub image_source_dir: PathBuf,
}

/// Summary of a completed conversion.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// The bundle directory that was written.
    pub output_dir: PathBuf,
    /// Number of images copied into the bundle.
    pub images_copied: usize,
}

/// Read a note's raw text from the vault.
pub fn read_note(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ConvertError::NoteRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert one note into a Hugo page bundle.
///
/// Asset discovery runs on the raw body, not the rewritten text: both passes
/// derive from the same source snapshot, so they agree by construction.
pub fn convert(request: &ConversionRequest) -> Result<ConversionReport> {
    std::fs::create_dir_all(&request.output_dir).map_err(|source| ConvertError::CreateDir {
        path: request.output_dir.clone(),
        source,
    })?;

    let with_front_matter = frontmatter::synthesize(&request.note_body, &request.title, Utc::now());
    let converted = links::rewrite_wiki_links(&with_front_matter);

    let index_path = request.output_dir.join("index.md");
    std::fs::write(&index_path, &converted).map_err(|source| ConvertError::FileWrite {
        path: index_path.clone(),
        source,
    })?;
    log::debug!("wrote {}", index_path.display());

    let images_copied = assets::copy_images(
        &request.note_body,
        &request.image_source_dir,
        &request.output_dir,
    )?;

    Ok(ConversionReport {
        output_dir: request.output_dir.clone(),
        images_copied,
    })
}
