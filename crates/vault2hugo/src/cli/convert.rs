//! CLI handler for the `convert` command.
//!
//! Owns all user interaction (prompt, notices); the core crate does the
//! conversion. Any pipeline failure is reported as one generic notice, with
//! the specific error going to the developer log only.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use vault2hugo_core::config::Config;
use vault2hugo_core::sanitize::sanitize_dir_name;
use vault2hugo_core::{convert, read_note, ConversionRequest};

/// Convert one note into a Hugo page bundle.
pub fn handle_convert(
    note: &Path,
    name: Option<String>,
    vault: Option<PathBuf>,
    output_root: Option<PathBuf>,
) {
    let note_body = match read_note(note) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: cannot read note {}", note.display());
            return;
        }
    };

    let title = note_title(note);

    // Prompted after the note is read, before anything touches the
    // filesystem: cancelling here leaves no side effects.
    let dir_name = match name.or_else(prompt_directory_name) {
        Some(n) => n,
        None => {
            eprintln!("Directory name is required.");
            return;
        }
    };

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            log::error!("config load failed: {e}");
            eprintln!("Error during conversion.");
            return;
        }
    };

    let vault_root = vault.unwrap_or_else(|| {
        note.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    });
    let output_root = output_root.unwrap_or_else(default_output_root);

    let request = ConversionRequest {
        note_body,
        title,
        output_dir: output_root.join(sanitize_dir_name(&dir_name)),
        image_source_dir: vault_root.join(&config.image_directory),
    };

    match convert(&request) {
        Ok(report) => {
            println!("Conversion complete: {}", report.output_dir.display());
        }
        Err(e) => {
            log::error!("conversion failed: {e}");
            eprintln!("Error during conversion.");
        }
    }
}

/// Note title: the filename with a trailing `.md` stripped.
fn note_title(note: &Path) -> String {
    let filename = note
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    filename
        .strip_suffix(".md")
        .map(str::to_string)
        .unwrap_or(filename)
}

/// Blocking stdin prompt for the bundle directory name.
///
/// Empty input and EOF both mean "no name provided" — the caller treats
/// that as cancellation.
fn prompt_directory_name() -> Option<String> {
    print!("Enter directory name: ");
    let _ = std::io::stdout().flush();
    read_directory_name(&mut std::io::stdin().lock())
}

fn read_directory_name(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let name = line.trim_end_matches(['\r', '\n']);
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        }
    }
}

/// The user's Downloads directory, falling back to `<home>/Downloads`.
fn default_output_root() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Downloads")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    // ── note_title ───────────────────────────────────────────────────────

    #[test]
    fn title_strips_md_extension() {
        assert_eq!(note_title(Path::new("/vault/My Note.md")), "My Note");
    }

    #[test]
    fn title_keeps_other_extensions() {
        assert_eq!(note_title(Path::new("notes.markdown")), "notes.markdown");
    }

    #[test]
    fn title_strips_only_the_final_md() {
        assert_eq!(note_title(Path::new("a.md.md")), "a.md");
    }

    // ── read_directory_name ──────────────────────────────────────────────

    #[test]
    fn reads_a_name() {
        let mut input = Cursor::new("my-post\n");
        assert_eq!(read_directory_name(&mut input), Some("my-post".to_string()));
    }

    #[test]
    fn empty_line_is_cancellation() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_directory_name(&mut input), None);
    }

    #[test]
    fn eof_is_cancellation() {
        let mut input = Cursor::new("");
        assert_eq!(read_directory_name(&mut input), None);
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        let mut input = Cursor::new("  spaced name  \r\n");
        assert_eq!(
            read_directory_name(&mut input),
            Some("  spaced name  ".to_string())
        );
    }
}
