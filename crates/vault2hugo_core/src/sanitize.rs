//! Directory-name sanitization.
//!
//! Pure functions with no filesystem dependencies.

/// Characters that are illegal in filenames on major filesystems
/// (Windows, macOS, Linux).
const FS_ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace each filesystem-unsafe character in a directory name with `_`.
///
/// No length limit and no collision detection: if two distinct names collapse
/// to the same sanitized value, the later conversion silently reuses the
/// earlier bundle directory.
///
/// # Examples
///
/// ```
/// use vault2hugo_core::sanitize::sanitize_dir_name;
///
/// assert_eq!(sanitize_dir_name("My:Notes/2024"), "My_Notes_2024");
/// assert_eq!(sanitize_dir_name("plain name"), "plain name");
/// ```
pub fn sanitize_dir_name(name: &str) -> String {
    name.chars()
        .map(|c| if FS_ILLEGAL_CHARS.contains(&c) { '_' } else { c })
        .collect()
}
