//! Image reference discovery and relocation.
//!
//! Works on the ORIGINAL note body, not the rewritten one: link rewriting and
//! asset discovery are two independent passes over the same source text.

use std::path::Path;

use regex::Regex;

use crate::error::{ConvertError, Result};
use crate::links::IMAGE_PATTERN;

/// Find every embedded image reference (`![[name]]`) in the body, in order of
/// appearance. Duplicates are kept.
pub fn find_image_refs(body: &str) -> Vec<String> {
    let image_re = Regex::new(IMAGE_PATTERN).unwrap();
    image_re
        .captures_iter(body)
        .map(|c| c[1].to_string())
        .collect()
}

/// Copy each image the body references from `image_source_dir` into
/// `output_dir`, keeping the source basename.
///
/// Copies run sequentially; the first failure aborts the remainder and
/// propagates (earlier copies stay on disk). Returns the number of images
/// copied.
pub fn copy_images(body: &str, image_source_dir: &Path, output_dir: &Path) -> Result<usize> {
    let mut copied = 0;
    for name in find_image_refs(body) {
        let from = image_source_dir.join(&name);
        let to = output_dir.join(&name);
        std::fs::copy(&from, &to).map_err(|source| ConvertError::ImageCopy {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        log::debug!("copied {} to {}", name, to.display());
        copied += 1;
    }
    Ok(copied)
}
