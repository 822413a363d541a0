//! # `vault2hugo_core`
//!
//! Shared library for vault2hugo: turns a single markdown note from a
//! personal vault into a Hugo page bundle — a directory with an `index.md`
//! (synthesized front matter plus a wiki-link-free body) and copies of every
//! image the note embeds.
//!
//! The transformation pipeline is deliberately linear and single-shot:
//! sanitize the bundle name, synthesize front matter, rewrite wiki links,
//! write the document, relocate assets. Pure text transforms live in their
//! own modules with no filesystem access; [`convert`] sequences them and
//! does the I/O.

#![warn(missing_docs)]

/// Image reference discovery and relocation into the output bundle.
pub mod assets;

/// Persisted user configuration (image source directory).
pub mod config;

/// The conversion orchestrator and its request/report types.
pub mod convert;

/// Error type shared across the crate.
pub mod error;

/// Front-matter synthesis and inline-tag handling.
pub mod frontmatter;

/// Wiki-link to plain-markdown rewriting.
pub mod links;

/// Directory-name sanitization.
pub mod sanitize;

pub use convert::{convert, read_note, ConversionReport, ConversionRequest};
pub use error::{ConvertError, Result};
