//! # folio-gen
//!
//! A minimal static site generator for personal design portfolios. The
//! content directory is the data source: structured JSON for projects, case
//! studies, skills, career timeline, and an image table, plus a `config.toml`
//! for site-wide settings.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Load      content/  →  Catalog   (JSON + TOML → validated structs)
//! 2. Generate  Catalog   →  dist/     (final HTML site)
//! ```
//!
//! Loading happens exactly once per run; everything after that works on
//! immutable, validated data. The generate stage is a function of the loaded
//! catalog and config, so tests can exercise every page without touching the
//! real content directory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Data model + JSON loading + load-time validation |
//! | [`config`] | `config.toml` loading, merging, validation, theme CSS |
//! | [`store`] | Read-only repositories over the catalog, image resolution with fallback |
//! | [`query`] | Pure filtering/search over projects, distinct filter domains |
//! | [`cycle`] | Wraparound index state: galleries, carousel, sibling browsing |
//! | [`clock`] | Deadline-based timers, injectable clocks for tests |
//! | [`route`] | Page tagged union: identifiers, hrefs, output paths |
//! | [`form`] | Contact form validation + simulated-submit state machine |
//! | [`slug`] | URL-safe slug sanitization for derived pages |
//! | [`render`] | Maud templates for every page type |
//! | [`generate`] | Page walk, hashed stylesheet, search index, asset copy |
//! | [`output`] | CLI output formatting, information-first inventory display |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped. There is no
//! template directory to ship or get out of sync.
//!
//! ## URL-Referenced Imagery
//!
//! The site carries no image files. Every image is an id resolved through
//! the image table to a hosted URL plus attribution. A dangling id resolves
//! to a fixed fallback URL; the build never fails on imagery and the page
//! never shows a broken image.
//!
//! ## Routing as Data
//!
//! The page set is closed, so pages are a tagged union ([`route::Page`]).
//! Detail pages carry their slug in the value, an unknown identifier is an
//! explicit `NotFound` page, and hrefs and output paths are derived from the
//! same value, so links cannot drift from the files on disk.
//!
//! ## Deadline-Based Timing
//!
//! The carousel's auto-advance and settle guard, and the contact form's
//! acknowledgement reset, are modeled as one-shot deadlines stored in the
//! owning state machine and polled with an explicit `now` ([`clock`]).
//! Re-arming replaces the old deadline, so a superseded timer can never fire
//! against state that has moved on, and tests drive everything with a manual
//! clock instead of sleeping.

pub mod clock;
pub mod config;
pub mod content;
pub mod cycle;
pub mod form;
pub mod generate;
pub mod output;
pub mod query;
pub mod render;
pub mod route;
pub mod slug;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
