//! Shared test utilities.
//!
//! The sample content under `fixtures/content/` is the single source of test
//! data: the builders here load it directly (read-only) and
//! [`setup_fixtures`] copies it into a temp directory for tests that need to
//! mutate files.
//!
//! The fixture data is arranged to cover the interesting shapes: projects
//! with and without galleries, a project whose cover id is missing from the
//! image table, projects with and without case studies, and two projects
//! sharing the "Apps" category.

use std::path::Path;
use tempfile::TempDir;

use crate::content::{Catalog, Project, load_catalog};
use crate::store::ContentStore;

fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&fixtures_dir(), tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The fixture catalog, loaded fresh.
pub fn sample_catalog() -> Catalog {
    load_catalog(&fixtures_dir()).expect("fixture content must load")
}

/// The fixture projects. Five of them; "nova-banking" and "atlas-health"
/// share the "Apps" category.
pub fn sample_projects() -> Vec<Project> {
    sample_catalog().projects
}

/// A store over the fixture catalog.
pub fn sample_store() -> ContentStore {
    ContentStore::new(sample_catalog())
}
