//! Site generation.
//!
//! Takes a loaded [`ContentStore`] plus [`SiteConfig`] and writes the final
//! static site:
//!
//! ```text
//! dist/
//! ├── index.html                       # Home: hero, carousel, featured work
//! ├── 404.html                         # Explicit not-found page
//! ├── style-3fa9c1d2.css               # Theme tokens + base styles, content-hashed
//! ├── about/index.html
//! ├── contact/index.html
//! ├── case-studies/index.html
//! ├── case-studies/{slug}/index.html
//! ├── portfolio/index.html
//! ├── portfolio/search-index.json      # Query-layer export for search tooling
//! ├── portfolio/category/{slug}/index.html
//! ├── portfolio/{slug}/index.html
//! └── assets/...                       # Copied through from content/assets
//! ```
//!
//! The stylesheet is written under a content-hashed name so far-future cache
//! headers are safe; deploying a change produces a new filename. Detail
//! pages are independent of each other and render in parallel.

use crate::config::{self, SiteConfig};
use crate::content;
use crate::query;
use crate::render;
use crate::route::Page;
use crate::store::ContentStore;
use maud::Markup;
use rayon::prelude::*;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// One written page, for reporting.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub title: String,
    pub path: String,
}

/// What a generation run produced.
#[derive(Debug)]
pub struct GenerateSummary {
    pub pages: Vec<GeneratedPage>,
    pub stylesheet: String,
    pub assets_copied: usize,
}

/// One entry in the exported search index. Mirrors the fields free-text
/// search matches against.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchEntry<'a> {
    slug: &'a str,
    title: &'a str,
    summary: &'a str,
    tags: &'a [String],
    category: &'a [String],
    industry: &'a str,
    href: String,
}

/// Load the content directory and generate the site into `output`.
pub fn build(source: &Path, output: &Path) -> Result<GenerateSummary, GenerateError> {
    let config = config::load_config(source)?;
    let catalog = content::load_catalog(source)?;
    let store = ContentStore::new(catalog);
    generate_site(&store, &config, source, output)
}

/// Generate the site from already-loaded content.
pub fn generate_site(
    store: &ContentStore,
    config: &SiteConfig,
    source: &Path,
    output: &Path,
) -> Result<GenerateSummary, GenerateError> {
    fs::create_dir_all(output)?;

    let css = format!(
        "{}\n\n{}",
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    );
    let stylesheet = hashed_asset_name("style", "css", &css);
    fs::write(output.join(&stylesheet), &css)?;
    let css_href = format!("/{stylesheet}");

    let mut pages: Vec<GeneratedPage> = Vec::new();

    let fixed = [
        (Page::Home, "Home"),
        (Page::About, "About"),
        (Page::Portfolio, "Portfolio"),
        (Page::CaseStudies, "Case Studies"),
        (Page::Contact, "Contact"),
        (Page::NotFound, "Not Found"),
    ];
    for (page, title) in fixed {
        let markup = render::render_page(store, config, &css_href, &page);
        let path = page.output_path();
        write_page(output, &path, markup)?;
        pages.push(GeneratedPage {
            title: title.to_string(),
            path,
        });
    }

    for category in query::categories(store.projects()) {
        let markup = render::render_category_page(store, config, &css_href, &category);
        let href = render::category_href(&category);
        let path = format!("{}index.html", &href[1..]);
        write_page(output, &path, markup)?;
        pages.push(GeneratedPage {
            title: format!("Portfolio / {category}"),
            path,
        });
    }

    // Detail pages are independent; render and write them in parallel
    let project_pages = store
        .projects()
        .par_iter()
        .map(|project| -> Result<GeneratedPage, GenerateError> {
            let page = Page::PortfolioDetail {
                slug: project.slug.clone(),
            };
            let markup = render::render_page(store, config, &css_href, &page);
            let path = page.output_path();
            write_page(output, &path, markup)?;
            Ok(GeneratedPage {
                title: project.title.clone(),
                path,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    pages.extend(project_pages);

    let study_pages = store
        .case_studies()
        .par_iter()
        .map(|study| -> Result<GeneratedPage, GenerateError> {
            let page = Page::CaseStudyDetail {
                slug: study.slug.clone(),
            };
            let markup = render::render_page(store, config, &css_href, &page);
            let path = page.output_path();
            write_page(output, &path, markup)?;
            Ok(GeneratedPage {
                title: study.title.clone(),
                path,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    pages.extend(study_pages);

    write_search_index(store, output)?;

    let assets_copied = copy_assets(&source.join("assets"), output)?;

    Ok(GenerateSummary {
        pages,
        stylesheet,
        assets_copied,
    })
}

fn write_page(output: &Path, rel_path: &str, markup: Markup) -> std::io::Result<()> {
    let path = output.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, markup.into_string())
}

/// Content-addressed asset name: `style-3fa9c1d2.css`. The name changes
/// whenever the content does, so caches never serve stale styles.
fn hashed_asset_name(stem: &str, ext: &str, content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let hex: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
    format!("{stem}-{hex}.{ext}")
}

/// Export the searchable project fields as JSON next to the portfolio page.
fn write_search_index(store: &ContentStore, output: &Path) -> Result<(), GenerateError> {
    let entries: Vec<SearchEntry> = store
        .projects()
        .iter()
        .map(|project| SearchEntry {
            slug: &project.slug,
            title: &project.title,
            summary: &project.summary,
            tags: &project.tags,
            category: &project.category,
            industry: &project.industry,
            href: Page::PortfolioDetail {
                slug: project.slug.clone(),
            }
            .href(),
        })
        .collect();
    let json = serde_json::to_string_pretty(&entries)?;
    let dir = output.join("portfolio");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("search-index.json"), json)?;
    Ok(())
}

/// Copy `content/assets/` into `dist/assets/`, preserving structure.
/// Returns the number of files copied; a missing assets directory is fine.
fn copy_assets(assets_dir: &Path, output: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_dir() {
            continue;
        }
        let rel = entry.path().strip_prefix(assets_dir).unwrap();
        let dest = output.join("assets").join(rel);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        copied += 1;
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixtures;
    use tempfile::TempDir;

    #[test]
    fn build_writes_every_page_kind() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let summary = build(content.path(), out.path()).unwrap();

        for path in [
            "index.html",
            "404.html",
            "about/index.html",
            "portfolio/index.html",
            "case-studies/index.html",
            "contact/index.html",
        ] {
            assert!(out.path().join(path).is_file(), "{path}");
        }
        assert!(summary.pages.iter().any(|p| p.path == "index.html"));
    }

    #[test]
    fn build_writes_detail_pages_for_every_slug() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        build(content.path(), out.path()).unwrap();

        let catalog = crate::content::load_catalog(content.path()).unwrap();
        for project in &catalog.projects {
            let path = out
                .path()
                .join(format!("portfolio/{}/index.html", project.slug));
            assert!(path.is_file(), "{}", project.slug);
        }
        for study in &catalog.case_studies {
            let path = out
                .path()
                .join(format!("case-studies/{}/index.html", study.slug));
            assert!(path.is_file(), "{}", study.slug);
        }
    }

    #[test]
    fn stylesheet_is_content_hashed_and_linked() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let summary = build(content.path(), out.path()).unwrap();

        assert!(summary.stylesheet.starts_with("style-"));
        assert!(summary.stylesheet.ends_with(".css"));
        assert!(out.path().join(&summary.stylesheet).is_file());

        let index = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(index.contains(&summary.stylesheet));
    }

    #[test]
    fn hashed_name_is_stable_per_content() {
        let a = hashed_asset_name("style", "css", "body {}");
        let b = hashed_asset_name("style", "css", "body {}");
        let c = hashed_asset_name("style", "css", "body { color: red }");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), "style-".len() + 8 + ".css".len());
    }

    #[test]
    fn search_index_lists_all_projects() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        build(content.path(), out.path()).unwrap();

        let raw = fs::read_to_string(out.path().join("portfolio/search-index.json")).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        let catalog = crate::content::load_catalog(content.path()).unwrap();
        assert_eq!(entries.len(), catalog.projects.len());
        assert!(entries[0].get("href").is_some());
    }

    #[test]
    fn category_pages_generated_per_domain_value() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        build(content.path(), out.path()).unwrap();

        let catalog = crate::content::load_catalog(content.path()).unwrap();
        for category in crate::query::categories(&catalog.projects) {
            let href = render::category_href(&category);
            let path = out.path().join(format!("{}index.html", &href[1..]));
            assert!(path.is_file(), "{category}");
        }
    }

    #[test]
    fn assets_copied_through() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let summary = build(content.path(), out.path()).unwrap();

        assert!(summary.assets_copied >= 1);
        assert!(out.path().join("assets/favicon.svg").is_file());
    }

    #[test]
    fn missing_assets_directory_is_fine() {
        let content = setup_fixtures();
        fs::remove_dir_all(content.path().join("assets")).unwrap();
        let out = TempDir::new().unwrap();
        let summary = build(content.path(), out.path()).unwrap();
        assert_eq!(summary.assets_copied, 0);
    }
}
