//! End-to-end build over the sample content in `fixtures/content/`.

use folio_gen::generate;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture_content() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

fn read(out: &Path, rel: &str) -> String {
    fs::read_to_string(out.join(rel)).unwrap_or_else(|err| panic!("reading {rel}: {err}"))
}

#[test]
fn builds_the_full_site() {
    let out = TempDir::new().unwrap();
    let summary = generate::build(&fixture_content(), out.path()).unwrap();

    // Home: hero copy, autoplaying carousel, hashed stylesheet link
    let index = read(out.path(), "index.html");
    assert!(index.contains("Design that ships and moves numbers"));
    assert!(index.contains(r#"data-autoplay="true""#));
    assert!(index.contains(&summary.stylesheet));

    // Portfolio grid with the "All" sentinel and category filter links
    let portfolio = read(out.path(), "portfolio/index.html");
    assert!(portfolio.contains(">All<"));
    assert!(portfolio.contains("Nova Banking"));
    assert!(portfolio.contains("/portfolio/category/apps/"));

    // Category page keeps only matching projects, in store order
    let apps = read(out.path(), "portfolio/category/apps/index.html");
    assert!(apps.contains("Nova Banking"));
    assert!(apps.contains("Atlas Health"));
    assert!(!apps.contains("Meridian Campaign"));

    // Detail page: sibling links wrap (previous of the first is the last),
    // and a project with a case study links to it
    let nova = read(out.path(), "portfolio/nova-banking/index.html");
    assert!(nova.contains("/portfolio/orbit-website/"));
    assert!(nova.contains("/portfolio/atlas-health/"));
    assert!(nova.contains("Read the full case study"));

    // A dangling cover id degrades to the fallback URL, never an error
    let orbit = read(out.path(), "portfolio/orbit-website/index.html");
    assert!(orbit.contains("images.pexels.com/photos/3861969"));

    // Case study narrative sections in order
    let study = read(out.path(), "case-studies/nova-banking/index.html");
    let challenge = study.find("The Challenge").unwrap();
    let learnings = study.find("What I Took Away").unwrap();
    assert!(challenge < learnings);
    assert!(study.contains("Ananya Rao"));

    // Explicit not-found page with a way home
    let missing = read(out.path(), "404.html");
    assert!(missing.contains("Page not found"));
    assert!(missing.contains(r#"href="/""#));

    // Search index mirrors the project collection
    let raw = read(out.path(), "portfolio/search-index.json");
    let entries: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries.len(), 5);
    assert!(
        entries
            .iter()
            .any(|e| e["href"] == "/portfolio/nova-banking/")
    );

    // Assets copied through
    assert!(out.path().join("assets/favicon.svg").is_file());
}

#[test]
fn stylesheet_carries_theme_overrides() {
    let out = TempDir::new().unwrap();
    let summary = generate::build(&fixture_content(), out.path()).unwrap();

    let css = read(out.path(), &summary.stylesheet);
    // The fixture config overrides the accent color
    assert!(css.contains("--color-accent: #0e7490"));
    // Base styles follow the generated tokens
    assert!(css.contains(".carousel-track"));
}

#[test]
fn rebuild_is_idempotent() {
    let out = TempDir::new().unwrap();
    let first = generate::build(&fixture_content(), out.path()).unwrap();
    let second = generate::build(&fixture_content(), out.path()).unwrap();

    assert_eq!(first.stylesheet, second.stylesheet);
    assert_eq!(first.pages.len(), second.pages.len());
    assert!(out.path().join("index.html").is_file());
}
