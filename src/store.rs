//! Read-only access to the loaded content.
//!
//! A [`ContentStore`] wraps a validated [`Catalog`] and is constructed once
//! at startup, then shared by reference. There is no ambient global; every
//! consumer (query layer, renderer, generator) receives the store
//! explicitly. Nothing here mutates: queries hand out borrows or fresh
//! vectors of borrows.
//!
//! Image resolution is the one place lookups never miss: an id absent from
//! the image table resolves to [`FALLBACK_IMAGE_URL`]. That substitution is
//! the contract for dangling references, not an error path.

use crate::content::{
    Attribution, CaseStudy, Catalog, ImageEntry, PageMeta, Project, SiteCopy, Skill,
    SkillCategory, TimelineEntry,
};
use std::collections::BTreeMap;

/// Served when an image id has no entry in the image table.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.pexels.com/photos/3861969/pexels-photo-3861969.jpeg?auto=compress&cs=tinysrgb&w=1200";

/// Read-only repository over the content catalog.
#[derive(Debug)]
pub struct ContentStore {
    catalog: Catalog,
    image_index: BTreeMap<String, usize>,
}

impl ContentStore {
    pub fn new(catalog: Catalog) -> Self {
        let image_index = catalog
            .images
            .iter()
            .enumerate()
            .map(|(idx, image)| (image.id.clone(), idx))
            .collect();
        Self {
            catalog,
            image_index,
        }
    }

    // ------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------

    pub fn projects(&self) -> &[Project] {
        &self.catalog.projects
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.catalog.case_studies
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.catalog.skills
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.catalog.timeline
    }

    pub fn images(&self) -> &[ImageEntry] {
        &self.catalog.images
    }

    pub fn copy(&self) -> &SiteCopy {
        &self.catalog.copy
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn project_by_slug(&self, slug: &str) -> Option<&Project> {
        self.catalog.projects.iter().find(|p| p.slug == slug)
    }

    pub fn case_study_by_slug(&self, slug: &str) -> Option<&CaseStudy> {
        self.catalog.case_studies.iter().find(|cs| cs.slug == slug)
    }

    /// A project has a case study iff one shares its slug.
    pub fn has_case_study(&self, project_slug: &str) -> bool {
        self.catalog
            .case_studies
            .iter()
            .any(|cs| cs.slug == project_slug)
    }

    // ------------------------------------------------------------------
    // Images
    // ------------------------------------------------------------------

    pub fn image(&self, id: &str) -> Option<&ImageEntry> {
        self.image_index
            .get(id)
            .map(|&idx| &self.catalog.images[idx])
    }

    /// Resolve an image id to its URL. Never fails: unknown ids degrade to
    /// the fallback URL.
    pub fn image_url(&self, id: &str) -> &str {
        self.image(id)
            .map(|image| image.url.as_str())
            .unwrap_or(FALLBACK_IMAGE_URL)
    }

    /// Alt text for an image id, empty for unknown ids.
    pub fn image_alt(&self, id: &str) -> &str {
        self.image(id).map(|image| image.alt.as_str()).unwrap_or("")
    }

    pub fn attribution(&self, id: &str) -> Option<&Attribution> {
        self.image(id).map(|image| &image.attribution)
    }

    /// All images in a category (e.g. "carousel", "hero"), in table order.
    pub fn images_by_category(&self, category: &str) -> Vec<&ImageEntry> {
        self.catalog
            .images
            .iter()
            .filter(|image| image.category == category)
            .collect()
    }

    // ------------------------------------------------------------------
    // Skills and timeline
    // ------------------------------------------------------------------

    /// All skills across categories, flattened in category order.
    pub fn all_skills(&self) -> Vec<&Skill> {
        self.catalog
            .skills
            .iter()
            .flat_map(|category| category.skills.iter())
            .collect()
    }

    /// Skills at or above `min_level`.
    pub fn expert_skills(&self, min_level: u8) -> Vec<&Skill> {
        self.all_skills()
            .into_iter()
            .filter(|skill| skill.level >= min_level)
            .collect()
    }

    /// The current role is the first timeline entry (most-recent-first).
    pub fn current_role(&self) -> Option<&TimelineEntry> {
        self.catalog.timeline.first()
    }

    // ------------------------------------------------------------------
    // Page metadata
    // ------------------------------------------------------------------

    /// Metadata for a page id, falling back to the home entry. Load
    /// validation guarantees "home" exists.
    pub fn page_meta(&self, page_id: &str) -> &PageMeta {
        self.catalog
            .copy
            .metadata
            .get(page_id)
            .or_else(|| self.catalog.copy.metadata.get("home"))
            .expect("validated catalog has home metadata")
    }
}
