//! Content data model and loading.
//!
//! The content directory is the data source. Six JSON files hold the
//! structured content, one TOML file (handled by [`crate::config`]) holds
//! site-wide settings:
//!
//! ```text
//! content/
//! ├── config.toml          # Site config (identity, nav, theme, carousel)
//! ├── projects.json        # { "projects": [...] }
//! ├── case-studies.json    # { "caseStudies": [...] }
//! ├── skills.json          # { "categories": [...] }
//! ├── timeline.json        # { "timeline": [...] }
//! ├── images.json          # { "images": [...] }
//! ├── content.json         # Site copy: hero, about, contact, labels, metadata
//! └── assets/              # Static assets copied to the output root
//! ```
//!
//! JSON keys are camelCase. Unknown keys are rejected to catch typos early.
//!
//! Everything is loaded exactly once into a [`Catalog`] and is immutable for
//! the rest of the run. Validation happens at load time: duplicate project,
//! case-study, or image identifiers are errors, as are skill levels outside
//! 0..=100. Image references are deliberately not cross-checked here; an id
//! missing from the image table resolves to a fallback URL at lookup time
//! rather than failing the build.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Content validation error: {0}")]
    Validation(String),
}

// ============================================================================
// Projects
// ============================================================================

/// A portfolio project. The unit the grid, filters, and detail pages work on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// Categories this project belongs to (a project can sit in several).
    pub category: Vec<String>,
    /// Technology/tool tags, matched by the technology filter and search.
    pub tags: Vec<String>,
    pub role: Vec<String>,
    pub team: String,
    pub timeline: String,
    /// Headline outcomes, in display order.
    pub kpis: Vec<String>,
    pub summary: String,
    /// Cover image id, resolved through the image table.
    pub cover: String,
    /// Detail-page gallery image ids. Absent or empty means cover only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prototype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_url: Option<String>,
    pub featured: bool,
    pub industry: String,
    pub platform: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl Project {
    /// Gallery image ids for the detail page, falling back to the cover when
    /// no gallery was authored.
    pub fn gallery_images(&self) -> Vec<&str> {
        match &self.gallery {
            Some(gallery) if !gallery.is_empty() => {
                gallery.iter().map(String::as_str).collect()
            }
            _ => vec![self.cover.as_str()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Live,
    Prototype,
    Archived,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::Prototype => "Prototype",
            ProjectStatus::Archived => "Archived",
        }
    }
}

// ============================================================================
// Case studies
// ============================================================================

/// A long-form case study. Linked to a project by sharing its slug; the
/// relationship is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseStudy {
    pub slug: String,
    pub title: String,
    pub hero: CaseStudyHero,
    pub metadata: CaseStudyMeta,
    pub sections: CaseStudySections,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseStudyHero {
    pub image: String,
    pub tagline: String,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseStudyMeta {
    pub role: Vec<String>,
    pub timeline: String,
    pub team: String,
    pub platform: Vec<String>,
    pub tools: Vec<String>,
}

/// The fixed narrative shape: problem, research, solution, design, results,
/// learnings. Prose fields accept markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CaseStudySections {
    pub problem: String,
    pub research: ResearchSection,
    pub solution: SolutionSection,
    pub design: DesignSection,
    pub results: ResultsSection,
    pub learnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResearchSection {
    pub methods: Vec<String>,
    pub insights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SolutionSection {
    pub approach: String,
    pub key_features: Vec<String>,
}

/// Design artifacts, each an optional image id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DesignSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wireframes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResultsSection {
    pub metrics: Vec<Metric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

// ============================================================================
// Skills and timeline
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SkillCategory {
    pub category: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100. Checked at load time.
    pub level: u8,
    /// Free-form experience label, e.g. "10+".
    pub years: String,
}

/// One career period. The timeline is authored most-recent-first; the first
/// entry is the current role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimelineEntry {
    pub year: String,
    pub role: String,
    pub company: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
}

// ============================================================================
// Image table
// ============================================================================

/// One entry in the image table. All imagery is referenced by id and
/// resolved through this table to a URL plus attribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ImageEntry {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub attribution: Attribution,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Attribution {
    pub author: String,
    pub source: ImageSource,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Dribbble,
    Behance,
    Unsplash,
    Pexels,
}

impl ImageSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            ImageSource::Dribbble => "Dribbble",
            ImageSource::Behance => "Behance",
            ImageSource::Unsplash => "Unsplash",
            ImageSource::Pexels => "Pexels",
        }
    }
}

// ============================================================================
// Site copy
// ============================================================================

/// All prose and labels that are content rather than structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteCopy {
    pub hero: HeroCopy,
    pub about: AboutCopy,
    pub portfolio: PortfolioCopy,
    pub contact: ContactCopy,
    pub labels: Labels,
    /// Per-page HTML metadata, keyed by page id. Pages without an entry fall
    /// back to "home".
    pub metadata: BTreeMap<String, PageMeta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroCopy {
    pub tagline: String,
    pub subtext: String,
    pub description: String,
    pub ctas: Vec<Cta>,
    pub stats: Vec<Stat>,
    pub capabilities: Vec<Capability>,
    pub trust_bar: TrustBar,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cta {
    pub label: String,
    /// Page identifier the call-to-action navigates to.
    pub action: String,
    pub variant: CtaVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    Primary,
    Secondary,
    Tertiary,
}

impl CtaVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            CtaVariant::Primary => "cta-primary",
            CtaVariant::Secondary => "cta-secondary",
            CtaVariant::Tertiary => "cta-tertiary",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Capability {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TrustBar {
    pub title: String,
    pub clients: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AboutCopy {
    pub title: String,
    /// Introduction paragraphs, markdown allowed.
    pub introduction: Vec<String>,
    pub principles_title: String,
    pub principles: Vec<Principle>,
    pub skills_title: String,
    pub timeline_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Principle {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioCopy {
    pub title: String,
    pub description: String,
    pub filter_label: String,
    pub category_label: String,
    pub search_placeholder: String,
    pub showing_label: String,
    pub clear_filters_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContactCopy {
    pub title: String,
    pub description: String,
    pub form_title: String,
    pub form_description: String,
    pub quick_actions_title: String,
    pub social_title: String,
    pub availability_title: String,
    pub availability_status: String,
    pub availability_message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Labels {
    #[serde(default)]
    pub common: BTreeMap<String, String>,
    #[serde(default)]
    pub nav: BTreeMap<String, String>,
    #[serde(default)]
    pub form: BTreeMap<String, String>,
    #[serde(default)]
    pub buttons: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

// ============================================================================
// Catalog loading
// ============================================================================

/// Everything loaded from the content directory, validated and immutable.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub case_studies: Vec<CaseStudy>,
    pub skills: Vec<SkillCategory>,
    pub timeline: Vec<TimelineEntry>,
    pub images: Vec<ImageEntry>,
    pub copy: SiteCopy,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectsFile {
    projects: Vec<Project>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CaseStudiesFile {
    case_studies: Vec<CaseStudy>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SkillsFile {
    categories: Vec<SkillCategory>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TimelineFile {
    timeline: Vec<TimelineEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ImagesFile {
    images: Vec<ImageEntry>,
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate the whole content directory.
pub fn load_catalog(root: &Path) -> Result<Catalog, ContentError> {
    let projects: ProjectsFile = load_json(&root.join("projects.json"))?;
    let case_studies: CaseStudiesFile = load_json(&root.join("case-studies.json"))?;
    let skills: SkillsFile = load_json(&root.join("skills.json"))?;
    let timeline: TimelineFile = load_json(&root.join("timeline.json"))?;
    let images: ImagesFile = load_json(&root.join("images.json"))?;
    let copy: SiteCopy = load_json(&root.join("content.json"))?;

    let catalog = Catalog {
        projects: projects.projects,
        case_studies: case_studies.case_studies,
        skills: skills.categories,
        timeline: timeline.timeline,
        images: images.images,
        copy,
    };
    validate(&catalog)?;
    Ok(catalog)
}

/// Invariants serde cannot express.
pub fn validate(catalog: &Catalog) -> Result<(), ContentError> {
    let mut slugs = BTreeSet::new();
    for project in &catalog.projects {
        if project.slug.trim().is_empty() {
            return Err(ContentError::Validation(format!(
                "project '{}' has an empty slug",
                project.id
            )));
        }
        if !slugs.insert(project.slug.as_str()) {
            return Err(ContentError::Validation(format!(
                "duplicate project slug '{}'",
                project.slug
            )));
        }
    }

    let mut study_slugs = BTreeSet::new();
    for study in &catalog.case_studies {
        if !study_slugs.insert(study.slug.as_str()) {
            return Err(ContentError::Validation(format!(
                "duplicate case study slug '{}'",
                study.slug
            )));
        }
    }

    let mut image_ids = BTreeSet::new();
    for image in &catalog.images {
        if !image_ids.insert(image.id.as_str()) {
            return Err(ContentError::Validation(format!(
                "duplicate image id '{}'",
                image.id
            )));
        }
    }

    for category in &catalog.skills {
        for skill in &category.skills {
            if skill.level > 100 {
                return Err(ContentError::Validation(format!(
                    "skill '{}' has level {} (must be 0-100)",
                    skill.name, skill.level
                )));
            }
        }
    }

    if !catalog.copy.metadata.contains_key("home") {
        return Err(ContentError::Validation(
            "content.json metadata must include a 'home' entry".into(),
        ));
    }

    Ok(())
}
