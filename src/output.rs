//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity is its semantic identity (positional index + title), with
//! source identifiers shown as indented context lines. Each report has a
//! pure `format_*` function returning lines for testability and a `print_*`
//! wrapper that writes to stdout.
//!
//! ```text
//! Projects
//! 001 Nova Banking (Apps)
//!     Source: nova-banking
//!     Case study: yes
//!
//! Case Studies
//! 001 Redesigning Everyday Banking
//!     Source: nova-banking
//! ```

use crate::generate::GenerateSummary;
use crate::store::ContentStore;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// Content inventory for `check` and the first stage of `build`.
pub fn format_check_output(store: &ContentStore) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    for (idx, project) in store.projects().iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(idx + 1),
            project.title,
            project.category.join(", ")
        ));
        lines.push(format!("{}Source: {}", indent(1), project.slug));
        lines.push(format!(
            "{}Summary: {}",
            indent(1),
            truncate_desc(&project.summary, 60)
        ));
        if store.has_case_study(&project.slug) {
            lines.push(format!("{}Case study: yes", indent(1)));
        }
    }

    lines.push(String::new());
    lines.push("Case Studies".to_string());
    for (idx, study) in store.case_studies().iter().enumerate() {
        lines.push(format!("{} {}", format_index(idx + 1), study.title));
        lines.push(format!("{}Source: {}", indent(1), study.slug));
    }

    lines.push(String::new());
    lines.push("Skills".to_string());
    for (idx, category) in store.skill_categories().iter().enumerate() {
        lines.push(format!(
            "{} {} ({} skills)",
            format_index(idx + 1),
            category.category,
            category.skills.len()
        ));
    }

    lines.push(String::new());
    lines.push("Timeline".to_string());
    for (idx, entry) in store.timeline().iter().enumerate() {
        lines.push(format!(
            "{} {} {}, {}",
            format_index(idx + 1),
            entry.year,
            entry.role,
            entry.company
        ));
    }

    lines.push(String::new());
    lines.push(format!("Images: {} entries", store.images().len()));

    lines
}

pub fn print_check_output(store: &ContentStore) {
    for line in format_check_output(store) {
        println!("{line}");
    }
}

/// Per-page report for the generate stage.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for page in &summary.pages {
        lines.push(format!("{} → {}", page.title, page.path));
    }
    lines.push(String::new());
    lines.push(format!("Stylesheet: {}", summary.stylesheet));
    if summary.assets_copied > 0 {
        lines.push(format!("Assets: {} copied", summary.assets_copied));
    }
    lines.push(format!("Generated {} pages", summary.pages.len()));
    lines
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::GeneratedPage;
    use crate::test_helpers::sample_store;

    #[test]
    fn index_is_three_digit_padded() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_desc("short", 60), "short");
        let long = "x".repeat(80);
        let truncated = truncate_desc(&long, 60);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 63);
    }

    #[test]
    fn check_output_lists_every_project_with_source() {
        let store = sample_store();
        let lines = format_check_output(&store);
        let text = lines.join("\n");
        for project in store.projects() {
            assert!(text.contains(&project.title), "{}", project.title);
            assert!(text.contains(&format!("Source: {}", project.slug)));
        }
        assert!(text.contains("Case study: yes"));
    }

    #[test]
    fn check_output_has_section_headers() {
        let store = sample_store();
        let lines = format_check_output(&store);
        for header in ["Projects", "Case Studies", "Skills", "Timeline"] {
            assert!(lines.contains(&header.to_string()), "{header}");
        }
    }

    #[test]
    fn generate_output_shows_page_mapping() {
        let summary = GenerateSummary {
            pages: vec![
                GeneratedPage {
                    title: "Home".into(),
                    path: "index.html".into(),
                },
                GeneratedPage {
                    title: "Nova Banking".into(),
                    path: "portfolio/nova-banking/index.html".into(),
                },
            ],
            stylesheet: "style-ab12cd34.css".into(),
            assets_copied: 2,
        };
        let lines = format_generate_output(&summary);
        assert!(lines.contains(&"Home → index.html".to_string()));
        assert!(lines.iter().any(|l| l.contains("portfolio/nova-banking")));
        assert!(lines.iter().any(|l| l.contains("style-ab12cd34.css")));
        assert!(lines.iter().any(|l| l.contains("Generated 2 pages")));
    }
}
