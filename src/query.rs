//! Pure queries over the project collection.
//!
//! Filtering is predicate composition: every supplied criterion must hold
//! (logical AND), an omitted criterion matches everything. The output is a
//! new sequence borrowing the same projects, in store order; nothing here
//! mutates or re-sorts.
//!
//! The distinct-domain helpers feed the filter toolbars. They return only
//! real domain values, deduplicated and sorted; the "All" entry the UI shows
//! first is the renderer's business.

use crate::content::Project;
use std::collections::BTreeSet;

/// Filter criteria, each independently optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    /// Membership in the project's category set, exact.
    pub category: Option<String>,
    /// Case-insensitive substring match against any tag.
    pub technology: Option<String>,
    /// Exact industry match.
    pub industry: Option<String>,
    /// Membership in the project's platform set, exact.
    pub platform: Option<String>,
    /// Case-insensitive substring match against title, summary, any tag, or
    /// industry. Blank strings match everything.
    pub search: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectFilter {
    /// True when no criterion is set, i.e. the filter matches everything.
    pub fn is_empty(&self) -> bool {
        self == &ProjectFilter::default()
    }

    pub fn matches(&self, project: &Project) -> bool {
        if let Some(category) = &self.category {
            if !project.category.iter().any(|c| c == category) {
                return false;
            }
        }

        if let Some(technology) = &self.technology {
            let needle = technology.to_lowercase();
            if !project
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(industry) = &self.industry {
            if &project.industry != industry {
                return false;
            }
        }

        if let Some(platform) = &self.platform {
            if !project.platform.iter().any(|p| p == platform) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !search_haystack(project, &needle) {
                return false;
            }
        }

        if let Some(featured) = self.featured {
            if project.featured != featured {
                return false;
            }
        }

        true
    }
}

fn search_haystack(project: &Project, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.summary.to_lowercase().contains(needle)
        || project
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
        || project.industry.to_lowercase().contains(needle)
}

/// Stable filter: every project satisfying all supplied criteria, in the
/// order the store holds them.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

/// Featured projects, in store order.
pub fn featured_projects(projects: &[Project]) -> Vec<&Project> {
    projects.iter().filter(|p| p.featured).collect()
}

/// Distinct categories across all projects, sorted ascending.
pub fn categories(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().flat_map(|p| p.category.iter()))
}

/// Distinct technology tags across all projects, sorted ascending.
pub fn technologies(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().flat_map(|p| p.tags.iter()))
}

/// Distinct industries across all projects, sorted ascending.
pub fn industries(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().map(|p| &p.industry))
}

/// Distinct platforms across all projects, sorted ascending.
pub fn platforms(projects: &[Project]) -> Vec<String> {
    distinct(projects.iter().flat_map(|p| p.platform.iter()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let set: BTreeSet<&String> = values.collect();
    set.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_projects;

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let projects = sample_projects();
        let filtered = filter_projects(&projects, &ProjectFilter::default());
        assert_eq!(filtered.len(), projects.len());
        let slugs: Vec<&str> = filtered.iter().map(|p| p.slug.as_str()).collect();
        let expected: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, expected);
    }

    #[test]
    fn category_filter_keeps_relative_order() {
        // Two of the five sample projects carry the "Apps" category
        let projects = sample_projects();
        let filter = ProjectFilter {
            category: Some("Apps".into()),
            ..Default::default()
        };
        let filtered = filter_projects(&projects, &filter);
        let slugs: Vec<&str> = filtered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["nova-banking", "atlas-health"]);
    }

    #[test]
    fn technology_filter_is_case_insensitive_substring() {
        let projects = sample_projects();
        let filter = ProjectFilter {
            technology: Some("react".into()),
            ..Default::default()
        };
        // Matches both "React" and "React Native" tags
        for project in filter_projects(&projects, &filter) {
            assert!(
                project
                    .tags
                    .iter()
                    .any(|t| t.to_lowercase().contains("react")),
                "{}",
                project.slug
            );
        }
        assert!(!filter_projects(&projects, &filter).is_empty());
    }

    #[test]
    fn industry_filter_is_exact() {
        let projects = sample_projects();
        let filter = ProjectFilter {
            industry: Some("Fintech".into()),
            ..Default::default()
        };
        let filtered = filter_projects(&projects, &filter);
        assert!(filtered.iter().all(|p| p.industry == "Fintech"));
        assert!(!filtered.is_empty());

        let miss = ProjectFilter {
            industry: Some("fintech".into()),
            ..Default::default()
        };
        assert!(filter_projects(&projects, &miss).is_empty());
    }

    #[test]
    fn combined_filters_are_conjunctive() {
        let projects = sample_projects();
        let filter = ProjectFilter {
            category: Some("Apps".into()),
            platform: Some("iOS".into()),
            featured: Some(true),
            ..Default::default()
        };
        for project in filter_projects(&projects, &filter) {
            assert!(project.category.iter().any(|c| c == "Apps"));
            assert!(project.platform.iter().any(|p| p == "iOS"));
            assert!(project.featured);
        }
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let projects = sample_projects();
        let filter = ProjectFilter {
            search: Some("design".into()),
            ..Default::default()
        };
        let filtered = filter_projects(&projects, &filter);
        for project in &projects {
            let included = filtered.iter().any(|p| p.slug == project.slug);
            assert_eq!(included, filter.matches(project), "{}", project.slug);
        }
    }

    #[test]
    fn search_matches_title_summary_tags_industry() {
        let projects = sample_projects();

        let by_title = ProjectFilter {
            search: Some("NOVA".into()),
            ..Default::default()
        };
        assert!(
            filter_projects(&projects, &by_title)
                .iter()
                .any(|p| p.slug == "nova-banking")
        );

        let by_industry = ProjectFilter {
            search: Some("fintech".into()),
            ..Default::default()
        };
        assert!(!filter_projects(&projects, &by_industry).is_empty());
    }

    #[test]
    fn blank_search_matches_everything() {
        let projects = sample_projects();
        let filter = ProjectFilter {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(filter_projects(&projects, &filter).len(), projects.len());
    }

    #[test]
    fn featured_filter_both_ways() {
        let projects = sample_projects();
        let on = ProjectFilter {
            featured: Some(true),
            ..Default::default()
        };
        let off = ProjectFilter {
            featured: Some(false),
            ..Default::default()
        };
        let total = filter_projects(&projects, &on).len() + filter_projects(&projects, &off).len();
        assert_eq!(total, projects.len());
        assert_eq!(
            featured_projects(&projects).len(),
            filter_projects(&projects, &on).len()
        );
    }

    #[test]
    fn no_match_returns_empty() {
        let projects = sample_projects();
        let filter = ProjectFilter {
            category: Some("Nonexistent".into()),
            ..Default::default()
        };
        assert!(filter_projects(&projects, &filter).is_empty());
    }

    #[test]
    fn distinct_domains_are_sorted_and_deduplicated() {
        let projects = sample_projects();

        let cats = categories(&projects);
        let mut sorted = cats.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(cats, sorted);
        assert!(cats.contains(&"Apps".to_string()));
        // No synthetic sentinel; the UI adds it
        assert!(!cats.contains(&"All".to_string()));

        assert!(!technologies(&projects).is_empty());
        assert!(!industries(&projects).is_empty());
        assert!(!platforms(&projects).is_empty());
    }

    #[test]
    fn is_empty_reflects_criteria() {
        assert!(ProjectFilter::default().is_empty());
        let filter = ProjectFilter {
            featured: Some(false),
            ..Default::default()
        };
        assert!(!filter.is_empty());
    }
}
