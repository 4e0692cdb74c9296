//! URL-safe slug derivation.
//!
//! Content slugs (projects, case studies) are authored directly in the data
//! files, but derived pages need slugs computed from display values: the
//! per-category filter pages turn "Design Systems" into `design-systems`.
//! Since those values end up in directory names and hrefs, they are
//! sanitized: lowercased, non-alphanumerics replaced with dashes, dashes
//! collapsed and trimmed, and overlong values truncated at a word boundary.

const MAX_SLUG_LEN: usize = 80;

/// Sanitize a display value for use in URLs and output paths.
pub fn sanitize(value: &str) -> String {
    let slug: String = value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    // Collapse consecutive dashes
    let mut collapsed = String::with_capacity(slug.len());
    let mut prev_dash = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_dash {
                collapsed.push('-');
            }
            prev_dash = true;
        } else {
            collapsed.push(c);
            prev_dash = false;
        }
    }

    let trimmed = collapsed.trim_matches('-');

    if trimmed.len() <= MAX_SLUG_LEN {
        return trimmed.to_string();
    }

    // Truncate at the last dash before the limit so words stay whole
    let cut = trimmed[..MAX_SLUG_LEN]
        .rfind('-')
        .unwrap_or(MAX_SLUG_LEN);
    trimmed[..cut].trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_dashes_spaces() {
        assert_eq!(sanitize("Design Systems"), "design-systems");
    }

    #[test]
    fn single_word() {
        assert_eq!(sanitize("Apps"), "apps");
    }

    #[test]
    fn collapses_special_characters() {
        assert_eq!(sanitize("UX / UI Flows"), "ux-ui-flows");
    }

    #[test]
    fn trims_leading_and_trailing_dashes() {
        assert_eq!(sanitize("  Branding!  "), "branding");
    }

    #[test]
    fn preserves_digits() {
        assert_eq!(sanitize("Web 3.0 Campaigns"), "web-3-0-campaigns");
    }

    #[test]
    fn truncates_long_values_at_word_boundary() {
        let long = "word ".repeat(30);
        let slug = sanitize(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("---"), "");
    }
}
