//! Page identity and routing.
//!
//! The site has a closed set of page kinds, so they are a tagged union:
//! detail pages carry their slug as part of the value, which makes a detail
//! page without a slug, or a stale slug left over from a previous page,
//! unrepresentable. Unknown identifiers resolve to the explicit
//! [`Page::NotFound`] variant (rendered as `404.html`) instead of an empty
//! content area.
//!
//! Resolution is total: any `(id, slug)` pair maps to some `Page`. The
//! generator walks `Page` values to decide what to write and where, and
//! every internal href goes through [`Page::href`] so links and output
//! paths cannot drift apart.

/// Page identifiers that can appear in navigation config. Detail pages are
/// reachable only through their listing pages and never appear in the nav.
pub const NAV_PAGE_IDS: &[&str] = &["home", "about", "portfolio", "case-studies", "contact"];

/// One page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Portfolio,
    PortfolioDetail { slug: String },
    CaseStudies,
    CaseStudyDetail { slug: String },
    Contact,
    NotFound,
}

impl Page {
    /// Resolve a string page identifier plus optional slug. Total: unknown
    /// identifiers, and detail identifiers missing their slug, become
    /// [`Page::NotFound`].
    pub fn resolve(id: &str, slug: Option<&str>) -> Page {
        let slug = slug.map(str::trim).filter(|s| !s.is_empty());
        match id {
            "home" => Page::Home,
            "about" => Page::About,
            "portfolio" => Page::Portfolio,
            "portfolio-detail" => match slug {
                Some(s) => Page::PortfolioDetail { slug: s.to_string() },
                None => Page::NotFound,
            },
            "case-studies" => Page::CaseStudies,
            "case-study-detail" => match slug {
                Some(s) => Page::CaseStudyDetail { slug: s.to_string() },
                None => Page::NotFound,
            },
            "contact" => Page::Contact,
            _ => Page::NotFound,
        }
    }

    /// The page's string identifier, also the key into per-page metadata.
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Portfolio => "portfolio",
            Page::PortfolioDetail { .. } => "portfolio-detail",
            Page::CaseStudies => "case-studies",
            Page::CaseStudyDetail { .. } => "case-study-detail",
            Page::Contact => "contact",
            Page::NotFound => "not-found",
        }
    }

    /// Which navigation entry this page highlights. Detail pages highlight
    /// their listing page; the not-found page highlights nothing.
    pub fn nav_id(&self) -> &'static str {
        match self {
            Page::PortfolioDetail { .. } => "portfolio",
            Page::CaseStudyDetail { .. } => "case-studies",
            Page::NotFound => "",
            _ => self.id(),
        }
    }

    /// Site-absolute link target.
    pub fn href(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::About => "/about/".to_string(),
            Page::Portfolio => "/portfolio/".to_string(),
            Page::PortfolioDetail { slug } => format!("/portfolio/{slug}/"),
            Page::CaseStudies => "/case-studies/".to_string(),
            Page::CaseStudyDetail { slug } => format!("/case-studies/{slug}/"),
            Page::Contact => "/contact/".to_string(),
            Page::NotFound => "/404.html".to_string(),
        }
    }

    /// Where the page is written, relative to the output root.
    pub fn output_path(&self) -> String {
        match self {
            Page::Home => "index.html".to_string(),
            Page::NotFound => "404.html".to_string(),
            // Directory-style URLs: strip the leading slash, append index.html
            other => format!("{}index.html", &other.href()[1..]),
        }
    }
}

/// Current-page state. `navigate` replaces the whole value, so nothing from
/// the previous page (in particular its slug) survives the transition.
#[derive(Debug, Clone)]
pub struct Router {
    current: Page,
}

impl Router {
    /// Start on the home page.
    pub fn new() -> Self {
        Self {
            current: Page::Home,
        }
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    /// Replace the current page. Accepts any identifier; unknown ones land
    /// on [`Page::NotFound`].
    pub fn navigate(&mut self, id: &str, slug: Option<&str>) -> &Page {
        self.current = Page::resolve(id, slug);
        &self.current
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_listing_pages() {
        assert_eq!(Page::resolve("home", None), Page::Home);
        assert_eq!(Page::resolve("portfolio", None), Page::Portfolio);
        assert_eq!(Page::resolve("case-studies", None), Page::CaseStudies);
        assert_eq!(Page::resolve("contact", None), Page::Contact);
    }

    #[test]
    fn resolve_detail_pages_with_slug() {
        assert_eq!(
            Page::resolve("portfolio-detail", Some("nova-banking")),
            Page::PortfolioDetail {
                slug: "nova-banking".to_string()
            }
        );
        assert_eq!(
            Page::resolve("case-study-detail", Some("nova-banking")),
            Page::CaseStudyDetail {
                slug: "nova-banking".to_string()
            }
        );
    }

    #[test]
    fn detail_without_slug_is_not_found() {
        assert_eq!(Page::resolve("portfolio-detail", None), Page::NotFound);
        assert_eq!(Page::resolve("case-study-detail", Some("  ")), Page::NotFound);
    }

    #[test]
    fn unknown_identifier_is_not_found() {
        assert_eq!(Page::resolve("blog", None), Page::NotFound);
        assert_eq!(Page::resolve("", None), Page::NotFound);
    }

    #[test]
    fn listing_ignores_slug() {
        // A slug passed alongside a listing id is dropped, not stored
        assert_eq!(Page::resolve("about", Some("stale")), Page::About);
    }

    #[test]
    fn hrefs_and_output_paths_agree() {
        let detail = Page::resolve("portfolio-detail", Some("nova-banking"));
        assert_eq!(detail.href(), "/portfolio/nova-banking/");
        assert_eq!(detail.output_path(), "portfolio/nova-banking/index.html");

        assert_eq!(Page::Home.output_path(), "index.html");
        assert_eq!(Page::About.output_path(), "about/index.html");
        assert_eq!(Page::NotFound.output_path(), "404.html");
    }

    #[test]
    fn detail_pages_highlight_listing_nav() {
        let page = Page::resolve("case-study-detail", Some("x"));
        assert_eq!(page.nav_id(), "case-studies");
        assert_eq!(
            Page::resolve("portfolio-detail", Some("x")).nav_id(),
            "portfolio"
        );
    }

    #[test]
    fn router_replaces_page_wholesale() {
        let mut router = Router::new();
        assert_eq!(router.current(), &Page::Home);

        router.navigate("portfolio-detail", Some("nova-banking"));
        assert_eq!(
            router.current(),
            &Page::PortfolioDetail {
                slug: "nova-banking".to_string()
            }
        );

        // Moving to a listing page leaves no slug behind anywhere
        router.navigate("portfolio", None);
        assert_eq!(router.current(), &Page::Portfolio);

        router.navigate("definitely-not-a-page", None);
        assert_eq!(router.current(), &Page::NotFound);
    }

    #[test]
    fn nav_ids_cover_all_nav_pages() {
        for id in NAV_PAGE_IDS {
            assert_ne!(Page::resolve(id, None), Page::NotFound, "{id}");
        }
    }
}
