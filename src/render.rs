//! HTML rendering for every page type.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping;
//! `PreEscaped` appears only for markdown output and the embedded script.
//!
//! Page content comes straight from the [`ContentStore`] and
//! [`SiteConfig`]; this module decides markup, not data. Interactive
//! behavior (carousel, gallery, search box, form acknowledgement) is carried
//! by data attributes that the embedded script reads, with the timing values
//! taken from the same carousel options the state machines use.

use crate::config::SiteConfig;
use crate::content::{CaseStudy, Metric, Project};
use crate::cycle::{CarouselOptions, next_index, previous_index};
use crate::form::{self, FieldKind};
use crate::query::{self, ProjectFilter};
use crate::route::Page;
use crate::slug;
use crate::store::ContentStore;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::collections::BTreeMap;

const JS: &str = include_str!("../static/site.js");

/// Which entity a not-found view stands in for. Decides the message and
/// where the escape hatch leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Project,
    CaseStudy,
    Page,
}

impl NotFoundKind {
    fn message(&self) -> &'static str {
        match self {
            NotFoundKind::Project => "Project not found",
            NotFoundKind::CaseStudy => "Case study not found",
            NotFoundKind::Page => "Page not found",
        }
    }

    fn return_target(&self) -> (Page, &'static str) {
        match self {
            NotFoundKind::Project => (Page::Portfolio, "Back to Portfolio"),
            NotFoundKind::CaseStudy => (Page::CaseStudies, "Back to Case Studies"),
            NotFoundKind::Page => (Page::Home, "Back to Home"),
        }
    }
}

/// Link target for a category filter page.
pub fn category_href(category: &str) -> String {
    format!("/portfolio/category/{}/", slug::sanitize(category))
}

/// Render a full page document.
pub fn render_page(
    store: &ContentStore,
    config: &SiteConfig,
    css_href: &str,
    page: &Page,
) -> Markup {
    let content = match page {
        Page::Home => home_content(store, config),
        Page::About => about_content(store),
        Page::Portfolio => portfolio_content(store, None),
        Page::PortfolioDetail { slug } => match store.project_by_slug(slug) {
            Some(project) => portfolio_detail_content(store, project),
            None => not_found_content(NotFoundKind::Project),
        },
        Page::CaseStudies => case_studies_content(store),
        Page::CaseStudyDetail { slug } => match store.case_study_by_slug(slug) {
            Some(study) => case_study_detail_content(store, study),
            None => not_found_content(NotFoundKind::CaseStudy),
        },
        Page::Contact => contact_content(store, config),
        Page::NotFound => not_found_content(NotFoundKind::Page),
    };
    base_document(store, config, css_href, page, content)
}

/// Render a portfolio page restricted to one category.
pub fn render_category_page(
    store: &ContentStore,
    config: &SiteConfig,
    css_href: &str,
    category: &str,
) -> Markup {
    let content = portfolio_content(store, Some(category));
    base_document(store, config, css_href, &Page::Portfolio, content)
}

// ============================================================================
// Document chrome
// ============================================================================

fn base_document(
    store: &ContentStore,
    config: &SiteConfig,
    css_href: &str,
    page: &Page,
    content: Markup,
) -> Markup {
    let page_meta = store.page_meta(page.id());
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_meta.title) }
                meta name="description" content=(page_meta.description);
                @if !page_meta.keywords.is_empty() {
                    meta name="keywords" content=(page_meta.keywords.join(", "));
                }
                link rel="stylesheet" href=(css_href);
            }
            body {
                (site_header(config, page.nav_id()))
                main { (content) }
                (site_footer(config))
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn site_header(config: &SiteConfig, current_nav: &str) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (config.name) }
            nav.site-nav {
                ul {
                    @for entry in &config.navigation {
                        @let is_current = entry.id == current_nav;
                        li class=[is_current.then_some("current")] {
                            a href=(entry.href) { (entry.label) }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            @if !config.social.is_empty() {
                ul.social-links {
                    @for link in &config.social {
                        li {
                            a href=(link.url) target="_blank" rel="noopener" { (link.platform) }
                        }
                    }
                }
            }
            p.footer-credit { (config.author.name) }
        }
    }
}

// ============================================================================
// Shared components
// ============================================================================

/// Convert markdown prose to HTML.
fn markdown(text: &str) -> Markup {
    let parser = Parser::new(text);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

fn label_or<'a>(map: &'a BTreeMap<String, String>, key: &str, fallback: &'a str) -> &'a str {
    map.get(key).map(String::as_str).unwrap_or(fallback)
}

/// One slide in a carousel or gallery.
struct Slide {
    url: String,
    alt: String,
    caption: Option<String>,
}

fn slide_for_image(store: &ContentStore, id: &str) -> Slide {
    let caption = store.attribution(id).map(|attribution| {
        format!(
            "{} via {}",
            attribution.author,
            attribution.source.display_name()
        )
    });
    Slide {
        url: store.image_url(id).to_string(),
        alt: store.image_alt(id).to_string(),
        caption,
    }
}

/// Slides plus controls, driven by the embedded script. The data attributes
/// carry the same timing the carousel state machine runs on.
fn carousel_markup(slides: &[Slide], options: &CarouselOptions) -> Markup {
    let autoplay = options.autoplay_for(slides.len());
    html! {
        div.carousel
            data-autoplay=(autoplay)
            data-interval=(options.interval.as_millis())
            data-settle=(options.settle.as_millis())
        {
            div.carousel-track {
                @for (idx, slide) in slides.iter().enumerate() {
                    @let cls = if idx == 0 { "carousel-slide active" } else { "carousel-slide" };
                    figure class=(cls) {
                        img src=(slide.url) alt=(slide.alt) loading=(if idx == 0 { "eager" } else { "lazy" });
                        @if let Some(caption) = &slide.caption {
                            figcaption { (caption) }
                        }
                    }
                }
            }
            @if slides.len() > 1 {
                button.carousel-control.prev type="button" data-dir="prev" aria-label="Previous slide" { "\u{2039}" }
                button.carousel-control.next type="button" data-dir="next" aria-label="Next slide" { "\u{203A}" }
                div.carousel-dots {
                    @for idx in 0..slides.len() {
                        button type="button"
                            class=[(idx == 0).then_some("active")]
                            data-index=(idx)
                            aria-label={ "Go to slide " (idx + 1) } {}
                    }
                }
            }
        }
    }
}

fn project_card(store: &ContentStore, project: &Project) -> Markup {
    let detail = Page::PortfolioDetail {
        slug: project.slug.clone(),
    };
    let haystack = format!(
        "{} {} {} {}",
        project.title,
        project.summary,
        project.tags.join(" "),
        project.industry
    )
    .to_lowercase();
    html! {
        article.project-card data-search=(haystack) {
            a.card-link href=(detail.href()) {
                img src=(store.image_url(&project.cover)) alt=(store.image_alt(&project.cover)) loading="lazy";
                div.card-body {
                    @if project.featured { span.badge { "Featured" } }
                    h3 { (project.title) }
                    p { (project.summary) }
                    ul.card-tags {
                        @for category in &project.category { li { (category) } }
                    }
                }
            }
            @if store.has_case_study(&project.slug) {
                a.case-study-link href=(Page::CaseStudyDetail { slug: project.slug.clone() }.href()) {
                    "Read case study"
                }
            }
        }
    }
}

fn metric_cards(metrics: &[Metric]) -> Markup {
    html! {
        div.metric-grid {
            @for metric in metrics {
                div.metric {
                    span.metric-value { (metric.value) }
                    span.metric-label { (metric.label) }
                    @if let Some(context) = &metric.context {
                        span.metric-context { (context) }
                    }
                }
            }
        }
    }
}

/// Numbered section header for case study narratives.
fn section_header(number: &str, kicker: &str, heading: &str) -> Markup {
    html! {
        header.section-header {
            span.section-kicker { (number) " / " (kicker) }
            h2 { (heading) }
        }
    }
}

fn not_found_content(kind: NotFoundKind) -> Markup {
    let (target, label) = kind.return_target();
    html! {
        section.not-found {
            p.not-found-message { (kind.message()) }
            a.back-link href=(target.href()) { (label) }
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

fn home_content(store: &ContentStore, config: &SiteConfig) -> Markup {
    let copy = store.copy();
    let hero = &copy.hero;
    let slides: Vec<Slide> = store
        .images_by_category("carousel")
        .iter()
        .map(|image| slide_for_image(store, &image.id))
        .collect();
    let featured = query::featured_projects(store.projects());

    html! {
        section.hero {
            h1 { (hero.tagline) }
            p.hero-subtext { (hero.subtext) }
            div.hero-description { (markdown(&hero.description)) }
            div.hero-ctas {
                @for cta in &hero.ctas {
                    a class=(cta.variant.css_class()) href=(Page::resolve(&cta.action, None).href()) {
                        (cta.label)
                    }
                }
            }
            div.hero-stats {
                @for stat in &hero.stats {
                    div.stat {
                        span.stat-value { (stat.value) }
                        span.stat-label { (stat.label) }
                    }
                }
            }
        }
        section.capabilities {
            @for capability in &hero.capabilities {
                div.capability {
                    span.capability-icon data-icon=(capability.icon) {}
                    h3 { (capability.title) }
                    p { (capability.description) }
                }
            }
        }
        @if !slides.is_empty() {
            section.showcase {
                (carousel_markup(&slides, &config.carousel.options()))
            }
        }
        section.featured-work {
            h2 { (label_or(&copy.labels.common, "featuredWork", "Featured Work")) }
            div.project-grid {
                @for project in featured {
                    (project_card(store, project))
                }
            }
            a.see-all href=(Page::Portfolio.href()) {
                (label_or(&copy.labels.buttons, "viewAll", "View all work"))
            }
        }
        section.trust-bar {
            h2 { (hero.trust_bar.title) }
            ul {
                @for client in &hero.trust_bar.clients { li { (client) } }
            }
        }
    }
}

fn about_content(store: &ContentStore) -> Markup {
    let copy = store.copy();
    let about = &copy.about;
    html! {
        section.about {
            h1 { (about.title) }
            div.about-introduction {
                @for paragraph in &about.introduction {
                    (markdown(paragraph))
                }
            }
        }
        section.principles {
            h2 { (about.principles_title) }
            div.principle-grid {
                @for principle in &about.principles {
                    div.principle {
                        span.principle-icon data-icon=(principle.icon) {}
                        h3 { (principle.title) }
                        p { (principle.description) }
                    }
                }
            }
        }
        section.skills {
            h2 { (about.skills_title) }
            @for category in store.skill_categories() {
                div.skill-category {
                    h3 { (category.category) }
                    ul {
                        @for skill in &category.skills {
                            li.skill {
                                span.skill-name { (skill.name) }
                                span.skill-years { (skill.years) }
                                div.skill-bar {
                                    div.skill-bar-fill style={ "width: " (skill.level) "%;" } {}
                                }
                            }
                        }
                    }
                }
            }
        }
        section.timeline {
            h2 { (about.timeline_title) }
            ol.timeline-list {
                @for (idx, entry) in store.timeline().iter().enumerate() {
                    li.timeline-entry.current[idx == 0] {
                        span.timeline-year { (entry.year) }
                        h3 { (entry.role) }
                        p.timeline-company { (entry.company) }
                        p { (entry.description) }
                        @if let Some(achievements) = &entry.achievements {
                            ul.achievements {
                                @for achievement in achievements { li { (achievement) } }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn portfolio_content(store: &ContentStore, selected_category: Option<&str>) -> Markup {
    let copy = store.copy();
    let portfolio = &copy.portfolio;
    let categories = query::categories(store.projects());
    let filter = ProjectFilter {
        category: selected_category.map(str::to_string),
        ..Default::default()
    };
    let projects = query::filter_projects(store.projects(), &filter);
    let total = store.projects().len();

    html! {
        section.portfolio {
            h1 { (portfolio.title) }
            p.portfolio-description { (portfolio.description) }
            div.filter-toolbar {
                span.filter-label { (portfolio.filter_label) }
                div.filter-group {
                    span.filter-group-label { (portfolio.category_label) }
                    ul.filter-options {
                        li class=[selected_category.is_none().then_some("current")] {
                            a href=(Page::Portfolio.href()) { "All" }
                        }
                        @for category in &categories {
                            @let current = selected_category == Some(category.as_str());
                            li class=[current.then_some("current")] {
                                a href=(category_href(category)) { (category) }
                            }
                        }
                    }
                }
                input.search type="search"
                    placeholder=(portfolio.search_placeholder)
                    aria-label=(portfolio.search_placeholder)
                    data-search-input="projects";
                @if selected_category.is_some() {
                    a.clear-filters href=(Page::Portfolio.href()) { (portfolio.clear_filters_label) }
                }
            }
            p.showing data-shown-count="" {
                (portfolio.showing_label) " " (projects.len()) " / " (total)
            }
            div.project-grid data-project-grid="" {
                @for project in &projects {
                    (project_card(store, project))
                }
            }
        }
    }
}

fn portfolio_detail_content(store: &ContentStore, project: &Project) -> Markup {
    let projects = store.projects();
    let position = projects
        .iter()
        .position(|p| p.slug == project.slug)
        .unwrap_or(0);
    let len = projects.len();
    let slides: Vec<Slide> = project
        .gallery_images()
        .iter()
        .map(|id| slide_for_image(store, id))
        .collect();
    // Galleries never auto-advance; only the settle guard applies
    let gallery_options = CarouselOptions::default();

    html! {
        a.back-link href=(Page::Portfolio.href()) { "Back to Portfolio" }
        article.project-detail {
            header.project-header {
                @if project.featured { span.badge { "Featured Project" } }
                h1 { (project.title) }
                p.project-summary { (project.summary) }
            }
            dl.project-meta {
                dt { "Industry" }
                dd { (project.industry) }
                dt { "Timeline" }
                dd { (project.timeline) }
                dt { "Platform" }
                dd { (project.platform.join(", ")) }
                dt { "Role" }
                dd { (project.role.join(", ")) }
                dt { "Team" }
                dd { (project.team) }
                @if let Some(status) = &project.status {
                    dt { "Status" }
                    dd { (status.label()) }
                }
            }
            section.gallery {
                (carousel_markup(&slides, &gallery_options))
            }
            @if !project.kpis.is_empty() {
                section.key-results {
                    h2 { "Key Results" }
                    ol.kpi-list {
                        @for kpi in &project.kpis { li { (kpi) } }
                    }
                }
            }
            section.technologies {
                h2 { "Technologies Used" }
                ul.tag-list {
                    @for tag in &project.tags { li { (tag) } }
                }
            }
            @if project.live_url.is_some() || project.prototype.is_some() || project.code_url.is_some() {
                section.project-links {
                    @if let Some(url) = &project.live_url {
                        a.cta-primary href=(url) target="_blank" rel="noopener noreferrer" { "View Live" }
                    }
                    @if let Some(url) = &project.prototype {
                        a.cta-secondary href=(url) target="_blank" rel="noopener noreferrer" { "View Prototype" }
                    }
                    @if let Some(url) = &project.code_url {
                        a.cta-secondary href=(url) target="_blank" rel="noopener noreferrer" { "View Code" }
                    }
                }
            }
            @if store.has_case_study(&project.slug) {
                a.case-study-cta href=(Page::CaseStudyDetail { slug: project.slug.clone() }.href()) {
                    "Read the full case study"
                }
            }
        }
        @if len > 1 {
            @let prev = &projects[previous_index(position, len)];
            @let next = &projects[next_index(position, len)];
            nav.sibling-nav {
                a.sibling-prev href=(Page::PortfolioDetail { slug: prev.slug.clone() }.href()) {
                    span.sibling-label { "Previous" }
                    span.sibling-title { (prev.title) }
                }
                a.sibling-next href=(Page::PortfolioDetail { slug: next.slug.clone() }.href()) {
                    span.sibling-label { "Next" }
                    span.sibling-title { (next.title) }
                }
            }
        }
    }
}

fn case_studies_content(store: &ContentStore) -> Markup {
    let page_meta = store.page_meta("case-studies");
    html! {
        section.case-studies {
            h1 { "Case Studies" }
            p.case-studies-description { (page_meta.description) }
            div.case-study-grid {
                @for study in store.case_studies() {
                    @let detail = Page::CaseStudyDetail { slug: study.slug.clone() };
                    article.case-study-card {
                        a.card-link href=(detail.href()) {
                            img src=(store.image_url(&study.hero.image)) alt=(store.image_alt(&study.hero.image)) loading="lazy";
                            div.card-body {
                                h3 { (study.title) }
                                p { (study.hero.tagline) }
                                (metric_cards(&study.hero.metrics[..study.hero.metrics.len().min(2)]))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn case_study_detail_content(store: &ContentStore, study: &CaseStudy) -> Markup {
    let studies = store.case_studies();
    let position = studies
        .iter()
        .position(|cs| cs.slug == study.slug)
        .unwrap_or(0);
    let len = studies.len();
    let sections = &study.sections;
    let design = &sections.design;
    let has_design_artifacts =
        design.wireframes.is_some() || design.system.is_some() || design.process.is_some();

    html! {
        a.back-link href=(Page::CaseStudies.href()) { "Back to Case Studies" }
        article.case-study-detail {
            header.case-study-hero style={ "background-image: url('" (store.image_url(&study.hero.image)) "');" } {
                div.hero-overlay {
                    h1 { (study.title) }
                    p.tagline { (study.hero.tagline) }
                    (metric_cards(&study.hero.metrics))
                }
            }
            dl.case-study-meta {
                dt { "Role" }
                dd { (study.metadata.role.join(", ")) }
                dt { "Timeline" }
                dd { (study.metadata.timeline) }
                dt { "Team" }
                dd { (study.metadata.team) }
                dt { "Platform" }
                dd { (study.metadata.platform.join(", ")) }
                dt { "Tools" }
                dd { (study.metadata.tools.join(", ")) }
            }
            section.problem {
                (section_header("01", "Problem", "The Challenge"))
                div.prose { (markdown(&sections.problem)) }
            }
            section.research {
                (section_header("02", "Research", "Discovery & Insights"))
                h3 { "Research Methods" }
                ol.method-list {
                    @for method in &sections.research.methods { li { (method) } }
                }
                h3 { "Key Insights" }
                ul.insight-list {
                    @for insight in &sections.research.insights { li { (insight) } }
                }
            }
            section.solution {
                (section_header("03", "Solution", "The Approach"))
                div.prose { (markdown(&sections.solution.approach)) }
                h3 { "Key Features" }
                ul.feature-list {
                    @for feature in &sections.solution.key_features { li { (feature) } }
                }
            }
            @if has_design_artifacts {
                section.design {
                    (section_header("04", "Design", "Artifacts & Process"))
                    div.artifact-grid {
                        @if let Some(id) = &design.wireframes {
                            figure {
                                img src=(store.image_url(id)) alt=(store.image_alt(id)) loading="lazy";
                                figcaption { "Wireframes" }
                            }
                        }
                        @if let Some(id) = &design.system {
                            figure {
                                img src=(store.image_url(id)) alt=(store.image_alt(id)) loading="lazy";
                                figcaption { "Design System" }
                            }
                        }
                        @if let Some(id) = &design.process {
                            figure {
                                img src=(store.image_url(id)) alt=(store.image_alt(id)) loading="lazy";
                                figcaption { "Process" }
                            }
                        }
                    }
                }
            }
            section.results {
                (section_header("05", "Results", "Impact"))
                (metric_cards(&sections.results.metrics))
                @if let Some(testimonial) = &sections.results.testimonial {
                    blockquote.testimonial {
                        p { (testimonial.quote) }
                        footer {
                            (testimonial.author) ", " (testimonial.role)
                            @if let Some(company) = &testimonial.company { ", " (company) }
                        }
                    }
                }
            }
            section.learnings {
                (section_header("06", "Learnings", "What I Took Away"))
                ol.learning-list {
                    @for learning in &sections.learnings { li { (learning) } }
                }
            }
        }
        @if len > 1 {
            @let prev = &studies[previous_index(position, len)];
            @let next = &studies[next_index(position, len)];
            nav.sibling-nav {
                a.sibling-prev href=(Page::CaseStudyDetail { slug: prev.slug.clone() }.href()) {
                    span.sibling-label { "Previous" }
                    span.sibling-title { (prev.title) }
                }
                a.sibling-next href=(Page::CaseStudyDetail { slug: next.slug.clone() }.href()) {
                    span.sibling-label { "Next" }
                    span.sibling-title { (next.title) }
                }
            }
        }
    }
}

fn contact_content(store: &ContentStore, config: &SiteConfig) -> Markup {
    let copy = store.copy();
    let contact = &copy.contact;
    let author = &config.author;

    html! {
        section.contact {
            h1 { (contact.title) }
            p.contact-description { (contact.description) }
            div.contact-grid {
                div.contact-info {
                    h2 { "Get in Touch" }
                    ul.contact-channels {
                        li {
                            span.channel-label { "Email" }
                            a href={ "mailto:" (author.email) } { (author.email) }
                        }
                        @if !author.phone.is_empty() {
                            li {
                                span.channel-label { "Phone" }
                                a href={ "tel:" (author.phone) } { (author.phone) }
                            }
                        }
                        @if !author.location.is_empty() {
                            li {
                                span.channel-label { "Location" }
                                span { (author.location) }
                            }
                        }
                    }
                    h3 { (contact.quick_actions_title) }
                    ul.quick-actions {
                        li {
                            a.cta-primary href={ "mailto:" (author.email) } {
                                (label_or(&copy.labels.buttons, "bookCall", "Book an intro call"))
                            }
                        }
                        li {
                            a.cta-secondary href="/assets/resume.pdf" {
                                (label_or(&copy.labels.buttons, "resume", "Download resume"))
                            }
                        }
                    }
                    h3 { (contact.social_title) }
                    ul.social-links {
                        @for link in &config.social {
                            li {
                                a href=(link.url) target="_blank" rel="noopener" {
                                    (link.platform) " (" (link.username) ")"
                                }
                            }
                        }
                    }
                    h3 { (contact.availability_title) }
                    p.availability-status { (contact.availability_status) }
                    p { (contact.availability_message) }
                }
                div.contact-form {
                    h2 { (contact.form_title) }
                    p { (contact.form_description) }
                    form data-contact-form="" action="#" method="post" {
                        @for spec in form::FIELDS {
                            @let field_label = label_or(&copy.labels.form, spec.label_key, spec.label_key);
                            div.form-field {
                                label for=(spec.name) {
                                    (field_label)
                                    @if spec.required { span.required-mark { " *" } }
                                }
                                @match spec.kind {
                                    FieldKind::Textarea => {
                                        textarea id=(spec.name) name=(spec.name) rows="5" required[spec.required] {}
                                    }
                                    FieldKind::Email => {
                                        input type="email" id=(spec.name) name=(spec.name) required[spec.required];
                                    }
                                    FieldKind::Text => {
                                        input type="text" id=(spec.name) name=(spec.name) required[spec.required];
                                    }
                                }
                            }
                        }
                        button.cta-primary type="submit" {
                            (label_or(&copy.labels.buttons, "send", "Send Message"))
                        }
                        p.form-ack hidden data-form-ack=(form::ACK_RESET.as_millis()) {
                            (label_or(&copy.labels.form, "success", "Thanks! Your message has been sent."))
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::test_helpers::sample_store;

    fn render(page: &Page) -> String {
        let store = sample_store();
        let config = SiteConfig::default();
        render_page(&store, &config, "/style-test.css", page).into_string()
    }

    #[test]
    fn nav_marks_current_page() {
        let html = render(&Page::Portfolio);
        assert!(html.contains(r#"class="current""#));
        assert!(html.contains(r#"href="/portfolio/""#));
    }

    #[test]
    fn home_page_includes_carousel_with_timing() {
        let html = render(&Page::Home);
        assert!(html.contains("data-interval=\"6000\""));
        assert!(html.contains("data-settle=\"300\""));
        assert!(html.contains("data-autoplay=\"true\""));
        assert!(html.contains("carousel-track"));
    }

    #[test]
    fn home_page_lists_featured_projects_only() {
        let store = sample_store();
        let html = render(&Page::Home);
        for project in store.projects() {
            if project.featured {
                assert!(html.contains(&project.title), "{}", project.title);
            }
        }
    }

    #[test]
    fn portfolio_toolbar_prepends_all_sentinel() {
        let html = render(&Page::Portfolio);
        assert!(html.contains(">All<"));
        assert!(html.contains("/portfolio/category/apps/"));
    }

    #[test]
    fn category_page_marks_selection_and_filters() {
        let store = sample_store();
        let config = SiteConfig::default();
        let html =
            render_category_page(&store, &config, "/style-test.css", "Apps").into_string();
        // Only the two Apps projects appear in the grid
        assert!(html.contains("Nova Banking"));
        assert!(html.contains("Atlas Health"));
        assert!(!html.contains("Meridian Campaign"));
    }

    #[test]
    fn unknown_project_slug_renders_not_found_with_escape() {
        let html = render(&Page::PortfolioDetail {
            slug: "nonexistent-slug".into(),
        });
        assert!(html.contains("Project not found"));
        assert!(html.contains(r#"href="/portfolio/""#));
    }

    #[test]
    fn unknown_case_study_slug_renders_not_found_with_escape() {
        let html = render(&Page::CaseStudyDetail {
            slug: "nonexistent-slug".into(),
        });
        assert!(html.contains("Case study not found"));
        assert!(html.contains(r#"href="/case-studies/""#));
    }

    #[test]
    fn not_found_page_returns_home() {
        let html = render(&Page::NotFound);
        assert!(html.contains("Page not found"));
        assert!(html.contains(r#"href="/""#));
    }

    #[test]
    fn detail_page_sibling_links_wrap_around() {
        let store = sample_store();
        let first = &store.projects()[0];
        let last = &store.projects()[store.projects().len() - 1];
        let html = render(&Page::PortfolioDetail {
            slug: first.slug.clone(),
        });
        // Previous of the first project is the last project
        assert!(html.contains(&format!("/portfolio/{}/", last.slug)));
    }

    #[test]
    fn missing_cover_uses_fallback_url() {
        let store = sample_store();
        // The sample data gives one project a dangling cover id
        let dangling = store
            .projects()
            .iter()
            .find(|p| store.image(&p.cover).is_none())
            .expect("sample data has a project with a dangling cover");
        let html = render(&Page::PortfolioDetail {
            slug: dangling.slug.clone(),
        });
        // Compare on a query-free fragment: attribute values escape '&'
        let fragment = crate::store::FALLBACK_IMAGE_URL
            .split('?')
            .next()
            .unwrap();
        assert!(html.contains(fragment));
    }

    #[test]
    fn case_study_detail_renders_all_sections() {
        let store = sample_store();
        let study = &store.case_studies()[0];
        let html = render(&Page::CaseStudyDetail {
            slug: study.slug.clone(),
        });
        // Ampersands are escaped by maud, hence &amp; in the expectation
        for heading in [
            "The Challenge",
            "Discovery &amp; Insights",
            "The Approach",
            "Impact",
            "What I Took Away",
        ] {
            assert!(html.contains(heading), "{heading}");
        }
    }

    #[test]
    fn gallery_single_image_has_no_controls() {
        let store = sample_store();
        let single = store
            .projects()
            .iter()
            .find(|p| p.gallery_images().len() == 1)
            .expect("sample data has a project without a gallery");
        let html = render(&Page::PortfolioDetail {
            slug: single.slug.clone(),
        });
        assert!(!html.contains("carousel-control"));
    }

    #[test]
    fn contact_form_fields_match_specs() {
        let html = render(&Page::Contact);
        for spec in form::FIELDS {
            assert!(html.contains(&format!(r#"name="{}""#, spec.name)), "{}", spec.name);
        }
        // Required markers on required fields only
        assert!(html.contains("required"));
        assert!(html.contains(&format!("data-form-ack=\"{}\"", form::ACK_RESET.as_millis())));
    }

    #[test]
    fn maud_escapes_html_in_content() {
        let mut config = SiteConfig::default();
        config.name = "<script>alert('xss')</script>".into();
        let html = site_header(&config, "").into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn about_page_renders_skills_and_timeline() {
        let store = sample_store();
        let html = render(&Page::About);
        for category in store.skill_categories() {
            assert!(html.contains(&category.category), "{}", category.category);
        }
        // Level bars use percentage widths
        assert!(html.contains("width: "));
        // First timeline entry is marked current
        assert!(html.contains("timeline-entry current") || html.contains(r#"class="timeline-entry current""#));
    }
}
