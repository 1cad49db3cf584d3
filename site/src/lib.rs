//! # officewise-site
//!
//! Leptos SSR renderer for the OfficeWise AI landing page.
//!
//! The page is a fixed sequence of presentational components filled with
//! static copy, rendered once to a self-contained HTML document with
//! [Leptos](https://leptos.dev/) server-side rendering. The contact form
//! is a plain HTML POST to a third-party form-collection endpoint.
//!
//! ## Quick Start
//!
//! ```rust
//! use officewise_site::{render_site, SiteConfig, types::SiteContent};
//!
//! let config = SiteConfig {
//!     copyright_year: Some(2025),
//!     ..Default::default()
//! };
//! let html = render_site(&config, &SiteContent::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="contact""#));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content data structures
//! - [`content`] - The published copy (`Default` impls), TOML overrides
//! - [`config`] - Outbound URLs and document metadata
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constant
//! - [`lint`] - Checks over config and content
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is involved.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod config;
pub mod content;
mod error;
pub mod lint;
pub mod styles;
pub mod types;

use std::path::{Path, PathBuf};

use components::SiteDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use config::SiteConfig;
pub use error::SiteError;
use types::SiteContent;

/// File name written by [`write_site`].
pub const INDEX_FILE: &str = "index.html";

/// Render the complete landing page.
///
/// Returns a full HTML document including `<!DOCTYPE html>`. Rendering
/// never fails; run [`lint::check`] first to catch dangling links or a bad
/// form endpoint.
///
/// # Example
///
/// ```rust
/// use officewise_site::{render_site, SiteConfig, types::SiteContent};
///
/// let html = render_site(&SiteConfig::default(), &SiteContent::default());
/// assert!(html.contains(r#"method="POST""#));
/// ```
pub fn render_site(config: &SiteConfig, content: &SiteContent) -> String {
    let doc = view! {
        <SiteDocument config=config.clone() content=content.clone() />
    };

    let html = doc.to_html();
    tracing::debug!(
        bytes = html.len(),
        services = content.services.features.len(),
        testimonials = content.testimonials.testimonials.len(),
        "rendered site"
    );

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the page and write it to `out_dir/index.html`.
///
/// Creates `out_dir` if needed and returns the written path.
pub fn write_site(
    config: &SiteConfig,
    content: &SiteContent,
    out_dir: &Path,
) -> Result<PathBuf, SiteError> {
    std::fs::create_dir_all(out_dir).map_err(|source| SiteError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let path = out_dir.join(INDEX_FILE);
    let html = render_site(config, content);
    std::fs::write(&path, &html).map_err(|source| SiteError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!("wrote {} ({} bytes)", path.display(), html.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::{Feature, Glyph, Testimonial};

    fn config() -> SiteConfig {
        SiteConfig {
            copyright_year: Some(2025),
            ..Default::default()
        }
    }

    fn render(content: &SiteContent) -> String {
        render_site(&config(), content)
    }

    /// Byte range of the `<section id="...">` element with the given anchor.
    fn section_html<'a>(html: &'a str, anchor: &str) -> &'a str {
        let start = html
            .find(&format!(r#"id="{anchor}""#))
            .unwrap_or_else(|| panic!("no section #{anchor}"));
        let end = html[start..]
            .find("</section>")
            .map(|offset| start + offset)
            .expect("unterminated section");
        &html[start..end]
    }

    fn assert_in_order(haystack: &str, needles: &[&str]) {
        let mut last = 0;
        for needle in needles {
            let pos = haystack[last..]
                .find(needle)
                .unwrap_or_else(|| panic!("`{needle}` missing or out of order"));
            last += pos + needle.len();
        }
    }

    #[test]
    fn renders_full_document() {
        let html = render(&SiteContent::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>OfficeWise AI | Practical AI automation</title>"));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("2025 OfficeWise AI. All rights reserved."));
    }

    #[test]
    fn each_nav_anchor_has_exactly_one_section() {
        let html = render(&SiteContent::default());

        for anchor in ["services", "process", "results", "faq", "contact"] {
            assert_eq!(
                html.matches(&format!(r#"id="{anchor}""#)).count(),
                1,
                "anchor #{anchor}"
            );
            assert!(html.contains(&format!(r##"href="#{anchor}""##)));
        }
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = render(&SiteContent::default());

        assert_in_order(
            &html,
            &[
                r#"<header class="nav">"#,
                r#"class="section hero""#,
                r#"class="section social-proof""#,
                r#"id="services""#,
                r#"id="process""#,
                r#"id="results""#,
                r#"class="section testimonials""#,
                r#"id="faq""#,
                r#"id="contact""#,
                r#"<footer class="footer">"#,
            ],
        );
    }

    #[test]
    fn services_grid_matches_content_by_position() {
        let content = SiteContent::default();
        let html = render(&content);
        let services = section_html(&html, "services");
        let grid_start = services.find("services-grid").expect("services grid");
        let grid_end = services.find(r#"class="spotlight""#).expect("spotlight");
        let grid = &services[grid_start..grid_end];

        assert_eq!(content.services.features.len(), 6);
        assert_eq!(grid.matches(r#"<article class="feature-card">"#).count(), 6);

        for (idx, feature) in content.services.features.iter().enumerate() {
            let title = format!(
                r#"<h3 class="feature-title">{}</h3>"#,
                feature.title.replace('&', "&amp;")
            );
            let nth = grid
                .match_indices(r#"<article class="feature-card">"#)
                .nth(idx)
                .map(|(pos, _)| pos)
                .expect("card");
            let card = &grid[nth..];
            assert!(card.starts_with(r#"<article class="feature-card">"#));
            assert!(card.contains(&title), "card {idx} title");
            let card_end = card.find("</article>").expect("card end");
            let description = feature.description.replace('&', "&amp;");
            assert!(card[..card_end].contains(&description), "card {idx} description");
        }
    }

    #[test]
    fn process_steps_render_in_order() {
        let content = SiteContent::default();
        let html = render(&content);
        let process = section_html(&html, "process");

        assert_eq!(process.matches(r#"<li class="process-step">"#).count(), 4);
        assert_in_order(
            process,
            &["1) Audit", "2) Design", "3) Build", "4) Launch"],
        );
    }

    #[test]
    fn faq_renders_one_card_per_entry() {
        let content = SiteContent::default();
        let html = render(&content);
        let faq = section_html(&html, "faq");

        assert_eq!(faq.matches(r#"class="card faq-card""#).count(), content.faq.entries.len());
        assert_in_order(
            faq,
            &["Which tools and stacks", "How do you handle security?", "Pricing?"],
        );
    }

    #[test]
    fn testimonials_render_in_order() {
        let mut content = SiteContent::default();
        content.testimonials.testimonials = ["first quote", "second quote", "third quote"]
            .into_iter()
            .map(|quote| Testimonial {
                quote: quote.into(),
                attribution: "Ops lead".into(),
            })
            .collect();
        let html = render(&content);

        assert_eq!(html.matches(r#"class="card testimonial-card""#).count(), 3);
        assert_in_order(&html, &["first quote", "second quote", "third quote"]);
        assert!(html.contains("\u{201c}first quote\u{201d}"));
    }

    #[test]
    fn empty_testimonials_keep_heading() {
        let mut content = SiteContent::default();
        content.testimonials.testimonials.clear();
        let html = render(&content);

        assert!(html.contains("What clients say"));
        assert!(html.contains("Short, honest notes from the teams we help."));
        assert_eq!(html.matches(r#"class="card testimonial-card""#).count(), 0);
    }

    #[test]
    fn empty_services_render_no_cards() {
        let mut content = SiteContent::default();
        content.services.features.clear();
        content.services.spotlight = None;
        let html = render(&content);
        let services = section_html(&html, "services");

        assert!(services.contains("What we can do for you"));
        assert!(!services.contains(r#"class="spotlight""#));
        let grid_start = services.find("services-grid").expect("services grid");
        let grid_end = services.find("subsection").expect("subsection");
        assert!(!services[grid_start..grid_end].contains("<article"));
    }

    #[test]
    fn contact_form_posts_to_config_endpoint() {
        let config = SiteConfig {
            form_action: "https://forms.example.com/f/xyz".into(),
            copyright_year: Some(2025),
            ..Default::default()
        };
        let html = render_site(&config, &SiteContent::default());
        let contact = section_html(&html, "contact");

        assert!(contact.contains(r#"action="https://forms.example.com/f/xyz""#));
        assert!(contact.contains(r#"method="POST""#));
        assert_eq!(contact.matches("<input").count(), 5);
        assert_eq!(contact.matches(r#"type="submit""#).count(), 1);
        assert!(html.contains("form-action https://forms.example.com"));
    }

    #[test]
    fn scheduling_links_open_new_context() {
        let config = SiteConfig {
            scheduling_url: "https://cal.example.com/intro".into(),
            copyright_year: Some(2025),
            ..Default::default()
        };
        let html = render_site(&config, &SiteContent::default());

        let href = r#"href="https://cal.example.com/intro""#;
        let anchors: Vec<&str> = html
            .match_indices(href)
            .map(|(pos, _)| {
                let end = html[pos..].find('>').expect("tag end");
                &html[pos..pos + end]
            })
            .collect();

        // Nav CTA and hero CTA
        assert_eq!(anchors.len(), 2);
        for tag in anchors {
            assert!(tag.contains(r#"target="_blank""#));
            assert!(tag.contains(r#"rel="noopener noreferrer""#));
        }
    }

    #[test]
    fn custom_card_copy_is_rendered_verbatim() {
        let mut content = SiteContent::default();
        content.services.features = vec![Feature::new(
            Glyph::Wrench,
            "Payroll Bot",
            "Runs payroll checks nightly.",
        )];
        let html = render(&content);

        assert!(html.contains(r#"<h3 class="feature-title">Payroll Bot</h3>"#));
        assert!(html.contains("Runs payroll checks nightly."));
    }

    #[test]
    fn write_site_creates_index() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let path = write_site(&config(), &SiteContent::default(), &out).expect("write site");
        assert_eq!(path, out.join(INDEX_FILE));

        let written = std::fs::read_to_string(&path).expect("read index");
        assert!(written.starts_with("<!DOCTYPE html>"));
    }
}
