//! Root document component - the complete HTML page.
//!
//! The page is a fixed vertical sequence of parts; [`PAGE_ORDER`] is the
//! only place that order is declared.

use leptos::prelude::*;

use super::{Contact, Faq, Footer, Hero, Nav, Outcomes, Process, Services, SocialProof, Testimonials};
use crate::config::SiteConfig;
use crate::styles::SITE_CSS;
use crate::types::SiteContent;

/// One top-level block of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PagePart {
    /// Sticky nav bar
    Nav,
    /// Headline and showcase
    Hero,
    /// Trust strip
    SocialProof,
    /// `#services`
    Services,
    /// `#process`
    Process,
    /// `#results`
    Outcomes,
    /// Client quotes
    Testimonials,
    /// `#faq`
    Faq,
    /// `#contact`
    Contact,
    /// Footer
    Footer,
}

/// Render order of the page, top to bottom.
pub const PAGE_ORDER: [PagePart; 10] = [
    PagePart::Nav,
    PagePart::Hero,
    PagePart::SocialProof,
    PagePart::Services,
    PagePart::Process,
    PagePart::Outcomes,
    PagePart::Testimonials,
    PagePart::Faq,
    PagePart::Contact,
    PagePart::Footer,
];

impl PagePart {
    /// Anchor id the part renders with, if in-page links may target it.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            PagePart::Services => Some("services"),
            PagePart::Process => Some("process"),
            PagePart::Outcomes => Some("results"),
            PagePart::Faq => Some("faq"),
            PagePart::Contact => Some("contact"),
            PagePart::Nav
            | PagePart::Hero
            | PagePart::SocialProof
            | PagePart::Testimonials
            | PagePart::Footer => None,
        }
    }
}

/// Every anchor id on the page, in page order.
pub fn page_anchors() -> impl Iterator<Item = &'static str> {
    PAGE_ORDER.iter().filter_map(|part| part.anchor())
}

/// Content-Security-Policy for the static page.
///
/// No scripts, inline styles only, and form posts restricted to the
/// configured endpoint's origin.
pub fn content_security_policy(config: &SiteConfig) -> String {
    let form_action = config.form_origin().unwrap_or_else(|| "'none'".to_string());
    format!(
        "default-src 'none'; style-src 'unsafe-inline'; img-src data:; \
         base-uri 'none'; form-action {form_action}"
    )
}

/// The complete HTML document.
#[component]
pub fn SiteDocument(config: SiteConfig, content: SiteContent) -> impl IntoView {
    let csp = content_security_policy(&config);
    let year = config.year();
    let parts = PAGE_ORDER
        .iter()
        .map(|part| render_part(*part, &config, &content, year))
        .collect::<Vec<_>>();

    view! {
        <html lang=config.lang.clone()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=config.description.clone() />
                <meta http-equiv="Content-Security-Policy" content=csp />
                <title>{config.title.clone()}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <div class="page">{parts}</div>
            </body>
        </html>
    }
}

fn render_part(part: PagePart, config: &SiteConfig, content: &SiteContent, year: i32) -> AnyView {
    match part {
        PagePart::Nav => view! {
            <Nav
                brand=content.brand.clone()
                links=content.nav.clone()
                contact=content.nav_contact.clone()
                cta_label=content.nav_cta.clone()
                scheduling_url=config.scheduling_url.clone()
            />
        }
        .into_any(),
        PagePart::Hero => view! {
            <Hero hero=content.hero.clone() scheduling_url=config.scheduling_url.clone() />
        }
        .into_any(),
        PagePart::SocialProof => view! { <SocialProof lines=content.social_proof.clone() /> }.into_any(),
        PagePart::Services => view! { <Services services=content.services.clone() /> }.into_any(),
        PagePart::Process => view! { <Process process=content.process.clone() /> }.into_any(),
        PagePart::Outcomes => view! { <Outcomes outcomes=content.outcomes.clone() /> }.into_any(),
        PagePart::Testimonials => {
            view! { <Testimonials testimonials=content.testimonials.clone() /> }.into_any()
        }
        PagePart::Faq => view! { <Faq faq=content.faq.clone() /> }.into_any(),
        PagePart::Contact => view! {
            <Contact contact=content.contact.clone() form_action=config.form_action.clone() />
        }
        .into_any(),
        PagePart::Footer => view! {
            <Footer brand=content.brand.clone() year=year links=content.footer_links.clone() />
        }
        .into_any(),
    }
}
