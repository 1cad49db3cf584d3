//! Content data types for the landing page.
//!
//! Every section of the page is driven by one of these structs. They're
//! designed to be:
//!
//! - **Serializable** - Copy can be overridden from a TOML file via serde
//! - **Clone-friendly** - Components take owned values without borrowing issues
//! - **Default-able** - `Default` yields the published OfficeWise copy, so a
//!   partial override only needs the tables it changes
//!
//! # Example
//!
//! ```rust
//! use officewise_site::types::{SiteContent, Testimonial};
//!
//! let mut content = SiteContent::default();
//! content.testimonials.testimonials = vec![Testimonial {
//!     quote: "Our month-end close takes two days now.".into(),
//!     attribution: "Controller, logistics".into(),
//! }];
//! assert_eq!(content.testimonials.testimonials.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Glyph shown inside cards, buttons and list bullets.
///
/// Each variant maps to inline SVG path data in
/// [`crate::components::glyph_path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// Robot head
    Bot,
    /// Connected boxes
    Workflow,
    /// Processor chip
    Cpu,
    /// Trend line over axes
    LineChart,
    /// Four-point sparkle
    Sparkles,
    /// Wrench
    Wrench,
    /// Shield outline
    Shield,
    /// Envelope
    Mail,
    /// Right arrow
    ArrowRight,
    /// Document with lines
    FileText,
    /// Handshake
    Handshake,
    /// Speedometer
    Gauge,
    /// Cog
    Settings,
    /// Rocket
    Rocket,
    /// Check mark
    Check,
}

/// Icon + title + description. The unit rendered by `FeatureCard`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Glyph shown in the card header
    pub icon: Glyph,
    /// Card heading
    pub title: String,
    /// Body copy
    pub description: String,
}

impl Feature {
    /// Shorthand used by the default content tables.
    pub fn new(icon: Glyph, title: &str, description: &str) -> Self {
        Self {
            icon,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// In-page navigation link. `target` is a section anchor without the `#`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible link text
    pub label: String,
    /// Anchor id of the section this link scrolls to
    pub target: String,
}

impl NavLink {
    /// Build a link to `#target`.
    pub fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target: target.to_string(),
        }
    }

    /// The `href` value, e.g. `#services`.
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// A client quote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// The quote body, rendered inside typographic quotes
    pub quote: String,
    /// Who said it (kept anonymous on the published page)
    pub attribution: String,
}

/// One question/answer pair in the FAQ grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question, rendered as the card title
    pub question: String,
    /// Answer body
    pub answer: String,
}

/// Headline metric in the outcomes section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Large figure, e.g. `~2 weeks`
    pub metric: String,
    /// What the figure means
    pub caption: String,
}

/// A priced engagement shown under the services grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePackage {
    /// Package name and duration
    pub name: String,
    /// One-paragraph pitch
    pub summary: String,
    /// Checklist of what the client gets
    pub deliverables: Vec<String>,
}

/// HTML input type for a contact field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text
    #[default]
    Text,
    /// Email address (browser-native validation only)
    Email,
}

impl FieldKind {
    /// Value of the `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
        }
    }
}

/// One input of the contact form. `name` is the submitted field key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactField {
    /// Form field key sent to the collection endpoint
    pub name: String,
    /// Visible label
    pub label: String,
    /// Placeholder text inside the input
    pub placeholder: String,
    /// Input type
    #[serde(default)]
    pub kind: FieldKind,
}

impl ContactField {
    /// Plain text field.
    pub fn text(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            kind: FieldKind::Text,
        }
    }

    /// Email field.
    pub fn email(name: &str, label: &str, placeholder: &str) -> Self {
        Self {
            kind: FieldKind::Email,
            ..Self::text(name, label, placeholder)
        }
    }
}

/// Hero block: headline, pitch, checklist and the showcase grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    /// First half of the headline
    pub headline: String,
    /// Highlighted second half of the headline
    pub accent: String,
    /// Paragraph under the headline
    pub lede: String,
    /// Short selling points with check marks
    pub checklist: Vec<String>,
    /// Label of the primary call-to-action (opens the scheduling service)
    pub primary_cta: String,
    /// Secondary call-to-action, an in-page link
    pub secondary_cta: NavLink,
    /// Small print under the buttons
    pub location: String,
    /// Cards in the right-hand showcase grid
    pub showcase: Vec<Feature>,
}

/// Services section: main grid, spotlight, custom solutions and packages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesContent {
    /// Section heading
    pub title: Option<String>,
    /// Section subheading
    pub subtitle: Option<String>,
    /// Main service grid
    pub features: Vec<Feature>,
    /// Centered card under the grid
    pub spotlight: Option<Feature>,
    /// Heading of the custom solutions block
    pub custom_title: String,
    /// Intro paragraph of the custom solutions block
    pub custom_intro: String,
    /// Real-world custom tooling examples
    pub custom_solutions: Vec<Feature>,
    /// Heading of the packages block
    pub packages_title: String,
    /// Engagement packages
    pub packages: Vec<ServicePackage>,
}

/// Process timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessContent {
    /// Section heading
    pub title: Option<String>,
    /// Section subheading
    pub subtitle: Option<String>,
    /// Steps in order
    pub steps: Vec<Feature>,
}

/// Outcome metrics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutcomesContent {
    /// Section heading
    pub title: Option<String>,
    /// Section subheading
    pub subtitle: Option<String>,
    /// Metric cards
    pub outcomes: Vec<Outcome>,
}

/// Client quotes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsContent {
    /// Section heading
    pub title: Option<String>,
    /// Section subheading
    pub subtitle: Option<String>,
    /// Quote cards
    pub testimonials: Vec<Testimonial>,
}

/// Frequently asked questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqContent {
    /// Section heading
    pub title: Option<String>,
    /// Section subheading
    pub subtitle: Option<String>,
    /// Question cards
    pub entries: Vec<FaqEntry>,
}

/// Contact section: the form and the reassurance column beside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    /// Section heading
    pub title: Option<String>,
    /// Section subheading
    pub subtitle: Option<String>,
    /// Form inputs, in render order
    pub fields: Vec<ContactField>,
    /// Submit button label
    pub submit_label: String,
    /// Small print under the form
    pub consent: String,
    /// Reassurance points beside the form
    pub points: Vec<Feature>,
}

/// All copy on the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// Brand name shown in nav and footer
    pub brand: String,
    /// Top navigation links
    pub nav: Vec<NavLink>,
    /// Ghost button in the nav bar (usually `#contact`)
    pub nav_contact: NavLink,
    /// Label of the nav call-to-action (opens the scheduling service)
    pub nav_cta: String,
    /// Footer links
    pub footer_links: Vec<NavLink>,
    /// Hero block
    pub hero: HeroContent,
    /// Social-proof strip lines
    pub social_proof: Vec<String>,
    /// Services section
    pub services: ServicesContent,
    /// Process section
    pub process: ProcessContent,
    /// Outcomes section
    pub outcomes: OutcomesContent,
    /// Testimonials section
    pub testimonials: TestimonialsContent,
    /// FAQ section
    pub faq: FaqContent,
    /// Contact section
    pub contact: ContactContent,
}

impl SiteContent {
    /// All links that point into the page (nav, nav contact button, hero, footer).
    pub fn internal_links(&self) -> impl Iterator<Item = &NavLink> {
        self.nav
            .iter()
            .chain(std::iter::once(&self.nav_contact))
            .chain(std::iter::once(&self.hero.secondary_cta))
            .chain(self.footer_links.iter())
    }
}
