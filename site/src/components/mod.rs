//! Leptos UI components for rendering the landing page.
//!
//! Each component is a Leptos `#[component]` function rendered once
//! through SSR. There are no signals and no hydration.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── Nav
//! ├── Hero ── FeatureCard (compact) x N
//! ├── SocialProof
//! ├── Services ── FeatureCard x N, PackageCard x N
//! ├── Process ── FeatureCard (stacked) x N
//! ├── Outcomes
//! ├── Testimonials
//! ├── Faq
//! ├── Contact ── ContactForm, FeatureCard (compact) x N
//! └── Footer
//! ```
//!
//! Every section body sits inside a [`Section`] wrapper.
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_site`], but can be
//! rendered on their own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use officewise_site::components::{FeatureCard, Section};
//!
//! view! {
//!     <Section id=Some("services".to_string()) title=Some("Services".to_string())>
//!         <FeatureCard feature=my_feature />
//!     </Section>
//! }
//! ```

mod contact;
mod document;
mod feature_card;
mod footer;
mod hero;
mod icons;
mod nav;
mod primitives;
mod process;
mod section;
mod services;
mod testimonials;

pub use contact::{Contact, ContactForm};
pub use document::{PAGE_ORDER, PagePart, SiteDocument, content_security_policy, page_anchors};
pub use feature_card::{CardVariant, FeatureCard};
pub use footer::Footer;
pub use hero::{Hero, SocialProof};
pub use icons::{Icon, glyph_path};
pub use nav::Nav;
pub use primitives::{Card, CheckList, ExternalLink};
pub use process::{Outcomes, Process};
pub use section::Section;
pub use services::Services;
pub use testimonials::{Faq, Testimonials};
