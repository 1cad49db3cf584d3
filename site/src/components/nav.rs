use leptos::prelude::*;

use super::{ExternalLink, Icon};
use crate::types::{Glyph, NavLink};

/// Sticky top bar: brand, in-page links, contact button and the audit CTA.
#[component]
pub fn Nav(
    brand: String,
    links: Vec<NavLink>,
    contact: NavLink,
    cta_label: String,
    scheduling_url: String,
) -> impl IntoView {
    let contact_href = contact.href();

    view! {
        <header class="nav">
            <div class="container nav-inner">
                <a href="#" class="nav-brand">
                    <span class="brand-mark">
                        <Icon glyph=Glyph::Sparkles size="16" />
                    </span>
                    <span class="nav-title">{brand}</span>
                </a>
                <nav class="nav-links" aria-label="Sections">
                    {links.into_iter().map(|link| {
                        let href = link.href();
                        view! { <a href=href class="nav-link">{link.label}</a> }
                    }).collect::<Vec<_>>()}
                </nav>
                <div class="nav-actions">
                    <a href=contact_href class="btn btn-ghost">{contact.label}</a>
                    <ExternalLink href=scheduling_url class="btn btn-primary">
                        {cta_label}
                    </ExternalLink>
                </div>
            </div>
        </header>
    }
}
