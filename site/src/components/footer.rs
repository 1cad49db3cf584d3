use leptos::prelude::*;

use super::Icon;
use crate::types::{Glyph, NavLink};

/// Brand, copyright line and a short link row.
#[component]
pub fn Footer(brand: String, year: i32, links: Vec<NavLink>) -> impl IntoView {
    let copyright = format!("\u{a9} {year} {brand}. All rights reserved.");

    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="brand-mark">
                        <Icon glyph=Glyph::Sparkles size="16" />
                    </span>
                    <span class="footer-title">{brand}</span>
                </div>
                <p class="footer-copyright">{copyright}</p>
                <nav class="footer-links" aria-label="Footer">
                    {links.into_iter().map(|link| {
                        let href = link.href();
                        view! { <a href=href class="footer-link">{link.label}</a> }
                    }).collect::<Vec<_>>()}
                </nav>
            </div>
        </footer>
    }
}
