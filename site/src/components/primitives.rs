//! Small building blocks shared by the sections.

use leptos::prelude::*;

use super::Icon;
use crate::types::Glyph;

/// Bordered card container.
#[component]
pub fn Card(
    /// Extra CSS class appended to `card`
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };
    view! { <div class=class>{children()}</div> }
}

/// Link to another site, opened in a new browsing context.
#[component]
pub fn ExternalLink(
    /// Destination URL
    href: String,
    /// CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}

/// Bullet list with check-mark glyphs.
#[component]
pub fn CheckList(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="check-list">
            {items.into_iter().map(|item| view! {
                <li class="check-item">
                    <Icon glyph=Glyph::Check size="16" class="check-icon" />
                    <span>{item}</span>
                </li>
            }).collect::<Vec<_>>()}
        </ul>
    }
}
