//! Section wrapper - titled, centered block used by every page section.

use leptos::prelude::*;

/// A titled page block.
///
/// When `title` is `None` the whole heading block is omitted, subtitle
/// included. A `subtitle` without a `title` is therefore never shown.
#[component]
pub fn Section(
    /// Anchor id for in-page navigation
    #[prop(default = None)]
    id: Option<String>,
    /// Heading text
    #[prop(default = None)]
    title: Option<String>,
    /// Text under the heading
    #[prop(default = None)]
    subtitle: Option<String>,
    /// Extra CSS class on the `<section>`
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "section".to_string()
    } else {
        format!("section {class}")
    };

    view! {
        <section id=id class=class>
            <div class="container">
                {title.map(|title| view! {
                    <div class="section-header">
                        <h2 class="section-title">{title}</h2>
                        {subtitle.map(|subtitle| view! {
                            <p class="section-subtitle">{subtitle}</p>
                        })}
                    </div>
                })}
                {children()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_heading_block() {
        let html = view! {
            <Section
                id=Some("faq".to_string())
                title=Some("FAQ".to_string())
                subtitle=Some("Ask us anything".to_string())
            >
                <p>"body"</p>
            </Section>
        }
        .to_html();

        assert!(html.contains(r#"id="faq""#));
        assert!(html.contains(r#"<h2 class="section-title">FAQ</h2>"#));
        assert!(html.contains("Ask us anything"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn omits_heading_without_title() {
        let html = view! {
            <Section subtitle=Some("orphan subtitle".to_string())>
                <p>"body"</p>
            </Section>
        }
        .to_html();

        assert!(!html.contains("section-header"));
        assert!(!html.contains("orphan subtitle"));
        assert!(!html.contains(" id="));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn omits_subtitle_only() {
        let html = view! {
            <Section title=Some("Process".to_string())>
                <p>"body"</p>
            </Section>
        }
        .to_html();

        assert!(html.contains("section-title"));
        assert!(!html.contains("section-subtitle"));
    }

    #[test]
    fn appends_extra_class() {
        let html = view! {
            <Section class="hero">
                <p>"body"</p>
            </Section>
        }
        .to_html();

        assert!(html.contains(r#"class="section hero""#));
    }
}
