//! Feature card - icon, title and description in a uniform card.

use leptos::prelude::*;

use super::Icon;
use crate::types::Feature;

/// Card layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    /// Icon beside the title (service grids)
    #[default]
    Standard,
    /// Icon above the title (process timeline)
    Stacked,
    /// Tighter padding and small type (hero showcase, contact points)
    Compact,
}

impl CardVariant {
    fn class(self) -> &'static str {
        match self {
            CardVariant::Standard => "feature-card",
            CardVariant::Stacked => "feature-card feature-card-stacked",
            CardVariant::Compact => "feature-card feature-card-compact",
        }
    }
}

/// Renders one [`Feature`]. Text is displayed verbatim.
#[component]
pub fn FeatureCard(
    feature: Feature,
    #[prop(default = CardVariant::Standard)] variant: CardVariant,
) -> impl IntoView {
    let Feature {
        icon,
        title,
        description,
    } = feature;

    view! {
        <article class=variant.class()>
            <div class="feature-header">
                <div class="feature-icon">
                    <Icon glyph=icon />
                </div>
                <h3 class="feature-title">{title}</h3>
            </div>
            <p class="feature-description">{description}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Glyph;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_title_and_description() {
        let feature = Feature::new(Glyph::Rocket, "Launch", "Ship it to production.");
        let html = view! { <FeatureCard feature=feature /> }.to_html();

        assert!(html.contains(r#"<article class="feature-card">"#));
        assert!(html.contains(r#"<h3 class="feature-title">Launch</h3>"#));
        assert!(html.contains("Ship it to production."));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn variant_sets_class() {
        let feature = Feature::new(Glyph::Gauge, "Validate", "Shadow mode first.");
        let html = view! { <FeatureCard feature=feature variant=CardVariant::Stacked /> }.to_html();

        assert!(html.contains(r#"class="feature-card feature-card-stacked""#));
    }

    #[test]
    fn markup_in_copy_is_escaped() {
        let feature = Feature::new(Glyph::Bot, "<script>alert(1)</script>", "plain");
        let html = view! { <FeatureCard feature=feature /> }.to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
