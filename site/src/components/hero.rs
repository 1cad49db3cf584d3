use leptos::prelude::*;

use super::{CardVariant, CheckList, ExternalLink, FeatureCard, Icon, Section};
use crate::types::{Glyph, HeroContent};

/// Headline, pitch, call-to-actions and the showcase grid.
#[component]
pub fn Hero(hero: HeroContent, scheduling_url: String) -> impl IntoView {
    let HeroContent {
        headline,
        accent,
        lede,
        checklist,
        primary_cta,
        secondary_cta,
        location,
        showcase,
    } = hero;
    let secondary_href = secondary_cta.href();

    view! {
        <Section class="hero">
            <div class="hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">
                        {headline}
                        " "
                        <span class="hero-accent">{accent}</span>
                    </h1>
                    <p class="hero-lede">{lede}</p>
                    <CheckList items=checklist />
                    <div class="hero-actions">
                        <ExternalLink href=scheduling_url class="btn btn-primary btn-lg">
                            {primary_cta}
                            <Icon glyph=Glyph::ArrowRight size="16" class="btn-icon" />
                        </ExternalLink>
                        <a href=secondary_href class="btn btn-outline btn-lg">
                            {secondary_cta.label}
                        </a>
                    </div>
                    <p class="hero-location">{location}</p>
                </div>
                <div class="hero-showcase">
                    {showcase.into_iter().map(|feature| view! {
                        <FeatureCard feature=feature variant=CardVariant::Compact />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </Section>
    }
}

/// Thin strip of trust statements under the hero.
#[component]
pub fn SocialProof(lines: Vec<String>) -> impl IntoView {
    view! {
        <Section class="social-proof">
            <div class="social-proof-strip">
                {lines.into_iter().enumerate().map(|(idx, line)| view! {
                    {(idx > 0).then(|| view! { <span class="social-proof-divider"></span> })}
                    <span class="social-proof-line">{line}</span>
                }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}
