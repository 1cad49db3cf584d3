//! Services section - main grid, spotlight card, custom solutions and packages.

use leptos::prelude::*;

use super::{Card, CheckList, FeatureCard, Section};
use crate::types::{ServicePackage, ServicesContent};

/// The `#services` section.
#[component]
pub fn Services(services: ServicesContent) -> impl IntoView {
    let ServicesContent {
        title,
        subtitle,
        features,
        spotlight,
        custom_title,
        custom_intro,
        custom_solutions,
        packages_title,
        packages,
    } = services;

    view! {
        <Section id=Some("services".to_string()) title=title subtitle=subtitle>
            <div class="grid grid-3 services-grid">
                {features.into_iter().map(|feature| view! {
                    <FeatureCard feature=feature />
                }).collect::<Vec<_>>()}
            </div>

            {spotlight.map(|feature| view! {
                <div class="spotlight">
                    <FeatureCard feature=feature />
                </div>
            })}

            <div class="subsection">
                <h3 class="subsection-title">{custom_title}</h3>
                <p class="subsection-intro">{custom_intro}</p>
                <div class="grid grid-2 custom-grid">
                    {custom_solutions.into_iter().map(|feature| view! {
                        <FeatureCard feature=feature />
                    }).collect::<Vec<_>>()}
                </div>
            </div>

            <div class="subsection">
                <h3 class="subsection-title">{packages_title}</h3>
                <div class="grid grid-2 packages-grid">
                    {packages.into_iter().map(|package| view! {
                        <PackageCard package=package />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </Section>
    }
}

#[component]
fn PackageCard(package: ServicePackage) -> impl IntoView {
    view! {
        <Card class="package-card">
            <h3 class="card-title">{package.name}</h3>
            <p class="package-summary">{package.summary}</p>
            <CheckList items=package.deliverables />
        </Card>
    }
}
