use leptos::prelude::*;

use super::{Card, CardVariant, FeatureCard, Section};
use crate::types::{OutcomesContent, ProcessContent};

/// The `#process` timeline.
#[component]
pub fn Process(process: ProcessContent) -> impl IntoView {
    view! {
        <Section id=Some("process".to_string()) title=process.title subtitle=process.subtitle>
            <ol class="grid grid-4 process-grid">
                {process.steps.into_iter().map(|step| view! {
                    <li class="process-step">
                        <FeatureCard feature=step variant=CardVariant::Stacked />
                    </li>
                }).collect::<Vec<_>>()}
            </ol>
        </Section>
    }
}

/// The `#results` metrics row.
#[component]
pub fn Outcomes(outcomes: OutcomesContent) -> impl IntoView {
    view! {
        <Section id=Some("results".to_string()) title=outcomes.title subtitle=outcomes.subtitle>
            <div class="grid grid-3 outcomes-grid">
                {outcomes.outcomes.into_iter().map(|outcome| view! {
                    <Card class="outcome-card">
                        <div class="outcome-metric">{outcome.metric}</div>
                        <p class="outcome-caption">{outcome.caption}</p>
                    </Card>
                }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}
