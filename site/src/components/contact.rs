//! Contact section - the audit request form and the reassurance column.
//!
//! The form is a plain HTML POST to the configured collection endpoint.
//! Nothing here validates, awaits or acknowledges the submission.

use leptos::prelude::*;

use super::{Card, CardVariant, FeatureCard, Icon, Section};
use crate::types::{ContactContent, ContactField, Glyph};

/// The `#contact` section.
#[component]
pub fn Contact(contact: ContactContent, form_action: String) -> impl IntoView {
    let ContactContent {
        title,
        subtitle,
        fields,
        submit_label,
        consent,
        points,
    } = contact;

    view! {
        <Section id=Some("contact".to_string()) title=title subtitle=subtitle>
            <div class="grid grid-2 contact-grid">
                <Card class="contact-card">
                    <ContactForm fields=fields submit_label=submit_label form_action=form_action />
                    <p class="form-consent">{consent}</p>
                </Card>
                <div class="contact-points">
                    {points.into_iter().map(|point| view! {
                        <FeatureCard feature=point variant=CardVariant::Compact />
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </Section>
    }
}

/// Uncontrolled form posting its fields to `form_action`.
#[component]
pub fn ContactForm(
    fields: Vec<ContactField>,
    submit_label: String,
    form_action: String,
) -> impl IntoView {
    view! {
        <form action=form_action method="POST" class="contact-form">
            {fields.into_iter().map(|field| view! {
                <label class="form-field">
                    <span class="form-label">{field.label}</span>
                    <input
                        class="form-input"
                        type=field.kind.as_str()
                        name=field.name
                        placeholder=field.placeholder
                    />
                </label>
            }).collect::<Vec<_>>()}
            <button type="submit" class="btn btn-primary btn-block">
                {submit_label}
                <Icon glyph=Glyph::Mail size="16" class="btn-icon" />
            </button>
        </form>
    }
}
