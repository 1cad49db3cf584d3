use leptos::prelude::*;

use super::{Card, Section};
use crate::types::{FaqContent, TestimonialsContent};

/// Client quotes. Renders the heading even when there are no quotes.
#[component]
pub fn Testimonials(testimonials: TestimonialsContent) -> impl IntoView {
    view! {
        <Section title=testimonials.title subtitle=testimonials.subtitle class="testimonials">
            <div class="grid grid-3 testimonials-grid">
                {testimonials.testimonials.into_iter().map(|testimonial| {
                    let quote = format!("\u{201c}{}\u{201d}", testimonial.quote);
                    let attribution = format!("\u{2014} {}", testimonial.attribution);
                    view! {
                        <figure class="card testimonial-card">
                            <blockquote class="testimonial-quote">{quote}</blockquote>
                            <figcaption class="testimonial-attribution">{attribution}</figcaption>
                        </figure>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}

/// The `#faq` grid.
#[component]
pub fn Faq(faq: FaqContent) -> impl IntoView {
    view! {
        <Section id=Some("faq".to_string()) title=faq.title subtitle=faq.subtitle>
            <div class="grid grid-2 faq-grid">
                {faq.entries.into_iter().map(|entry| view! {
                    <Card class="faq-card">
                        <h3 class="card-title">{entry.question}</h3>
                        <p class="faq-answer">{entry.answer}</p>
                    </Card>
                }).collect::<Vec<_>>()}
            </div>
        </Section>
    }
}
