//! Published OfficeWise copy.
//!
//! `Default` for every content table lives here so that a TOML override
//! only has to spell out the tables it changes.

use std::path::Path;

use crate::SiteError;
use crate::config::load_toml;
use crate::types::{
    ContactContent, ContactField, FaqContent, FaqEntry, Feature, Glyph, HeroContent, NavLink,
    Outcome, OutcomesContent, ProcessContent, ServicePackage, ServicesContent, SiteContent,
    Testimonial, TestimonialsContent,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SiteContent {
    /// Load a content override from a TOML file.
    ///
    /// Tables missing from the file keep the published copy.
    pub fn from_path(path: &Path) -> Result<Self, SiteError> {
        load_toml(path)
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "OfficeWise AI".into(),
            nav: vec![
                NavLink::new("Services", "services"),
                NavLink::new("Process", "process"),
                NavLink::new("Results", "results"),
                NavLink::new("FAQ", "faq"),
            ],
            nav_contact: NavLink::new("Contact", "contact"),
            nav_cta: "Get a Free Audit".into(),
            footer_links: vec![
                NavLink::new("Services", "services"),
                NavLink::new("Process", "process"),
                NavLink::new("Contact", "contact"),
            ],
            hero: HeroContent::default(),
            social_proof: strings(&[
                "Trusted by product, ops, and engineering teams",
                "Security-first • Vendor-agnostic • Clear docs",
            ]),
            services: ServicesContent::default(),
            process: ProcessContent::default(),
            outcomes: OutcomesContent::default(),
            testimonials: TestimonialsContent::default(),
            faq: FaqContent::default(),
            contact: ContactContent::default(),
        }
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: "Automate the busywork.".into(),
            accent: "Ship more. Spend less.".into(),
            lede: "OfficeWise helps small and mid-size teams deploy practical AI automations \
                   without the hype. We audit your workflows, integrate the right tools, and \
                   ship reliable agents that save hours every week."
                .into(),
            checklist: strings(&[
                "AI audit to uncover ROI in under 2 weeks",
                "Agentic workflows wired into your existing tools",
                "Security-minded setup with clear documentation",
            ]),
            primary_cta: "Book a discovery call".into(),
            secondary_cta: NavLink::new("See what we build", "services"),
            location: "Based in Ontario • Serving US & Canada • Remote-first".into(),
            showcase: vec![
                Feature::new(
                    Glyph::Bot,
                    "Support Triage Bot",
                    "Routes tickets, drafts replies, and escalates with context in Slack/Helpdesk.",
                ),
                Feature::new(
                    Glyph::Workflow,
                    "Ops Automations",
                    "From invoice matching to CRM hygiene, let bots do repetitive steps.",
                ),
                Feature::new(
                    Glyph::Cpu,
                    "Data Assistants",
                    "Ask plain-English questions over databases, sheets, or dashboards.",
                ),
                Feature::new(
                    Glyph::LineChart,
                    "Analytics & Reporting",
                    "Scheduled summaries, KPIs, and alerts delivered where you work.",
                ),
            ],
        }
    }
}

impl Default for ServicesContent {
    fn default() -> Self {
        Self {
            title: Some("What we can do for you".into()),
            subtitle: Some("Pick a starting point, or ask for a custom plan for your stack.".into()),
            features: vec![
                Feature::new(
                    Glyph::Bot,
                    "AI Helpdesk & Ticketing",
                    "Triage, summarize, and draft replies across Zendesk, Intercom, or Gmail. \
                     Escalate with full context into Slack or JIRA.",
                ),
                Feature::new(
                    Glyph::Workflow,
                    "Back-office Automation",
                    "Automate high-volume workflows: invoice matching, PO checks, report \
                     generation, CRM enrichment, lead routing, and more.",
                ),
                Feature::new(
                    Glyph::Cpu,
                    "Data Q&A Assistants",
                    "Natural-language to SQL for Redshift/Snowflake/BigQuery; governed access; \
                     query templates; one-click CSV exports.",
                ),
                Feature::new(
                    Glyph::LineChart,
                    "Dashboards & Alerts",
                    "Daily/weekly KPI digests, anomaly alerts, and proactive insights sent to \
                     Slack/Email with drill-downs.",
                ),
                Feature::new(
                    Glyph::Wrench,
                    "Build Environments & DevX",
                    "Dockerized, reproducible dev setups; CI/CD hardening; guardrails for \
                     AI-generated code; test scaffolding.",
                ),
                Feature::new(
                    Glyph::Shield,
                    "Security & Policy",
                    "SSO, least-privilege IAM, secret management, data-retention, and clear AI \
                     usage policies your team can follow.",
                ),
            ],
            spotlight: Some(Feature::new(
                Glyph::Sparkles,
                "Integration with AI B2B Services",
                "We also integrate cutting-edge AI B2B platforms, like Cohere, Anthropic, OpenAI, \
                 Scale AI, Glean, Typeface, or Gumloop, into your workflows so you can leverage \
                 the best of the ecosystem.",
            )),
            custom_title: "Custom Administrative Solutions".into(),
            custom_intro: "Beyond standard automation, we build extremely tailored tools for \
                           clerical, administrative, and document-heavy workflows. These are a \
                           few real-world examples:"
                .into(),
            custom_solutions: vec![
                Feature::new(
                    Glyph::FileText,
                    "Outlook Plugin for CX",
                    "Custom plugin that answers customer inquiries directly in Outlook using your \
                     company's FAQs, meeting notes, and knowledge base.",
                ),
                Feature::new(
                    Glyph::FileText,
                    "Automated Bank Reconciliations",
                    "End-to-end automation that generates accurate bank recs directly from bank \
                     statements. No manual spreadsheet crunching required.",
                ),
            ],
            packages_title: "Service Packages".into(),
            packages: vec![
                ServicePackage {
                    name: "Starter: AI Audit (2 weeks)".into(),
                    summary: "We map your workflows, quantify potential ROI, and ship one \
                              high-leverage automation as a quick win."
                        .into(),
                    deliverables: strings(&[
                        "Discovery interviews & tooling inventory",
                        "Risk & security review (lightweight)",
                        "Automation roadmap with ROI estimates",
                        "One shipped automation + documentation",
                    ]),
                },
                ServicePackage {
                    name: "Monthly: Automation Partner".into(),
                    summary: "Ongoing build-measure-learn cycles to expand coverage, maintain \
                              agents, and keep everything fast and reliable."
                        .into(),
                    deliverables: strings(&[
                        "2-4 new automations per month",
                        "SLAs for fixes & maintenance",
                        "Quarterly security & cost reviews",
                        "Change-logs and leader updates",
                    ]),
                },
            ],
        }
    }
}

impl Default for ProcessContent {
    fn default() -> Self {
        Self {
            title: Some("How we work".into()),
            subtitle: Some(
                "Clear steps, visible progress, and documentation that outlasts personnel changes."
                    .into(),
            ),
            steps: vec![
                Feature::new(
                    Glyph::FileText,
                    "1) Audit & Priorities",
                    "Workflow mapping, stack review, north-star metrics. Pick top 3 automations \
                     by ROI and ease.",
                ),
                Feature::new(
                    Glyph::Settings,
                    "2) Design & Security",
                    "Data flows, permissions, fallback paths, and measurable success criteria.",
                ),
                Feature::new(
                    Glyph::Gauge,
                    "3) Build & Validate",
                    "Ship small, test in shadow mode, then graduate to production with SLAs.",
                ),
                Feature::new(
                    Glyph::Rocket,
                    "4) Launch & Iterate",
                    "Track KPIs, create docs, and expand coverage every sprint.",
                ),
            ],
        }
    }
}

impl Default for OutcomesContent {
    fn default() -> Self {
        Self {
            title: Some("Outcomes we aim for".into()),
            subtitle: Some(
                "Your mileage will vary, but these are typical wins once the flywheel starts."
                    .into(),
            ),
            outcomes: vec![
                Outcome {
                    metric: "20-40%".into(),
                    caption: "Less time on repetitive ops within 90 days".into(),
                },
                Outcome {
                    metric: "$3-10k/mo".into(),
                    caption: "Typical saved cost from automation + fewer errors".into(),
                },
                Outcome {
                    metric: "~2 weeks".into(),
                    caption: "From scoped idea to first shipped agent".into(),
                },
            ],
        }
    }
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        let attribution = "Client in SaaS / Services";
        Self {
            title: Some("What clients say".into()),
            subtitle: Some("Short, honest notes from the teams we help.".into()),
            testimonials: [
                "We finally have clean, weekly KPI snapshots in Slack. No more spreadsheet wrangling.",
                "Their audit found two workflows we didn't realize were draining 15+ hours a week.",
                "Docs are immaculate. If someone leaves, the automations keep working.",
            ]
            .into_iter()
            .map(|quote| Testimonial {
                quote: quote.into(),
                attribution: attribution.into(),
            })
            .collect(),
        }
    }
}

impl Default for FaqContent {
    fn default() -> Self {
        let entry = |question: &str, answer: &str| FaqEntry {
            question: question.into(),
            answer: answer.into(),
        };
        Self {
            title: Some("FAQ".into()),
            subtitle: Some("If it's not here, ask us. Happy to clarify.".into()),
            entries: vec![
                entry(
                    "Which tools and stacks do you work with?",
                    "We're vendor-agnostic. Common picks: AWS (Lambda, Bedrock), GCP, \
                     Snowflake/Redshift/BigQuery, dbt, Airbyte, Slack, Notion, Jira, Asana, \
                     HubSpot, Zapier/Make, LangChain, Cohere, Anthropic, Scale AI, Glean, \
                     Typeface, and direct API integrations.",
                ),
                entry(
                    "How do you handle security?",
                    "Least-privilege IAM, SSO where possible, secret managers, data scoping, and \
                     audit logs. We document data flows and set up access reviews.",
                ),
                entry(
                    "What does the AI Audit include?",
                    "Stakeholder interviews, workflow mapping, tool inventory, risk review, ROI \
                     model, and one shipped quick-win automation with docs.",
                ),
                entry(
                    "Pricing?",
                    "Fixed-fee audit; then monthly retainer or project-based. We aim for a clear \
                     ROI multiple over fees.",
                ),
            ],
        }
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            title: Some("Get a Free Audit Intro".into()),
            subtitle: Some(
                "Tell us a bit about your team and workflows. We'll reply within 24 hours.".into(),
            ),
            fields: vec![
                ContactField::text("name", "Name", "Name"),
                ContactField::email("email", "Work email", "Work Email"),
                ContactField::text("company", "Company / team size", "Company / Team size"),
                ContactField::text(
                    "stack",
                    "Your stack",
                    "Your stack (e.g., Slack, HubSpot, Redshift)",
                ),
                ContactField::text(
                    "workflow",
                    "Top workflow to fix",
                    "Top workflow to fix (one sentence)",
                ),
            ],
            submit_label: "Send request".into(),
            consent: "By submitting, you agree to be contacted about this request.".into(),
            points: vec![
                Feature::new(
                    Glyph::Handshake,
                    "Hands-on partnership",
                    "We scope small, ship quickly, and iterate. Expect measurable wins, not long decks.",
                ),
                Feature::new(
                    Glyph::Shield,
                    "Security-minded by default",
                    "Access is scoped, secrets are managed, and changes are logged.",
                ),
                Feature::new(
                    Glyph::Wrench,
                    "Docs that outlive people",
                    "Everything we build comes with clear runbooks and handoff docs.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::page_anchors;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_tables_have_published_counts() {
        let content = SiteContent::default();
        assert_eq!(content.services.features.len(), 6);
        assert_eq!(content.process.steps.len(), 4);
        assert_eq!(content.outcomes.outcomes.len(), 3);
        assert_eq!(content.testimonials.testimonials.len(), 3);
        assert_eq!(content.faq.entries.len(), 4);
        assert_eq!(content.contact.fields.len(), 5);
    }

    #[test]
    fn contact_fields_in_submission_order() {
        let names: Vec<_> = SiteContent::default()
            .contact
            .fields
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["name", "email", "company", "stack", "workflow"]);
    }

    #[test]
    fn nav_targets_are_known_anchors() {
        let content = SiteContent::default();
        let anchors: Vec<_> = page_anchors().collect();
        for link in content.internal_links() {
            assert!(
                anchors.contains(&link.target.as_str()),
                "unknown anchor {}",
                link.target
            );
        }
    }

    #[test]
    fn partial_override_keeps_other_tables() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            r#"
brand = "Acme Automation"

[testimonials]
testimonials = []
"#
        )
        .expect("write content");

        let content = SiteContent::from_path(file.path()).expect("load content");
        assert_eq!(content.brand, "Acme Automation");
        assert!(content.testimonials.testimonials.is_empty());
        assert_eq!(
            content.testimonials.title.as_deref(),
            Some("What clients say")
        );
        assert_eq!(content.services, ServicesContent::default());
    }

    #[test]
    fn override_with_custom_faq() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            r#"
[[faq.entries]]
question = "Do you work weekends?"
answer = "No."
"#
        )
        .expect("write content");

        let content = SiteContent::from_path(file.path()).expect("load content");
        assert_eq!(content.faq.entries.len(), 1);
        assert_eq!(content.faq.entries[0].question, "Do you work weekends?");
        assert_eq!(content.faq.title.as_deref(), Some("FAQ"));
    }

    #[test]
    fn malformed_override_is_a_parse_error() {
        let mut file = NamedTempFile::new().expect("temp file");
        writeln!(file, "brand = [").expect("write content");

        let err = SiteContent::from_path(file.path()).unwrap_err();
        assert!(matches!(err, SiteError::Parse { .. }));
    }

    #[test]
    fn missing_override_is_a_read_error() {
        let err = SiteContent::from_path(Path::new("/nonexistent/content.toml")).unwrap_err();
        assert!(matches!(err, SiteError::Read { .. }));
    }
}
