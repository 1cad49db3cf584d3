//! Content lint.
//!
//! Catches the mistakes that would otherwise ship silently in a static page:
//! nav links pointing at anchors that don't exist, a contact form missing
//! fields, unusable outbound URLs.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::SiteError;
use crate::components::page_anchors;
use crate::config::SiteConfig;
use crate::types::{Feature, SiteContent};

/// Field keys the form-collection endpoint expects, in render order.
pub const CONTACT_FIELD_NAMES: [&str; 5] = ["name", "email", "company", "stack", "workflow"];

/// Issue severity. Errors block `officewise build`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Page would be broken
    Error,
    /// Page renders but something looks off
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// One lint finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// How bad it is
    pub severity: Severity,
    /// Dotted path of the offending config/content key
    pub location: String,
    /// Human-readable description
    pub message: String,
}

impl Issue {
    fn error(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            location: location.into(),
            message: message.into(),
        }
    }

    fn warning(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            location: location.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.message)
    }
}

/// Run every check. Errors come first, then warnings, each in check order.
pub fn check(config: &SiteConfig, content: &SiteContent) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_urls(config, &mut issues);
    check_links(content, &mut issues);
    check_contact_fields(content, &mut issues);
    check_cards(content, &mut issues);
    issues.sort_by_key(|issue| issue.severity);
    tracing::debug!(issues = issues.len(), "lint finished");
    issues
}

/// `true` when any issue is an [`Severity::Error`].
pub fn has_errors(issues: &[Issue]) -> bool {
    issues.iter().any(|issue| issue.severity == Severity::Error)
}

fn check_urls(config: &SiteConfig, issues: &mut Vec<Issue>) {
    for err in config.url_errors() {
        let location = match &err {
            SiteError::InvalidUrl { field, .. } => format!("config.{field}"),
            _ => "config".to_string(),
        };
        issues.push(Issue::error(location, err.to_string()));
    }
}

fn check_links(content: &SiteContent, issues: &mut Vec<Issue>) {
    let anchors: HashSet<&str> = page_anchors().collect();
    for link in content.internal_links() {
        if !anchors.contains(link.target.as_str()) {
            issues.push(Issue::error(
                "content.links",
                format!(
                    "link `{}` points to #{}, which no section defines",
                    link.label, link.target
                ),
            ));
        }
    }
}

fn check_contact_fields(content: &SiteContent, issues: &mut Vec<Issue>) {
    let fields = &content.contact.fields;
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            issues.push(Issue::error(
                "content.contact.fields",
                format!("field `{}` appears more than once", field.name),
            ));
        }
        if !CONTACT_FIELD_NAMES.contains(&field.name.as_str()) {
            issues.push(Issue::error(
                "content.contact.fields",
                format!("unexpected field `{}`", field.name),
            ));
        }
    }
    for name in CONTACT_FIELD_NAMES {
        if !seen.contains(name) {
            issues.push(Issue::error(
                "content.contact.fields",
                format!("missing field `{name}`"),
            ));
        }
    }
}

fn check_cards(content: &SiteContent, issues: &mut Vec<Issue>) {
    if content.brand.trim().is_empty() {
        issues.push(Issue::warning("content.brand", "brand name is empty"));
    }

    let grids: [(&str, &[Feature]); 3] = [
        ("content.services.features", content.services.features.as_slice()),
        (
            "content.services.custom_solutions",
            content.services.custom_solutions.as_slice(),
        ),
        ("content.process.steps", content.process.steps.as_slice()),
    ];
    for (location, features) in grids {
        duplicate_titles(location, features.iter().map(|f| f.title.as_str()), issues);
    }
    duplicate_titles(
        "content.faq.entries",
        content.faq.entries.iter().map(|e| e.question.as_str()),
        issues,
    );

    let empties = [
        ("content.services.features", content.services.features.is_empty()),
        ("content.process.steps", content.process.steps.is_empty()),
        ("content.testimonials.testimonials", content.testimonials.testimonials.is_empty()),
        ("content.faq.entries", content.faq.entries.is_empty()),
    ];
    for (location, empty) in empties {
        if empty {
            issues.push(Issue::warning(location, "section renders with no cards"));
        }
    }
}

fn duplicate_titles<'a>(
    location: &str,
    titles: impl Iterator<Item = &'a str>,
    issues: &mut Vec<Issue>,
) {
    let mut seen = HashSet::new();
    for title in titles {
        if !seen.insert(title) {
            issues.push(Issue::warning(location, format!("duplicate title `{title}`")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ContactField, Glyph, NavLink};
    use pretty_assertions::assert_eq;

    #[test]
    fn published_site_is_clean() {
        let issues = check(&SiteConfig::default(), &SiteContent::default());
        assert_eq!(issues, vec![]);
    }

    #[test]
    fn dangling_nav_link_is_an_error() {
        let mut content = SiteContent::default();
        content.nav.push(NavLink::new("Pricing", "pricing"));

        let issues = check(&SiteConfig::default(), &content);
        assert!(has_errors(&issues));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("#pricing"));
    }

    #[test]
    fn bad_urls_are_errors() {
        let config = SiteConfig {
            form_action: "javascript:void(0)".into(),
            ..Default::default()
        };

        let issues = check(&config, &SiteContent::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "config.form_action");
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn contact_field_set_must_match() {
        let mut content = SiteContent::default();
        content.contact.fields.retain(|f| f.name != "stack");
        content
            .contact
            .fields
            .push(ContactField::text("phone", "Phone", "Phone"));

        let messages: Vec<_> = check(&SiteConfig::default(), &content)
            .into_iter()
            .map(|issue| issue.message)
            .collect();
        assert_eq!(messages, ["unexpected field `phone`", "missing field `stack`"]);
    }

    #[test]
    fn duplicate_contact_field_is_an_error() {
        let mut content = SiteContent::default();
        content
            .contact
            .fields
            .push(ContactField::email("email", "Email again", "Email"));

        let issues = check(&SiteConfig::default(), &content);
        assert!(has_errors(&issues));
        assert!(issues[0].message.contains("more than once"));
    }

    #[test]
    fn empty_testimonials_is_only_a_warning() {
        let mut content = SiteContent::default();
        content.testimonials.testimonials.clear();

        let issues = check(&SiteConfig::default(), &content);
        assert!(!has_errors(&issues));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, "content.testimonials.testimonials");
    }

    #[test]
    fn duplicate_service_title_warns() {
        let mut content = SiteContent::default();
        content
            .services
            .features
            .push(Feature::new(Glyph::Bot, "Security & Policy", "Again."));

        let issues = check(&SiteConfig::default(), &content);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(issues[0].to_string().starts_with("warning: content.services.features"));
    }

    #[test]
    fn errors_sort_before_warnings() {
        let mut content = SiteContent::default();
        content.faq.entries.clear();
        content.footer_links.push(NavLink::new("Blog", "blog"));

        let issues = check(&SiteConfig::default(), &content);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[1].severity, Severity::Warning);
    }

    #[test]
    fn issues_serialize_to_json() {
        let issue = Issue::warning("content.brand", "brand name is empty");
        let json = serde_json::to_value(&issue).expect("serialize");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["location"], "content.brand");
    }
}
