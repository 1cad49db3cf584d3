//! CSS for the landing page.
//!
//! Inlined into `<head>` so the rendered page is a single self-contained
//! file. Appending to it is the supported way to re-theme:
//!
//! ```rust
//! use officewise_site::styles::SITE_CSS;
//!
//! let my_css = ":root { --accent: #0f766e; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.ends_with("#0f766e; }"));
//! ```

/// Complete stylesheet. Light theme, blue accent, responsive grids.
///
/// Must not contain `<`, `>` or `&`: text children are HTML-escaped on render.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-subtle: #f8fafc;
    --text: #0f172a;
    --text-muted: #64748b;
    --border: #e5e7eb;
    --accent: #2563eb;
    --accent-strong: #1d4ed8;
    --accent-text: #1e40af;
    --accent-soft: rgba(37, 99, 235, 0.1);
    --radius-lg: 16px;
    --radius-md: 12px;
    --container-max: 72rem;
    --font-sans: "Inter", system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--text);
    background: var(--bg);
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

.page {
    min-height: 100vh;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Nav */
.nav {
    position: sticky;
    top: 0;
    z-index: 40;
    border-bottom: 1px solid var(--border);
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(8px);
}

.nav-inner {
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand,
.footer-brand {
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 600;
    letter-spacing: -0.01em;
}

.brand-mark {
    width: 32px;
    height: 32px;
    border-radius: var(--radius-md);
    background: var(--accent-soft);
    display: grid;
    place-items: center;
    color: var(--accent-text);
}

.nav-links {
    display: none;
    gap: 24px;
    font-size: 14px;
}

.nav-link:hover,
.footer-link:hover {
    text-decoration: underline;
}

.nav-actions {
    display: flex;
    align-items: center;
    gap: 12px;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    height: 40px;
    padding: 0 16px;
    border-radius: var(--radius-lg);
    border: 1px solid transparent;
    font: inherit;
    font-size: 14px;
    font-weight: 500;
    cursor: pointer;
    transition: background-color 0.15s ease, color 0.15s ease;
}

.btn-primary {
    background: var(--accent);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--accent-strong);
}

.btn-outline {
    border-color: var(--border);
    background: var(--bg);
}

.btn-outline:hover,
.btn-ghost:hover {
    background: var(--bg-subtle);
}

.btn-ghost {
    background: transparent;
}

.btn-lg {
    height: 44px;
    padding: 0 20px;
    font-size: 16px;
}

.btn-block {
    width: 100%;
}

/* Sections */
.section {
    width: 100%;
    padding: 80px 0;
}

.section-header {
    margin-bottom: 40px;
    text-align: center;
}

.section-title {
    margin: 0;
    font-size: 30px;
    font-weight: 600;
    letter-spacing: -0.02em;
}

.section-subtitle {
    margin: 12px auto 0;
    max-width: 42rem;
    color: var(--text-muted);
}

.subsection {
    margin-top: 64px;
}

.subsection-title {
    margin: 0 0 24px;
    font-size: 24px;
    font-weight: 600;
    text-align: center;
}

.subsection-intro {
    margin: 0 auto 40px;
    max-width: 42rem;
    text-align: center;
    color: var(--text-muted);
}

/* Grids */
.grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
    margin: 0;
    padding: 0;
    list-style: none;
}

/* Cards */
.card,
.feature-card {
    height: 100%;
    border: 1px solid var(--border);
    border-radius: var(--radius-lg);
    background: var(--bg);
    padding: 24px;
}

.feature-card {
    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
    transition: box-shadow 0.2s ease;
}

.feature-card:hover {
    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
}

.feature-header {
    display: flex;
    align-items: center;
    gap: 12px;
}

.feature-card-stacked .feature-header {
    flex-direction: column;
    align-items: flex-start;
    gap: 8px;
}

.feature-card-compact {
    padding: 20px;
}

.feature-card-compact .feature-title {
    font-size: 16px;
    font-weight: 500;
}

.feature-card-compact .feature-description {
    font-size: 12px;
    margin-top: 8px;
}

.feature-icon {
    padding: 8px;
    border-radius: var(--radius-md);
    background: var(--accent-soft);
    color: var(--accent-text);
    display: inline-flex;
}

.feature-title,
.card-title {
    margin: 0;
    font-size: 20px;
    font-weight: 600;
    line-height: 1.2;
    letter-spacing: -0.01em;
}

.feature-description {
    margin: 16px 0 0;
    font-size: 14px;
    line-height: 1.65;
    color: var(--text-muted);
}

.spotlight {
    margin: 24px auto 0;
    max-width: 24rem;
}

.package-summary {
    font-size: 14px;
}

/* Check lists */
.check-list {
    margin: 24px 0 0;
    padding: 0;
    list-style: none;
    display: grid;
    gap: 8px;
    font-size: 14px;
}

.check-item {
    display: flex;
    align-items: flex-start;
    gap: 8px;
}

.check-icon {
    margin-top: 2px;
    flex-shrink: 0;
    color: var(--accent-text);
}

/* Hero */
.hero-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 40px;
    align-items: center;
}

.hero-title {
    margin: 0;
    font-size: 36px;
    font-weight: 700;
    line-height: 1.15;
    letter-spacing: -0.02em;
}

.hero-accent {
    color: var(--accent-text);
}

.hero-lede {
    margin: 16px 0 0;
    max-width: 65ch;
    color: var(--text-muted);
}

.hero-actions {
    margin-top: 24px;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.hero-location {
    margin: 12px 0 0;
    font-size: 12px;
    color: var(--text-muted);
}

.hero-showcase {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

/* Social proof */
.social-proof {
    padding: 32px 0;
}

.social-proof-strip {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 32px;
    font-size: 14px;
    opacity: 0.7;
}

.social-proof-divider {
    width: 1px;
    height: 24px;
    background: var(--border);
}

/* Outcomes */
.outcome-metric {
    font-size: 36px;
    font-weight: 700;
}

.outcome-caption {
    margin: 4px 0 0;
    font-size: 14px;
    color: var(--text-muted);
}

/* Testimonials */
.testimonial-card {
    margin: 0;
}

.testimonial-quote {
    margin: 0;
    font-size: 14px;
}

.testimonial-attribution {
    margin-top: 12px;
    font-size: 12px;
    color: var(--text-muted);
}

/* FAQ */
.faq-answer {
    margin: 16px 0 0;
    font-size: 14px;
    color: var(--text-muted);
}

/* Contact */
.contact-form {
    display: grid;
    gap: 16px;
}

.form-field {
    display: grid;
    gap: 6px;
}

.form-label {
    font-size: 13px;
    font-weight: 500;
}

.form-input {
    height: 40px;
    width: 100%;
    padding: 8px 12px;
    border: 1px solid var(--border);
    border-radius: var(--radius-md);
    font: inherit;
    font-size: 14px;
    background: var(--bg);
}

.form-input:focus-visible {
    outline: 2px solid var(--accent);
    outline-offset: 2px;
}

.form-consent {
    margin: 16px 0 0;
    font-size: 12px;
    color: var(--text-muted);
}

.contact-points {
    display: grid;
    gap: 16px;
    align-content: start;
}

/* Footer */
.footer {
    border-top: 1px solid var(--border);
    padding: 40px 0;
    font-size: 14px;
}

.footer-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
}

.footer-copyright {
    margin: 0;
    color: var(--text-muted);
}

.footer-links {
    display: flex;
    gap: 16px;
}

@media (min-width: 768px) {
    .nav-links {
        display: flex;
        align-items: center;
    }

    .section {
        padding: 112px 0;
    }

    .section-title {
        font-size: 36px;
    }

    .hero-title {
        font-size: 48px;
    }

    .hero-grid,
    .grid-2 {
        grid-template-columns: repeat(2, 1fr);
    }

    .grid-3 {
        grid-template-columns: repeat(3, 1fr);
    }

    .grid-4 {
        grid-template-columns: repeat(4, 1fr);
    }

    .hero-actions {
        flex-direction: row;
    }

    .footer-inner {
        flex-direction: row;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_survives_text_escaping() {
        for ch in ['<', '>', '&'] {
            assert!(!SITE_CSS.contains(ch), "stylesheet contains {ch:?}");
        }
    }
}
