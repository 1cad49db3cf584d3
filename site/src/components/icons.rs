//! Inline SVG glyphs.
//!
//! All glyphs share a 256x256 filled viewBox so they can be swapped
//! without touching layout.

use leptos::prelude::*;

use crate::types::Glyph;

/// Renders an inline SVG glyph.
///
/// # Props
///
/// * `glyph` - Which glyph to draw
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon glyph=Glyph::Rocket size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph to draw
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=glyph_path(glyph)></path>
        </svg>
    }
}

/// SVG path data (`d` attribute) for a glyph.
pub fn glyph_path(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Bot => ICON_BOT,
        Glyph::Workflow => ICON_WORKFLOW,
        Glyph::Cpu => ICON_CPU,
        Glyph::LineChart => ICON_LINE_CHART,
        Glyph::Sparkles => ICON_SPARKLES,
        Glyph::Wrench => ICON_WRENCH,
        Glyph::Shield => ICON_SHIELD,
        Glyph::Mail => ICON_MAIL,
        Glyph::ArrowRight => ICON_ARROW_RIGHT,
        Glyph::FileText => ICON_FILE_TEXT,
        Glyph::Handshake => ICON_HANDSHAKE,
        Glyph::Gauge => ICON_GAUGE,
        Glyph::Settings => ICON_SETTINGS,
        Glyph::Rocket => ICON_ROCKET,
        Glyph::Check => ICON_CHECK,
    }
}

// =============================================================================
// Path data (256x256, filled)
// =============================================================================

const ICON_BOT: &str = "M224,64H186.34A48.11,48.11,0,0,0,144,32.23V24a8,8,0,0,0-16,0v8.23A48.11,48.11,0,0,0,85.66,64H48A16,16,0,0,0,32,80v40a16,16,0,0,0,16,16h7.53A56.06,56.06,0,0,0,48,160a56,56,0,0,0,112,0,56.06,56.06,0,0,0-7.53-24H208a16,16,0,0,0,16-16V80A16,16,0,0,0,224,64ZM48,120V80H81.43A48.16,48.16,0,0,0,80,88v32Zm56,88a40,40,0,1,1,40-40A40,40,0,0,1,104,208Zm64-88H128V88a48,48,0,0,0-1.43-8h82.86A48.16,48.16,0,0,0,208,120Z";

const ICON_WORKFLOW: &str = "M224,88H168V64a16,16,0,0,0-16-16H104A16,16,0,0,0,88,64V88H32A16,16,0,0,0,16,104v48a16,16,0,0,0,16,16H88v24a16,16,0,0,0,16,16h48a16,16,0,0,0,16-16V168h56a16,16,0,0,0,16-16V104A16,16,0,0,0,224,88ZM32,152V104H88v48Zm120,40H104V64h48Zm72-40H168V104h56Z";

const ICON_CPU: &str = "M152,96H104a8,8,0,0,0-8,8v48a8,8,0,0,0,8,8h48a8,8,0,0,0,8-8V104A8,8,0,0,0,152,96Zm-8,48H112V112h32Zm88,0H216V112h16a8,8,0,0,0,0-16H216V56a16,16,0,0,0-16-16H160V24a8,8,0,0,0-16,0V40H112V24a8,8,0,0,0-16,0V40H56A16,16,0,0,0,40,56V96H24a8,8,0,0,0,0,16H40v32H24a8,8,0,0,0,0,16H40v40a16,16,0,0,0,16,16H96v16a8,8,0,0,0,16,0V216h32v16a8,8,0,0,0,16,0V216h40a16,16,0,0,0,16-16V160h16a8,8,0,0,0,0-16Zm-32,56H56V56H200Z";

const ICON_LINE_CHART: &str = "M232,208a8,8,0,0,1-8,8H32a8,8,0,0,1-8-8V48a8,8,0,0,1,16,0v94.37L90.73,98a8,8,0,0,1,10.07-.38l58.81,44.11L218.73,90a8,8,0,1,1,10.54,12l-64,56a8,8,0,0,1-10.07.38L96.39,114.29,40,163.63V200H224A8,8,0,0,1,232,208Z";

const ICON_SPARKLES: &str = "M197.58,129.06,146,110l-19-51.62a15.92,15.92,0,0,0-29.88,0L78,110l-51.62,19a15.92,15.92,0,0,0,0,29.88L78,178l19,51.62a15.92,15.92,0,0,0,29.88,0L146,178l51.62-19a15.92,15.92,0,0,0,0-29.88ZM137,164.22a8,8,0,0,0-4.74,4.74L112,223.85,91.78,169A8,8,0,0,0,87,164.22L32.15,144,87,123.78A8,8,0,0,0,91.78,119L112,64.15,132.22,119a8,8,0,0,0,4.74,4.74L191.85,144Z";

const ICON_WRENCH: &str = "M226.76,69a8,8,0,0,0-12.84-2.88l-40.3,37.19-17.23-3.7-3.7-17.23,37.19-40.3A8,8,0,0,0,187,29.24,72,72,0,0,0,88,96a72.34,72.34,0,0,0,6,28.94L33.79,177a32,32,0,0,0,45.26,45.26L131.06,162A72,72,0,0,0,232,96,71.56,71.56,0,0,0,226.76,69ZM160,152a56.14,56.14,0,0,1-27.07-7,8,8,0,0,0-9.92,1.77L67.11,211.51a16,16,0,0,1-22.62-22.62L109.18,133a8,8,0,0,0,1.77-9.93,56,56,0,0,1,58.36-82.31l-31.2,33.81a8,8,0,0,0-1.94,7.1L141.83,108a8,8,0,0,0,6.14,6.14l26.35,5.66a8,8,0,0,0,7.1-1.94l33.81-31.2A56.06,56.06,0,0,1,160,152Z";

const ICON_SHIELD: &str = "M208,40H48A16,16,0,0,0,32,56v58.77c0,89.61,75.82,119.34,91,124.39a15.53,15.53,0,0,0,10,0c15.2-5.05,91-34.78,91-124.39V56A16,16,0,0,0,208,40Zm0,74.79c0,78.42-66.35,104.62-80,109.18-13.53-4.51-80-30.69-80-109.18V56H208Z";

const ICON_MAIL: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48Zm-96,85.15L52.57,64H203.43ZM98.71,128,40,181.81V74.19Zm11.84,10.85,12,11.05a8,8,0,0,0,10.82,0l12-11.05,58,53.15H52.57ZM157.29,128,216,74.18V181.82Z";

const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

const ICON_FILE_TEXT: &str = "M213.66,82.34l-56-56A8,8,0,0,0,152,24H56A16,16,0,0,0,40,40V216a16,16,0,0,0,16,16H200a16,16,0,0,0,16-16V88A8,8,0,0,0,213.66,82.34ZM160,51.31,188.69,80H160ZM200,216H56V40h88V88a8,8,0,0,0,8,8h48V216Zm-32-80a8,8,0,0,1-8,8H96a8,8,0,0,1,0-16h64A8,8,0,0,1,168,136Zm0,32a8,8,0,0,1-8,8H96a8,8,0,0,1,0-16h64A8,8,0,0,1,168,168Z";

const ICON_HANDSHAKE: &str = "M119.76,217.94A8,8,0,0,1,112,224a8.13,8.13,0,0,1-2-.24l-32-8a8,8,0,0,1-2.5-1.11l-24-16a8,8,0,1,1,8.88-13.31l22.84,15.23,30.66,7.67A8,8,0,0,1,119.76,217.94ZM244.6,109.27,219.75,59.58a16,16,0,0,0-21.46-7.16l-22.06,11-53-15.14a8,8,0,0,0-4.4,0l-53,15.14-22.06-11a16,16,0,0,0-21.46,7.16L4.42,109.27a16,16,0,0,0,7.16,21.46l24.28,12.14,52.13,37.23a8,8,0,0,0,2.71,1.25l64,16a8,8,0,0,0,7.6-2.1l55.08-55.09,23.68-11.84a16,16,0,0,0,7.16-21.46ZM188.69,136,160,107.31l-24,17.94A40,40,0,0,1,88,124.57l-1.2-.9a16,16,0,0,1-1.72-24.23L128,57.31,176,70.74Z";

const ICON_GAUGE: &str = "M207.06,80.67A111.24,111.24,0,0,0,128,48h-.4C66.07,48.21,16,99,16,161.13V184a16,16,0,0,0,16,16H224a16,16,0,0,0,16-16V160A111.25,111.25,0,0,0,207.06,80.67ZM224,184H119.71l54.76-75.3a8,8,0,0,0-12.94-9.42L99.92,184H32V161.13c0-3.08.15-6.12.43-9.13H56a8,8,0,0,0,0-16H35.27c10.32-38.86,44-68.24,84.73-71.66V88a8,8,0,0,0,16,0V64.33A96.14,96.14,0,0,1,221,136H200a8,8,0,0,0,0,16h23.67c.21,2.65.33,5.31.33,8Z";

const ICON_SETTINGS: &str = "M128,80a48,48,0,1,0,48,48A48.05,48.05,0,0,0,128,80Zm0,80a32,32,0,1,1,32-32A32,32,0,0,1,128,160Zm88-29.84q.06-2.16,0-4.32l14.92-18.64a8,8,0,0,0,1.48-7.06,107.21,107.21,0,0,0-10.88-26.25,8,8,0,0,0-6-3.93l-23.72-2.64q-1.48-1.56-3-3L186,40.54a8,8,0,0,0-3.94-6,107.71,107.71,0,0,0-26.25-10.87,8,8,0,0,0-7.06,1.49L130.16,40Q128,40,125.84,40L107.2,25.11a8,8,0,0,0-7.06-1.48A107.6,107.6,0,0,0,73.89,34.51a8,8,0,0,0-3.93,6L67.32,64.27q-1.56,1.49-3,3L40.54,70a8,8,0,0,0-6,3.94,107.71,107.71,0,0,0-10.87,26.25,8,8,0,0,0,1.49,7.06L40,125.84Q40,128,40,130.16L25.11,148.8a8,8,0,0,0-1.48,7.06,107.21,107.21,0,0,0,10.88,26.25,8,8,0,0,0,6,3.93l23.72,2.64q1.49,1.56,3,3L70,215.46a8,8,0,0,0,3.94,6,107.71,107.71,0,0,0,26.25,10.87,8,8,0,0,0,7.06-1.49L125.84,216q2.16.06,4.32,0l18.64,14.92a8,8,0,0,0,7.06,1.48,107.21,107.21,0,0,0,26.25-10.88,8,8,0,0,0,3.93-6l2.64-23.72q1.56-1.48,3-3L215.46,186a8,8,0,0,0,6-3.94,107.71,107.71,0,0,0,10.87-26.25,8,8,0,0,0-1.49-7.06Z";

const ICON_ROCKET: &str = "M152,224a8,8,0,0,1-8,8H112a8,8,0,0,1,0-16h32A8,8,0,0,1,152,224ZM128,112a12,12,0,1,0-12-12A12,12,0,0,0,128,112Zm95.62,43.83-12.36,55.63a16,16,0,0,1-25.51,9.11L158.51,200h-61L70.25,220.57a16,16,0,0,1-25.51-9.11L32.38,155.83a16.09,16.09,0,0,1,3.32-13.71l28.56-34.26a123.07,123.07,0,0,1,8.57-36.67c12.9-32.34,36-52.63,45.37-59.85a16,16,0,0,1,19.6,0c9.34,7.22,32.47,27.51,45.37,59.85a123.07,123.07,0,0,1,8.57,36.67l28.56,34.26A16.09,16.09,0,0,1,223.62,155.83Z";

const ICON_CHECK: &str = "M229.66,77.66l-128,128a8,8,0,0,1-11.32,0l-56-56a8,8,0,0,1,11.32-11.32L96,188.69,218.34,66.34a8,8,0,0,1,11.32,11.32Z";
