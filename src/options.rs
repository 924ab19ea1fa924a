//! PDF rendering options and their wire serialization.
//!
//! [`PdfOptions`] is an immutable value object describing how the server
//! should render a page: paper format, orientation, margins and boolean
//! rendering flags. Every field is optional; the wire payload contains
//! exactly the fields that were set. The SDK performs no range validation,
//! the server is authoritative.
//!
//! # Example
//!
//! ```rust
//! use pdfy_sdk::PdfOptions;
//!
//! let options = PdfOptions::a4_portrait().display_header_footer(true);
//!
//! let wire = options.to_wire();
//! assert_eq!(wire["format"], "A4");
//! assert_eq!(wire["display_header_footer"], true);
//! // Unset fields are absent, never null
//! assert!(!wire.contains_key("prefer_css_page_size"));
//! ```

use serde::Serialize;

/// PDF rendering options sent with a job submission.
///
/// All fields are optional and serialization omits unset fields entirely.
/// Construct via the presets ([`a4_portrait`](Self::a4_portrait),
/// [`a4_landscape`](Self::a4_landscape), [`no_margins`](Self::no_margins),
/// [`with_margins`](Self::with_margins)) or start from
/// [`PdfOptions::default()`] and chain the fluent setters.
///
/// # Wire keys
///
/// | Field | Wire key |
/// |-------|----------|
/// | format | `format` |
/// | orientation | `orientation` |
/// | margins (top/right/bottom/left) | `margin_top`, `margin_right`, `margin_bottom`, `margin_left` |
/// | margin unit | `margin_unit` |
/// | print background | `print_background` |
/// | header/footer | `display_header_footer` |
/// | CSS page size | `prefer_css_page_size` |
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PdfOptions {
    /// Paper format, e.g. "A4" or "Letter".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Page orientation: "portrait" or "landscape".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,

    /// Top margin, in units of [`margin_unit`](Self::margin_unit).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,

    /// Right margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,

    /// Bottom margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,

    /// Left margin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,

    /// Unit for all four margins, e.g. "cm" or "mm".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_unit: Option<String>,

    /// Render CSS backgrounds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,

    /// Render the browser's default header and footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_header_footer: Option<bool>,

    /// Let `@page` CSS rules win over the `format` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_css_page_size: Option<bool>,
}

impl PdfOptions {
    /// Empty options: nothing set, nothing sent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A4 portrait preset: 1.0 cm margins on all sides, backgrounds printed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pdfy_sdk::PdfOptions;
    ///
    /// let options = PdfOptions::a4_portrait();
    /// assert_eq!(options.format.as_deref(), Some("A4"));
    /// assert_eq!(options.orientation.as_deref(), Some("portrait"));
    /// assert_eq!(options.print_background, Some(true));
    /// ```
    pub fn a4_portrait() -> Self {
        Self {
            format: Some("A4".to_string()),
            orientation: Some("portrait".to_string()),
            margin_top: Some(1.0),
            margin_right: Some(1.0),
            margin_bottom: Some(1.0),
            margin_left: Some(1.0),
            margin_unit: Some("cm".to_string()),
            print_background: Some(true),
            ..Self::default()
        }
    }

    /// A4 landscape preset: identical to [`a4_portrait`](Self::a4_portrait)
    /// with landscape orientation.
    pub fn a4_landscape() -> Self {
        Self {
            orientation: Some("landscape".to_string()),
            ..Self::a4_portrait()
        }
    }

    /// Custom margins preset; format and orientation stay unset.
    pub fn with_margins(top: f64, right: f64, bottom: f64, left: f64, unit: &str) -> Self {
        Self {
            margin_top: Some(top),
            margin_right: Some(right),
            margin_bottom: Some(bottom),
            margin_left: Some(left),
            margin_unit: Some(unit.to_string()),
            ..Self::default()
        }
    }

    /// Zero margins on all sides (in cm); format and orientation stay unset.
    pub fn no_margins() -> Self {
        Self::with_margins(0.0, 0.0, 0.0, 0.0, "cm")
    }

    /// Set the paper format.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the page orientation.
    pub fn orientation(mut self, orientation: impl Into<String>) -> Self {
        self.orientation = Some(orientation.into());
        self
    }

    /// Set all four margins at once.
    pub fn margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = Some(top);
        self.margin_right = Some(right);
        self.margin_bottom = Some(bottom);
        self.margin_left = Some(left);
        self
    }

    /// Set the margin unit.
    pub fn margin_unit(mut self, unit: impl Into<String>) -> Self {
        self.margin_unit = Some(unit.into());
        self
    }

    /// Toggle CSS background rendering.
    pub fn print_background(mut self, enabled: bool) -> Self {
        self.print_background = Some(enabled);
        self
    }

    /// Toggle the default header and footer.
    pub fn display_header_footer(mut self, enabled: bool) -> Self {
        self.display_header_footer = Some(enabled);
        self
    }

    /// Toggle `@page` CSS size preference.
    pub fn prefer_css_page_size(mut self, enabled: bool) -> Self {
        self.prefer_css_page_size = Some(enabled);
        self
    }

    /// The JSON object sent as the `options` member of a job submission.
    ///
    /// Contains exactly the fields that were set, under their documented
    /// wire keys.
    pub fn to_wire(&self) -> serde_json::Map<String, serde_json::Value> {
        // Serialize of this struct always yields an object.
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }

    /// True when no field is set at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
