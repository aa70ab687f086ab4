//! Report data model.
//!
//! Every type here serializes straight into the JSON response body. Field
//! names are camelCase on the wire; ordered sequences keep document order.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use strum_macros::{AsRefStr, Display};

/// Presence of landmark regions on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureFlags {
    pub header: bool,
    pub nav: bool,
    pub main: bool,
    pub footer: bool,
    /// Any `aside`/`div` whose class list mentions "sidebar"
    pub sidebar: bool,
    pub section_count: usize,
}

/// A `button` or `a` element classified as a button by its class names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonRecord {
    pub raw_markup: String,
    pub text: String,
    pub classes: Vec<String>,
    /// Inline `style` attribute split into property -> value
    pub style_props: BTreeMap<String, String>,
    pub tag_name: String,
    pub on_click: Option<String>,
    /// Only set for anchors
    pub href: Option<String>,
}

/// A `nav` or `header` element with its link/list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavRecord {
    pub raw_markup: String,
    pub tag_name: String,
    pub classes: Vec<String>,
    pub inline_style: Option<String>,
    pub items: Vec<NavItem>,
}

/// A descendant `a` or `li` of a navigation element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub text: String,
    pub href: Option<String>,
    pub classes: Vec<String>,
    pub raw_markup: String,
}

/// A `div`/`section`/`article` whose classes look like a layout container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    pub tag_name: String,
    pub classes: Vec<String>,
    pub inline_style: Option<String>,
    pub raw_markup: String,
}

/// Icon library an icon element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum IconSystem {
    FontAwesome,
    Other,
}

/// SVG-only icon details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgDetails {
    pub view_box: Option<String>,
    /// Serialized first `path` descendant, or the literal `"None"`
    pub path_markup: String,
}

/// An `i`/`span`/`svg` element classified as an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub raw_markup: String,
    pub classes: Vec<String>,
    pub inline_style: Option<String>,
    pub icon_system: IconSystem,
    /// Present for `svg` elements only; its fields are inlined into the record
    #[serde(flatten)]
    pub svg: Option<SvgDetails>,
}

/// An `img` element with its resolved source and (optionally) inlined bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub raw_markup: String,
    pub resolved_src: String,
    pub alt: String,
    pub classes: Vec<String>,
    pub inline_style: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub loading_hint: Option<String>,
    /// `data:` URI, or `None` when the fetch failed
    pub inline_data: Option<String>,
}

impl ImageRecord {
    /// Whether the source still has to be fetched to produce inline data.
    pub fn needs_fetch(&self) -> bool {
        !self.resolved_src.starts_with("data:")
    }
}

/// Full design inventory of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub structure: StructureFlags,
    pub fonts: BTreeSet<String>,
    pub colors: BTreeSet<String>,
    pub buttons: Vec<ButtonRecord>,
    pub navigation: Vec<NavRecord>,
    pub layout: Vec<LayoutRecord>,
    pub icons: Vec<IconRecord>,
    pub images: Vec<ImageRecord>,
}

/// Result of one extraction request: a report, or the page-level error record.
///
/// Serializes untagged, so the JSON body is either the report object or
/// exactly `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    Report(Box<ExtractionReport>),
    Failed { error: String },
}

impl ExtractionOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, ExtractionOutcome::Failed { .. })
    }

    pub fn report(&self) -> Option<&ExtractionReport> {
        match self {
            ExtractionOutcome::Report(report) => Some(report.as_ref()),
            ExtractionOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ExtractionOutcome::Report(_) => None,
            ExtractionOutcome::Failed { error } => Some(error.as_str()),
        }
    }
}

impl From<ExtractionReport> for ExtractionOutcome {
    fn from(report: ExtractionReport) -> Self {
        ExtractionOutcome::Report(Box::new(report))
    }
}
