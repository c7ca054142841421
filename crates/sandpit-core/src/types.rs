//! Core playground types: code kinds, module state, and persisted records.
//!
//! These types are platform-agnostic and shared between the pure session
//! logic and the browser DOM layer.

use serde::{Deserialize, Serialize};

/// Quiet window for the per-kind trailing-edge debounce, in milliseconds.
///
/// A preview flush fires only after this much time has passed without a
/// further edit to the same code kind.
pub const QUIET_WINDOW_MS: u32 = 600;

/// Default content for a fresh item's HTML buffer.
///
/// CSS and JS buffers start empty; only HTML gets a skeleton so a new
/// item renders something recognizable immediately.
pub const DEFAULT_HTML_SKELETON: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Document</title>
</head>
<body>

</body>
</html>"#;

/// The three kinds of code a playground item carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeKind {
    Html,
    Css,
    Js,
}

impl CodeKind {
    /// All kinds, in natural injection order (html, then css, then js).
    pub const ALL: [CodeKind; 3] = [CodeKind::Html, CodeKind::Css, CodeKind::Js];

    /// Stable index for per-kind arrays (buffers, module states, timers).
    pub fn index(self) -> usize {
        match self {
            CodeKind::Html => 0,
            CodeKind::Css => 1,
            CodeKind::Js => 2,
        }
    }

    /// Lowercase name, matching the persisted record field.
    pub fn as_str(self) -> &'static str {
        match self {
            CodeKind::Html => "html",
            CodeKind::Css => "css",
            CodeKind::Js => "js",
        }
    }

    /// Reserved element id of this kind's injected node in the preview
    /// document. At most one element with this id exists at any time.
    pub fn injected_node_id(self) -> &'static str {
        match self {
            CodeKind::Html => "customHTML",
            CodeKind::Css => "customCSS",
            CodeKind::Js => "customJS",
        }
    }
}

impl std::fmt::Display for CodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility/dirty state of one editor module, tracked per kind.
///
/// `VisibleDirty` means the buffer has changed since the last injection
/// and a debounced flush is pending. Hiding a module does NOT remove its
/// injected node from the preview; it only unmounts the editor panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModuleState {
    #[default]
    Hidden,
    VisibleClean,
    VisibleDirty,
}

impl ModuleState {
    pub fn is_visible(self) -> bool {
        !matches!(self, ModuleState::Hidden)
    }
}

/// One persisted playground item.
///
/// Fields other than `id` are optional: a record is created with only the
/// first-edited field and accretes the others as they change.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PlaygroundRecord {
    pub id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,
}

impl PlaygroundRecord {
    /// Create an empty record for the given id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Overwrite a single field.
    pub fn set_field(&mut self, field: RecordField, value: &str) {
        let slot = match field {
            RecordField::Title => &mut self.title,
            RecordField::Code(CodeKind::Html) => &mut self.html,
            RecordField::Code(CodeKind::Css) => &mut self.css,
            RecordField::Code(CodeKind::Js) => &mut self.js,
        };
        *slot = Some(value.to_owned());
    }

    /// Read a single field, if it was ever written.
    pub fn field(&self, field: RecordField) -> Option<&str> {
        match field {
            RecordField::Title => self.title.as_deref(),
            RecordField::Code(CodeKind::Html) => self.html.as_deref(),
            RecordField::Code(CodeKind::Css) => self.css.as_deref(),
            RecordField::Code(CodeKind::Js) => self.js.as_deref(),
        }
    }
}

/// Selector for the editable fields of a record: the three code buffers
/// plus the item title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordField {
    Title,
    Code(CodeKind),
}

impl From<CodeKind> for RecordField {
    fn from(kind: CodeKind) -> Self {
        RecordField::Code(kind)
    }
}
