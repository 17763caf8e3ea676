//! Page Element Inventory
//!
//! Canonical description of the interactive elements present in a page's
//! markup. The inventory is the authoritative set of selectors a generated
//! automation script may reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of an interactive element
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ElementTag {
    /// `<input>`
    Input,
    /// `<select>`
    Select,
    /// `<textarea>`
    Textarea,
    /// `<button>`
    Button,
}

impl ElementTag {
    /// Parse an HTML tag name, ignoring anything that is not interactive
    pub fn from_tag_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "input" => Some(Self::Input),
            "select" => Some(Self::Select),
            "textarea" => Some(Self::Textarea),
            "button" => Some(Self::Button),
            _ => None,
        }
    }

    /// Lowercase HTML tag name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Button => "button",
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of one interactive element
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementDescriptor {
    /// Element tag
    pub tag: ElementTag,
    /// `type` attribute, if any
    #[serde(rename = "type")]
    pub element_type: Option<String>,
    /// `id` attribute, if any
    pub id: Option<String>,
    /// `name` attribute, if any
    pub name: Option<String>,
    /// CSS classes in document order
    pub css_classes: Vec<String>,
    /// Trimmed visible text, or the `value` of value-bearing buttons
    pub label_text: String,
}

impl ElementDescriptor {
    /// Whether the element can be addressed by id or name
    pub fn is_addressable(&self) -> bool {
        self.id.is_some() || self.name.is_some()
    }
}

/// Inputs and buttons extracted from one piece of markup
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementInventory {
    /// Every `input`, `select` and `textarea`
    pub inputs: Vec<ElementDescriptor>,
    /// Every `button`, plus `input` elements of type submit/button
    pub buttons: Vec<ElementDescriptor>,
}

impl ElementInventory {
    /// Whether no interactive element was found
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.buttons.is_empty()
    }

    /// Iterate over every descriptor (inputs first, then buttons)
    pub fn iter(&self) -> impl Iterator<Item = &ElementDescriptor> {
        self.inputs.iter().chain(self.buttons.iter())
    }

    /// Whether an element with this `id` exists
    pub fn has_id(&self, id: &str) -> bool {
        self.iter().any(|e| e.id.as_deref() == Some(id))
    }

    /// Whether an element with this `name` exists
    pub fn has_name(&self, name: &str) -> bool {
        self.iter().any(|e| e.name.as_deref() == Some(name))
    }

    /// Merge another inventory into this one, preserving order
    pub fn extend(&mut self, other: ElementInventory) {
        self.inputs.extend(other.inputs);
        self.buttons.extend(other.buttons);
    }
}
