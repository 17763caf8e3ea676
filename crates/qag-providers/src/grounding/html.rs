//! HTML grounding extractor backed by the `scraper` document tree
//!
//! Every `input`, `select` and `textarea` becomes an input descriptor.
//! Every `button`, and every `input` of type `submit` or `button`, becomes
//! a button descriptor, so such inputs are listed in both sequences.
//! Descriptors keep document order.

use std::sync::LazyLock;

use qag_domain::entities::{ElementDescriptor, ElementInventory, ElementTag};
use qag_domain::ports::providers::GroundingExtractor;
use scraper::{ElementRef, Html, Selector};

static INTERACTIVE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("input, select, textarea, button").expect("Invalid selector")
});

/// Input types that act as buttons
const BUTTON_INPUT_TYPES: &[&str] = &["submit", "button"];

/// Grounding extractor for HTML markup
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlGroundingExtractor;

impl HtmlGroundingExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

fn attribute(element: &ElementRef<'_>, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn describe(element: &ElementRef<'_>, tag: ElementTag) -> ElementDescriptor {
    let element_type = attribute(element, "type").map(|t| t.to_ascii_lowercase());
    let text = collapse_whitespace(&element.text().collect::<String>());
    let label_text = if text.is_empty() {
        element
            .value()
            .attr("value")
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    } else {
        text
    };

    ElementDescriptor {
        tag,
        element_type,
        id: attribute(element, "id"),
        name: attribute(element, "name"),
        css_classes: element
            .value()
            .attr("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default(),
        label_text,
    }
}

impl GroundingExtractor for HtmlGroundingExtractor {
    fn extract(&self, markup: &str) -> ElementInventory {
        let document = Html::parse_document(markup);
        let mut inventory = ElementInventory::default();

        for element in document.select(&INTERACTIVE) {
            let Some(tag) = ElementTag::from_tag_name(element.value().name()) else {
                continue;
            };
            let descriptor = describe(&element, tag);

            match tag {
                ElementTag::Button => inventory.buttons.push(descriptor),
                ElementTag::Input => {
                    let acts_as_button = descriptor
                        .element_type
                        .as_deref()
                        .is_some_and(|t| BUTTON_INPUT_TYPES.contains(&t));
                    if acts_as_button {
                        inventory.buttons.push(descriptor.clone());
                    }
                    inventory.inputs.push(descriptor);
                }
                ElementTag::Select | ElementTag::Textarea => inventory.inputs.push(descriptor),
            }
        }
        inventory
    }
}
