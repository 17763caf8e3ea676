//! Selector reference checks for generated scripts

use qag_domain::entities::ElementInventory;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// `By.ID`, `By.NAME` and `find_element_by_id/name` arguments
static BY_LOCATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:By\.(ID|NAME)\s*,\s*|find_element_by_(id|name)\s*\(\s*)["']([^"']+)["']"#,
    )
    .expect("Invalid regex")
});

/// `#id` inside `By.CSS_SELECTOR` arguments
static CSS_LOCATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"By\.CSS_SELECTOR\s*,\s*["']([^"']+)["']"#).expect("Invalid regex")
});

static CSS_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([A-Za-z_][A-Za-z0-9_\-]*)").expect("Invalid regex"));

/// Selectors referenced by `script` that do not exist in `inventory`
///
/// Returned as `id:<value>` or `name:<value>`, sorted and deduplicated.
pub fn find_unknown_selectors(script: &str, inventory: &ElementInventory) -> Vec<String> {
    let mut unknown = BTreeSet::new();

    for caps in BY_LOCATOR.captures_iter(script) {
        let kind = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_ascii_lowercase());
        let Some(value) = caps.get(3).map(|m| m.as_str()) else {
            continue;
        };
        match kind.as_deref() {
            Some("id") if !inventory.has_id(value) => {
                unknown.insert(format!("id:{value}"));
            }
            Some("name") if !inventory.has_name(value) => {
                unknown.insert(format!("name:{value}"));
            }
            _ => {}
        }
    }

    for caps in CSS_LOCATOR.captures_iter(script) {
        let Some(selector) = caps.get(1) else {
            continue;
        };
        for id in CSS_ID.captures_iter(selector.as_str()) {
            if let Some(value) = id.get(1).map(|m| m.as_str())
                && !inventory.has_id(value)
            {
                unknown.insert(format!("id:{value}"));
            }
        }
    }

    unknown.into_iter().collect()
}
