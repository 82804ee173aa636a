//! Rewriting of local asset references against a deployment prefix.

use crate::constants::{ASSETS_IDENTIFIER, ATTRIBUTES_WITH_URL, STYLE_PROPERTIES_WITH_URL};
use crate::uidl::{AttributeValue, Attributes, StyleGroup, StyleValue};

/// Prefixes `original` when it starts with the asset marker; any other string
/// is returned unchanged. A trailing `/` on the prefix is not doubled.
pub fn prefix_playground_assets_url(prefix: &str, original: &str) -> String {
    if !original.starts_with(ASSETS_IDENTIFIER) {
        return original.to_string();
    }
    let prefix = prefix.strip_suffix('/').unwrap_or(prefix);
    format!("{}{}", prefix, original)
}

/// Walks a style group (and every nested group) and rewrites asset references
/// found in whitelisted properties. Everything before the marker is kept.
pub fn prefix_asset_urls(style: &mut StyleGroup, assets_prefix: &str) {
    for (property, value) in style.iter_mut() {
        match value {
            StyleValue::Group(group) => prefix_asset_urls(group, assets_prefix),
            StyleValue::Number(_) => {}
            StyleValue::Text(text) => {
                if !STYLE_PROPERTIES_WITH_URL.contains(property.as_str()) {
                    continue;
                }
                if let Some(start) = text.find(ASSETS_IDENTIFIER) {
                    let (head, asset) = text.split_at(start);
                    *text = format!(
                        "{}{}",
                        head,
                        prefix_playground_assets_url(assets_prefix, asset)
                    );
                }
            }
        }
    }
}

/// Rewrites the `url`/`srcset` attributes of a node. Non-string and falsy
/// values are left alone.
pub fn prefix_attribute_urls(attrs: &mut Attributes, assets_prefix: &str) {
    for attribute in ATTRIBUTES_WITH_URL.iter() {
        if let Some(AttributeValue::Static(value)) = attrs.get_mut(*attribute) {
            if !value.is_empty() {
                *value = prefix_playground_assets_url(assets_prefix, value);
            }
        }
    }
}
