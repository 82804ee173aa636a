use std::collections::HashSet;

use crate::uidl::Attributes;

/// Combines the attributes of a mapping entry with the attributes of the UIDL
/// node it is applied to.
///
/// Mapping values of the form `$attrs.<key>` forward the node's `<key>`
/// attribute under the mapping's name and consume it, so it is not emitted
/// under its own name. They are dropped when the node does not supply a truthy
/// `<key>`. Falsy mapping values are skipped. Every other node attribute is
/// written last and overrides a mapping default of the same name.
pub fn merge_attributes(mapped_attrs: &Attributes, uidl_attrs: Option<&Attributes>) -> Attributes {
    let mut resolved = Attributes::new();
    let mut consumed: HashSet<&str> = HashSet::new();

    for (key, value) in mapped_attrs {
        if !value.is_truthy() {
            continue;
        }

        if let Some(reference) = value.attribute_reference() {
            let forwarded = uidl_attrs
                .and_then(|attrs| attrs.get(reference))
                .filter(|v| v.is_truthy());
            if let Some(forwarded) = forwarded {
                resolved.insert(key.clone(), forwarded.clone());
                consumed.insert(reference);
            }
            continue;
        }

        resolved.insert(key.clone(), value.clone());
    }

    if let Some(uidl_attrs) = uidl_attrs {
        for (key, value) in uidl_attrs {
            if !consumed.contains(key.as_str()) {
                resolved.insert(key.clone(), value.clone());
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uidl::AttributeValue;
    use serde_json::json;

    fn attrs(value: serde_json::Value) -> Attributes {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_reference_is_forwarded_and_consumed() {
        let mapped = attrs(json!({ "href": "$attrs.url", "target": "_blank" }));
        let uidl = attrs(json!({ "url": "https://x" }));

        let merged = merge_attributes(&mapped, Some(&uidl));
        assert_eq!(merged, attrs(json!({ "href": "https://x", "target": "_blank" })));
    }

    #[test]
    fn test_reference_without_source_is_dropped() {
        let mapped = attrs(json!({ "href": "$attrs.url", "target": "_blank" }));

        let merged = merge_attributes(&mapped, None);
        assert_eq!(merged, attrs(json!({ "target": "_blank" })));

        let merged = merge_attributes(&mapped, Some(&attrs(json!({ "url": "" }))));
        // not consumed, so the empty value is kept under its own name
        assert_eq!(merged, attrs(json!({ "target": "_blank", "url": "" })));
    }

    #[test]
    fn test_uidl_overrides_mapping_defaults() {
        let mapped = attrs(json!({ "type": "text", "class": "input" }));
        let uidl = attrs(json!({ "type": "password" }));

        let merged = merge_attributes(&mapped, Some(&uidl));
        assert_eq!(merged["type"], AttributeValue::from("password"));
        assert_eq!(merged["class"], AttributeValue::from("input"));
    }

    #[test]
    fn test_falsy_mapping_values_skipped() {
        let mapped = attrs(json!({ "disabled": false, "tabIndex": 0, "role": "" , "lang": "en" }));

        let merged = merge_attributes(&mapped, None);
        assert_eq!(merged, attrs(json!({ "lang": "en" })));
    }

    #[test]
    fn test_consumed_key_not_reemitted_even_if_mapping_also_names_it() {
        let mapped = attrs(json!({ "href": "$attrs.url", "url": "default" }));
        let uidl = attrs(json!({ "url": "https://x" }));

        let merged = merge_attributes(&mapped, Some(&uidl));
        assert_eq!(merged, attrs(json!({ "href": "https://x", "url": "default" })));
    }
}
