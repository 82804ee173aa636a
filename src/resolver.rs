//! Structural resolution of a UIDL content tree against an element mapping.
//!
//! Rules are applied to each node in a fixed order; later rules see the
//! effects of earlier ones:
//!
//! 1. type substitution (identity when the type has no mapping entry)
//! 2. children template splicing (`$children`)
//! 3. dependency inference
//! 4. asset prefixing in styles
//! 5. asset prefixing in `url`/`srcset` attributes
//! 6. attribute merge
//! 7. repeat resolution (`$attrs.` data sources, recursive content)
//! 8. state branch resolution
//! 9. recursion into node children

use tracing::{trace, warn};

use crate::assets::{prefix_asset_urls, prefix_attribute_urls};
use crate::attributes::merge_attributes;
use crate::dependency::resolve_dependency;
use crate::options::ResolveOptions;
use crate::splice::insert_children_into_template;
use crate::uidl::{ContentChild, ContentNode, ElementMapping, ElementsMapping, RepeatStructure};

/// Clones the mapping entry for `node_type`, so nothing derived from it can
/// write back into the shared table.
fn lookup_element_mapping(elements_mapping: &ElementsMapping, node_type: &str) -> ElementMapping {
    match elements_mapping.get(node_type) {
        Some(mapping) => mapping.clone(),
        None => ElementMapping::identity(node_type),
    }
}

/// Resolves `node` and all of its descendants in place.
pub fn resolve_content_node(
    node: &mut ContentNode,
    elements_mapping: &ElementsMapping,
    options: &ResolveOptions,
) {
    let ElementMapping {
        r#type: mapped_type,
        attrs: mapped_attrs,
        children: mapped_children,
        dependency: mapped_dependency,
        repeat: mapped_repeat,
    } = lookup_element_mapping(elements_mapping, &node.r#type);

    let original_type = std::mem::replace(&mut node.r#type, mapped_type);
    if original_type != node.r#type {
        trace!(from = %original_type, to = %node.r#type, "mapped content node");
    }

    if let Some(template) = mapped_children {
        let original_children = node.children.take().unwrap_or_default();
        let original_attrs = node.attrs.clone().unwrap_or_default();
        node.children = Some(insert_children_into_template(
            template,
            &original_children,
            &original_attrs,
        ));
    }

    node.dependency = resolve_dependency(
        &node.r#type,
        node.dependency.take(),
        mapped_dependency,
        &options.local_dependencies_prefix,
    );

    if let Some(assets_prefix) = options.assets_prefix.as_deref() {
        if let Some(style) = node.style.as_mut() {
            prefix_asset_urls(style, assets_prefix);
        }
        if let Some(attrs) = node.attrs.as_mut() {
            prefix_attribute_urls(attrs, assets_prefix);
        }
    }

    if let Some(mapped_attrs) = mapped_attrs {
        node.attrs = Some(merge_attributes(&mapped_attrs, node.attrs.as_ref()));
    }

    if let Some(mut repeat) = node.repeat.take().or(mapped_repeat) {
        resolve_repeat_data_source(&mut repeat, node);
        resolve_content_node(&mut repeat.content, elements_mapping, options);
        node.repeat = Some(repeat);
    }

    if let Some(branches) = node.state_branches_mut() {
        for branch in branches.iter_mut() {
            if let ContentChild::Node(content) = &mut branch.content {
                resolve_content_node(content, elements_mapping, options);
            }
        }
    }

    if let Some(children) = node.children.as_mut() {
        for child in children.iter_mut() {
            if let ContentChild::Node(child) = child {
                resolve_content_node(child, elements_mapping, options);
            }
        }
    }
}

/// Replaces an `$attrs.<key>` data source with the node's `<key>` attribute.
/// A missing attribute leaves the repeat without a data source. Nodes without
/// attributes keep the reference untouched.
fn resolve_repeat_data_source(repeat: &mut RepeatStructure, node: &ContentNode) {
    let Some(attrs) = node.attrs.as_ref() else {
        return;
    };
    let Some(reference) = repeat
        .data_source
        .as_ref()
        .and_then(|source| source.attribute_reference())
    else {
        return;
    };

    let source = attrs.get(reference).cloned();
    if source.is_none() {
        let node_type = node.r#type.as_str();
        warn!(
            node_type,
            attribute = reference,
            "repeat data source references a missing attribute"
        );
    }
    repeat.data_source = source;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uidl::AttributeValue;
    use serde_json::json;

    fn node(value: serde_json::Value) -> ContentNode {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_repeat_source_from_attrs() {
        let mut select = node(json!({
            "type": "select",
            "attrs": { "options": ["a", "b"] },
            "repeat": { "dataSource": "$attrs.options", "content": { "type": "option" } }
        }));
        let mut repeat = select.repeat.take().unwrap();
        resolve_repeat_data_source(&mut repeat, &select);
        assert_eq!(
            repeat.data_source,
            Some(AttributeValue::Structured(json!(["a", "b"])))
        );
    }

    #[test]
    fn test_repeat_source_missing_attribute_is_absent() {
        let mut select = node(json!({
            "type": "select",
            "attrs": { "name": "choice" },
            "repeat": { "dataSource": "$attrs.options", "content": { "type": "option" } }
        }));
        let mut repeat = select.repeat.take().unwrap();
        resolve_repeat_data_source(&mut repeat, &select);
        assert!(repeat.data_source.is_none());
    }

    #[test]
    fn test_repeat_source_kept_without_attrs() {
        let mut select = node(json!({
            "type": "select",
            "repeat": { "dataSource": "$attrs.options", "content": { "type": "option" } }
        }));
        let mut repeat = select.repeat.take().unwrap();
        resolve_repeat_data_source(&mut repeat, &select);
        assert_eq!(repeat.data_source, Some(AttributeValue::from("$attrs.options")));
    }

    #[test]
    fn test_lookup_falls_back_to_identity() {
        let mapping = ElementsMapping::new();
        assert_eq!(
            lookup_element_mapping(&mapping, "custom"),
            ElementMapping::identity("custom")
        );
    }
}
