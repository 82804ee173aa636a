use crate::constants::CHILDREN_TOKEN;
use crate::uidl::{Attributes, ContentChild};

/// Composes a mapping's children template with the children of the node being
/// mapped. Every `$children` text token, at any depth of the template, is
/// replaced in place by the full original children list.
///
/// `template` must already be a private copy of the mapping entry.
/// `original_attrs` is threaded through for `$attrs.` references inside
/// templates; no rule reads it yet.
pub fn insert_children_into_template(
    template: Vec<ContentChild>,
    original_children: &[ContentChild],
    original_attrs: &Attributes,
) -> Vec<ContentChild> {
    let mut spliced = Vec::with_capacity(template.len() + original_children.len());

    for child in template {
        match child {
            ContentChild::Text(text) if text == CHILDREN_TOKEN => {
                spliced.extend(original_children.iter().cloned());
            }
            ContentChild::Text(text) => spliced.push(ContentChild::Text(text)),
            ContentChild::Node(mut node) => {
                if let Some(children) = node.children.take() {
                    node.children = Some(insert_children_into_template(
                        children,
                        original_children,
                        original_attrs,
                    ));
                }
                spliced.push(ContentChild::Node(node));
            }
        }
    }

    spliced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uidl::ContentNode;

    #[test]
    fn test_token_is_spread_in_place() {
        let template: Vec<ContentChild> =
            vec!["prefix-text".into(), "$children".into(), "suffix-text".into()];
        let original: Vec<ContentChild> = vec!["A".into(), "B".into()];

        let spliced = insert_children_into_template(template, &original, &Attributes::new());
        let expected: Vec<ContentChild> = vec![
            "prefix-text".into(),
            "A".into(),
            "B".into(),
            "suffix-text".into(),
        ];
        assert_eq!(spliced, expected);
    }

    #[test]
    fn test_nested_template_node() {
        let template: Vec<ContentChild> = vec![ContentNode::new("label")
            .with_children(vec![ContentNode::new("span").into(), "$children".into()])
            .into()];
        let original: Vec<ContentChild> = vec![ContentNode::new("text").into()];

        let spliced = insert_children_into_template(template, &original, &Attributes::new());
        let label = spliced[0].as_node().unwrap();
        let children = label.children.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].as_node().unwrap().r#type, "span");
        assert_eq!(children[1].as_node().unwrap().r#type, "text");
    }

    #[test]
    fn test_without_token_original_children_are_dropped() {
        let template: Vec<ContentChild> = vec![ContentNode::new("hr").into()];
        let original: Vec<ContentChild> = vec!["ignored".into()];

        let spliced = insert_children_into_template(template, &original, &Attributes::new());
        assert_eq!(spliced, vec![ContentChild::Node(ContentNode::new("hr"))]);
    }

    #[test]
    fn test_repeated_token_copies_children_each_time() {
        let template: Vec<ContentChild> =
            vec!["$children".into(), "|".into(), "$children".into()];
        let original: Vec<ContentChild> = vec!["x".into()];

        let spliced = insert_children_into_template(template, &original, &Attributes::new());
        let expected: Vec<ContentChild> = vec!["x".into(), "|".into(), "x".into()];
        assert_eq!(spliced, expected);
    }
}
