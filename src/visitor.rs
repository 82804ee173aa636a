use crate::uidl::{ContentChild, ContentNode};

/// The ContentVisitor trait defines the single traversal of a component's
/// naming scope.
///
/// Rules:
/// 1. Pre-order: a node is visited before its children, children before the
///    repeat content.
/// 2. A `state` node with branches is not visited itself; only the node content
///    of each branch is walked.
/// 3. Text children and text branch contents are skipped.
/// 4. Every sweep that counts, names or collects keys goes through
///    `walk_content`, so the sweeps always see the same nodes.
pub trait ContentVisitor {
    type Error;

    fn visit_node(&mut self, node: &mut ContentNode) -> Result<(), Self::Error>;
}

pub fn walk_content<V: ContentVisitor + ?Sized>(
    visitor: &mut V,
    node: &mut ContentNode,
) -> Result<(), V::Error> {
    if let Some(branches) = node.state_branches_mut() {
        for branch in branches.iter_mut() {
            if let ContentChild::Node(content) = &mut branch.content {
                walk_content(visitor, content)?;
            }
        }
        return Ok(());
    }

    visitor.visit_node(node)?;

    if let Some(children) = node.children.as_mut() {
        walk_children(visitor, children)?;
    }

    if let Some(repeat) = node.repeat.as_mut() {
        walk_content(visitor, &mut repeat.content)?;
    }

    Ok(())
}

pub fn walk_children<V: ContentVisitor + ?Sized>(
    visitor: &mut V,
    children: &mut [ContentChild],
) -> Result<(), V::Error> {
    for child in children {
        if let ContentChild::Node(node) = child {
            walk_content(visitor, node)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    struct TypeRecorder(Vec<String>);

    impl ContentVisitor for TypeRecorder {
        type Error = Infallible;

        fn visit_node(&mut self, node: &mut ContentNode) -> Result<(), Infallible> {
            self.0.push(node.r#type.clone());
            Ok(())
        }
    }

    #[test]
    fn test_pre_order_with_repeat_and_states() {
        let mut root: ContentNode = serde_json::from_value(serde_json::json!({
            "type": "container",
            "children": [
                "text",
                { "type": "state", "states": [
                    { "value": true, "content": { "type": "on" } },
                    { "value": false, "content": "plain" }
                ]},
                { "type": "list", "repeat": {
                    "dataSource": [1, 2],
                    "content": { "type": "item" }
                }},
                { "type": "footer" }
            ]
        }))
        .unwrap();

        let mut recorder = TypeRecorder(Vec::new());
        walk_content(&mut recorder, &mut root).unwrap();
        assert_eq!(recorder.0, vec!["container", "on", "list", "item", "footer"]);
    }
}
