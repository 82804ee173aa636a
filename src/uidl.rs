use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::{ATTRS_REFERENCE_RE, STATE_NODE_TYPE};

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTES & STYLES
// ═══════════════════════════════════════════════════════════════════════════════

/// Attribute maps keep insertion order; it reaches the emitted markup.
pub type Attributes = IndexMap<String, AttributeValue>;

/// Declaration order matters for CSS shorthands (`font` after `lineHeight`).
pub type StyleGroup = IndexMap<String, StyleValue>;

/// Fields the resolver does not interpret, carried through verbatim.
pub type PassThrough = serde_json::Map<String, serde_json::Value>;

/// A single attribute value as it appears in the UIDL or in a mapping entry.
///
/// Strings of the form `$attrs.<key>` are references to another attribute of
/// the UIDL node being mapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Static(String),
    Number(serde_json::Number),
    Boolean(bool),
    /// Arrays, dynamic references and anything else, carried as-is
    Structured(serde_json::Value),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Static(value) => Some(value),
            _ => None,
        }
    }

    /// Truthiness as the UIDL tooling defines it: empty strings, zero,
    /// `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Static(value) => !value.is_empty(),
            AttributeValue::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            AttributeValue::Boolean(flag) => *flag,
            AttributeValue::Structured(value) => !value.is_null(),
        }
    }

    /// Returns `<key>` when the value is an `$attrs.<key>` reference.
    pub fn attribute_reference(&self) -> Option<&str> {
        let value = self.as_str()?;
        ATTRS_REFERENCE_RE
            .captures(value)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Static(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(serde_json::Number),
    Text(String),
    /// Nested group, e.g. a media query or a pseudo-class
    Group(StyleGroup),
}

// ═══════════════════════════════════════════════════════════════════════════════
// DEPENDENCIES
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    Local,
    Package,
    Library,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DependencyMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub named_import: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
    #[serde(flatten)]
    pub rest: PassThrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDependency {
    pub r#type: DependencyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<DependencyMeta>,
}

impl ComponentDependency {
    pub fn local() -> Self {
        Self {
            r#type: DependencyType::Local,
            path: None,
            version: None,
            meta: None,
        }
    }

    pub fn package(path: &str, version: &str) -> Self {
        Self {
            r#type: DependencyType::Package,
            path: Some(path.to_string()),
            version: Some(version.to_string()),
            meta: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONTENT TREE
// ═══════════════════════════════════════════════════════════════════════════════

/// A child slot of a content node: literal text (or a `$children` token inside
/// mapping templates) or a nested node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentChild {
    Text(String),
    Node(ContentNode),
}

impl ContentChild {
    pub fn as_node(&self) -> Option<&ContentNode> {
        match self {
            ContentChild::Node(node) => Some(node),
            ContentChild::Text(_) => None,
        }
    }
}

impl From<ContentNode> for ContentChild {
    fn from(node: ContentNode) -> Self {
        ContentChild::Node(node)
    }
}

impl From<&str> for ContentChild {
    fn from(text: &str) -> Self {
        ContentChild::Text(text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RepeatMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_index: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterator_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatStructure {
    /// `None` once an `$attrs.` source pointed at a missing attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<AttributeValue>,
    pub content: Box<ContentNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<RepeatMeta>,
    #[serde(flatten)]
    pub rest: PassThrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateBranch {
    pub value: serde_json::Value,
    pub content: ContentChild,
    #[serde(flatten)]
    pub rest: PassThrough,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<ComponentDependency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ContentChild>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatStructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<StateBranch>>,
    /// `events`, `semanticType` and the like
    #[serde(flatten)]
    pub rest: PassThrough,
}

impl ContentNode {
    pub fn new(node_type: &str) -> Self {
        Self {
            r#type: node_type.to_string(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<ContentChild>) -> Self {
        self.children = Some(children);
        self
    }

    /// `name` when set and non-empty, otherwise `type`.
    pub fn effective_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.r#type,
        }
    }

    /// Branches of a `state` node. `None` for every other node, including a
    /// `state` node without branches.
    pub fn state_branches_mut(&mut self) -> Option<&mut Vec<StateBranch>> {
        if self.r#type == STATE_NODE_TYPE {
            self.states.as_mut()
        } else {
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ELEMENT MAPPING
// ═══════════════════════════════════════════════════════════════════════════════

/// Target-specific template for one abstract node type.
///
/// Entries are shared by every node of that type and are never mutated; the
/// resolver works on a clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMapping {
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ContentChild>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<ComponentDependency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RepeatStructure>,
}

impl ElementMapping {
    /// The fallback used when a node type has no entry in the table.
    pub fn identity(node_type: &str) -> Self {
        Self {
            r#type: node_type.to_string(),
            attrs: None,
            children: None,
            dependency: None,
            repeat: None,
        }
    }
}

pub type ElementsMapping = HashMap<String, ElementMapping>;

// ═══════════════════════════════════════════════════════════════════════════════
// COMPONENT
// ═══════════════════════════════════════════════════════════════════════════════

/// A component UIDL: the content tree plus whatever other top-level fields the
/// upstream stage produced (prop/state definitions, metadata), kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentUidl {
    pub name: String,
    pub content: ContentNode,
    #[serde(flatten)]
    pub rest: PassThrough,
}
