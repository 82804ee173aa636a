//! # UIDL Resolver
//!
//! Lowers a framework-agnostic UIDL content tree into a target-specific tree
//! that a code generator can emit directly.
//!
//! ## Resolution Invariants
//!
//! 1. **Mapping Identity**: After resolution `node.type` is the mapped type of the
//!    original type, or the original type when the table has no entry for it.
//!
//! 2. **Read-Only Mapping**: The element mapping table is never mutated. Entries are
//!    cloned on lookup, so one table can serve any number of nodes and components.
//!
//! 3. **Attribute Precedence**: UIDL attributes override mapping defaults, except
//!    those forwarded by a mapping `$attrs.<key>` reference, which are consumed.
//!
//! 4. **Unique Keys**: Every node of a component (repeat content and state branch
//!    content included) gets a key unique within that component. `state` wrappers
//!    carry no key of their own.
//!
//! 5. **Final Shape Naming**: Names and keys are computed once per component, after
//!    the structural pass, over the tree as mapping templates left it.
//!
//! 6. **Fresh Lookup**: Each component resolution uses its own `NodesLookup`.
//!    Reusing one across runs doubles counts and breaks the suffix sequence.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod assets;
mod attributes;
mod component;
mod constants;
mod dependency;
mod error;
mod naming;
mod options;
mod resolver;
mod splice;
mod uidl;
mod visitor;


pub use assets::{prefix_asset_urls, prefix_attribute_urls, prefix_playground_assets_url};
pub use attributes::merge_attributes;
pub use component::{resolve_component, resolve_component_json, resolve_components};
pub use constants::{ASSETS_IDENTIFIER, CHILDREN_TOKEN, DEFAULT_LOCAL_DEPENDENCIES_PREFIX};
pub use dependency::resolve_dependency;
pub use error::{ResolverError, ERR_MALFORMED_INPUT, ERR_UNCOUNTED_NAME};
pub use naming::{
    collect_node_keys, create_nodes_lookup, generate_fallback_names_and_keys,
    generate_node_keys, NameOccurrence, NodesLookup,
};
pub use options::ResolveOptions;
pub use resolver::resolve_content_node;
pub use splice::insert_children_into_template;
pub use uidl::*;
pub use visitor::{walk_children, walk_content, ContentVisitor};

#[cfg(feature = "napi")]
pub use component::resolve_component_native;

#[cfg(feature = "napi")]
#[napi]
pub fn resolver_bridge() -> String {
    "UIDL Resolver Native Bridge Connected".to_string()
}
