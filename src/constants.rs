use regex::Regex;
use std::collections::HashSet;

/// Marker identifying a local asset reference inside style and attribute strings.
pub const ASSETS_IDENTIFIER: &str = "/playground_assets";

/// Token inside mapping children replaced by the original node's children.
pub const CHILDREN_TOKEN: &str = "$children";

pub const STATE_NODE_TYPE: &str = "state";

pub const DEFAULT_LOCAL_DEPENDENCIES_PREFIX: &str = "./";

lazy_static::lazy_static! {
    pub static ref STYLE_PROPERTIES_WITH_URL: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("background");
        s.insert("backgroundImage");
        s
    };

    pub static ref ATTRIBUTES_WITH_URL: HashSet<&'static str> = {
        let mut s = HashSet::new();
        s.insert("url");
        s.insert("srcset");
        s
    };

    /// `$attrs.<key>`: a reference to the UIDL node's own attribute `<key>`
    pub static ref ATTRS_REFERENCE_RE: Regex = Regex::new(r"(?s)^\$attrs\.(.*)$").unwrap();
}
