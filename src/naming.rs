//! Fallback names and component-unique keys.
//!
//! Two sweeps over the final (already resolved) tree share one `NodesLookup`:
//! the counting sweep records how often each name occurs, then the key sweep
//! hands out `name`, `name1`, `name2`, ... per name. Suffix width grows by one
//! digit each time a name's total count reaches a power of ten (10, 100, ...),
//! so a name seen 12 times yields `name`, `name01` ... `name11`.
//!
//! A lookup is single-use: running the counting sweep twice over the same
//! lookup doubles every count.

use std::collections::HashMap;
use std::convert::Infallible;

use crate::error::ResolverError;
use crate::uidl::ContentNode;
use crate::visitor::{walk_content, ContentVisitor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameOccurrence {
    pub count: usize,
    /// Zero-padded suffix handed to the next node with this name
    pub next_key: String,
}

impl NameOccurrence {
    fn new() -> Self {
        Self {
            count: 0,
            next_key: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NodesLookup {
    occurrences: HashMap<String, NameOccurrence>,
}

impl NodesLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&NameOccurrence> {
        self.occurrences.get(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    fn record(&mut self, name: &str) {
        let occurrence = self
            .occurrences
            .entry(name.to_string())
            .or_insert_with(NameOccurrence::new);

        occurrence.count += 1;
        if occurrence.count > 9 && is_power_of_ten(occurrence.count) {
            occurrence.next_key.insert(0, '0');
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// COUNTING SWEEP
// ═══════════════════════════════════════════════════════════════════════════════

struct NameCounter<'a> {
    lookup: &'a mut NodesLookup,
}

impl ContentVisitor for NameCounter<'_> {
    type Error = Infallible;

    fn visit_node(&mut self, node: &mut ContentNode) -> Result<(), Infallible> {
        self.lookup.record(node.effective_name());
        Ok(())
    }
}

/// Records every name of the tree's naming scope in `lookup`.
pub fn create_nodes_lookup(node: &mut ContentNode, lookup: &mut NodesLookup) {
    let mut counter = NameCounter { lookup };
    match walk_content(&mut counter, node) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// KEY SWEEP
// ═══════════════════════════════════════════════════════════════════════════════

struct KeyAssigner<'a> {
    lookup: &'a mut NodesLookup,
}

impl ContentVisitor for KeyAssigner<'_> {
    type Error = ResolverError;

    fn visit_node(&mut self, node: &mut ContentNode) -> Result<(), ResolverError> {
        let name = node.effective_name().to_string();

        let occurrence = self
            .lookup
            .occurrences
            .get_mut(&name)
            .ok_or_else(|| ResolverError::UncountedName { name: name.clone() })?;

        let key = if occurrence.count == 1 {
            name.clone()
        } else {
            let current = std::mem::take(&mut occurrence.next_key);
            occurrence.next_key = compute_incremental_string_key(&current);
            if current.parse::<u64>().is_ok_and(|value| value == 0) {
                name.clone()
            } else {
                format!("{}{}", name, current)
            }
        };

        node.name = Some(name);
        node.key = Some(key);
        Ok(())
    }
}

/// Defaults every missing name to the node type and assigns keys from a
/// lookup filled by `create_nodes_lookup` over the same tree.
pub fn generate_fallback_names_and_keys(
    node: &mut ContentNode,
    lookup: &mut NodesLookup,
) -> Result<(), ResolverError> {
    let mut assigner = KeyAssigner { lookup };
    walk_content(&mut assigner, node)
}

/// Runs both sweeps with a fresh lookup and returns the final lookup.
pub fn generate_node_keys(node: &mut ContentNode) -> Result<NodesLookup, ResolverError> {
    let mut lookup = NodesLookup::new();
    create_nodes_lookup(node, &mut lookup);
    generate_fallback_names_and_keys(node, &mut lookup)?;
    Ok(lookup)
}

// ═══════════════════════════════════════════════════════════════════════════════
// KEY COLLECTION
// ═══════════════════════════════════════════════════════════════════════════════

struct KeyCollector {
    keys: Vec<String>,
}

impl ContentVisitor for KeyCollector {
    type Error = Infallible;

    fn visit_node(&mut self, node: &mut ContentNode) -> Result<(), Infallible> {
        if let Some(key) = &node.key {
            self.keys.push(key.clone());
        }
        Ok(())
    }
}

/// Keys of the naming scope in traversal order; unkeyed nodes are skipped.
pub fn collect_node_keys(node: &mut ContentNode) -> Vec<String> {
    let mut collector = KeyCollector { keys: Vec::new() };
    match walk_content(&mut collector, node) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    collector.keys
}

// ═══════════════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// `"09"` -> `"10"`, `"1"` -> `"2"`, `"9"` -> `"10"`: increments and keeps at
/// least the width of the previous key.
fn compute_incremental_string_key(current_key: &str) -> String {
    let next = current_key.parse::<u64>().unwrap_or_default() + 1;
    format!("{:0>width$}", next, width = current_key.len())
}

fn is_power_of_ten(value: usize) -> bool {
    let mut value = value;
    while value > 9 && value % 10 == 0 {
        value /= 10;
    }
    value == 1
}
