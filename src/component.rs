#[cfg(feature = "napi")]
use napi_derive::napi;
use rayon::prelude::*;
use tracing::debug;

use crate::error::ResolverError;
use crate::naming::{generate_node_keys, NodesLookup};
use crate::options::ResolveOptions;
use crate::resolver::resolve_content_node;
use crate::uidl::{ComponentUidl, ElementsMapping};

// ═══════════════════════════════════════════════════════════════════════════════
// COMPONENT RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Resolves one component in place: structural pass, then both naming sweeps
/// with a lookup private to this component. Returns the lookup.
pub fn resolve_component(
    component: &mut ComponentUidl,
    elements_mapping: &ElementsMapping,
    options: &ResolveOptions,
) -> Result<NodesLookup, ResolverError> {
    resolve_content_node(&mut component.content, elements_mapping, options);
    let lookup = generate_node_keys(&mut component.content)?;

    debug!(
        component = %component.name,
        names = lookup.len(),
        "resolved component"
    );
    Ok(lookup)
}

/// Resolves independent components in parallel. Only the mapping table and
/// the options are shared; the first error is returned.
pub fn resolve_components(
    components: &mut [ComponentUidl],
    elements_mapping: &ElementsMapping,
    options: &ResolveOptions,
) -> Result<(), ResolverError> {
    components.par_iter_mut().try_for_each(|component| {
        resolve_component(component, elements_mapping, options).map(|_| ())
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// JSON BRIDGE
// ═══════════════════════════════════════════════════════════════════════════════

pub fn resolve_component_json(
    uidl_json: &str,
    mapping_json: &str,
    options: &ResolveOptions,
) -> Result<String, ResolverError> {
    let mut component: ComponentUidl =
        serde_json::from_str(uidl_json).map_err(ResolverError::malformed("component UIDL"))?;
    let elements_mapping: ElementsMapping =
        serde_json::from_str(mapping_json).map_err(ResolverError::malformed("elements mapping"))?;

    resolve_component(&mut component, &elements_mapping, options)?;

    serde_json::to_string(&component).map_err(ResolverError::malformed("resolved component"))
}

#[cfg(feature = "napi")]
#[napi]
pub fn resolve_component_native(
    uidl_json: String,
    mapping_json: String,
    options_json: Option<String>,
) -> napi::Result<String> {
    let options: ResolveOptions = match options_json {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| napi::Error::from_reason(format!("Options parse error: {}", e)))?,
        None => ResolveOptions::default(),
    };

    resolve_component_json(&uidl_json, &mapping_json, &options)
        .map_err(|e| napi::Error::from_reason(format!("[{}] {}", e.code(), e)))
}
