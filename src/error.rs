use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ERROR CODES
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_UNCOUNTED_NAME: &str = "UIDL-ERR-NAME-001";
pub const ERR_MALFORMED_INPUT: &str = "UIDL-ERR-INPUT-001";

fn get_guarantee(code: &str) -> &'static str {
    match code {
        ERR_UNCOUNTED_NAME => {
            "Key assignment walks exactly the nodes the counting sweep recorded."
        }
        ERR_MALFORMED_INPUT => "Bridge input is valid UIDL and mapping JSON.",
        _ => "Unknown invariant.",
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RESOLVER ERROR
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum ResolverError {
    /// The key sweep reached a name that the counting sweep never saw. The two
    /// sweeps walked different trees.
    #[error("node name '{name}' was not recorded by the counting sweep")]
    UncountedName { name: String },

    #[error("malformed {what}: {source}")]
    Malformed {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ResolverError {
    pub fn malformed(what: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| ResolverError::Malformed { what, source }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ResolverError::UncountedName { .. } => ERR_UNCOUNTED_NAME,
            ResolverError::Malformed { .. } => ERR_MALFORMED_INPUT,
        }
    }

    pub fn guarantee(&self) -> &'static str {
        get_guarantee(self.code())
    }
}
