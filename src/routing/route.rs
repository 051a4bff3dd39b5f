//! Internal route decomposition.

use serde::Serialize;

/// A matched route broken into its dispatch coordinates.
///
/// The first segment of the internal route names the controller, the
/// second names the action, and everything after passes through as
/// positional string parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    /// Controller identifier, e.g. `ProductController` for `product`.
    pub controller: String,
    /// Action identifier, e.g. `actionView` for `view`. A missing second
    /// segment resolves to `actionIndex`.
    pub action: String,
    /// Remaining segments, verbatim and in order.
    pub params: Vec<String>,
}

impl ResolvedRoute {
    /// Decompose a `/`-delimited internal route string.
    pub fn parse(internal: &str) -> Self {
        let mut segments = internal.split('/');

        let controller = controller_ident(segments.next().unwrap_or(""));
        let action = action_ident(segments.next().unwrap_or(""));
        let params = segments.map(str::to_string).collect();

        Self {
            controller,
            action,
            params,
        }
    }
}

/// Maps a resource segment to its controller identifier.
fn controller_ident(segment: &str) -> String {
    format!("{}Controller", ucfirst(segment))
}

/// Maps an operation segment to its action identifier. Empty segments
/// resolve to the index action.
fn action_ident(segment: &str) -> String {
    if segment.is_empty() {
        "actionIndex".to_string()
    } else {
        format!("action{}", ucfirst(segment))
    }
}

fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
