//! Ordered route table and pattern matching.

use regex::Regex;

use crate::config::schema::RouteRule;
use crate::config::validation::ValidationError;
use crate::routing::route::ResolvedRoute;

/// One compiled pattern/target pair.
#[derive(Debug, Clone)]
struct RouteEntry {
    pattern: Regex,
    target: String,
}

/// Ordered mapping of URL patterns to internal route templates.
///
/// Built once at startup from configuration and read-only afterwards, so
/// it can be shared across request tasks without locking.
///
/// Matching is deliberately unanchored: a pattern that hits any substring
/// of the path selects its rule, and the first hit in table order wins.
/// Patterns that need exactness must carry their own `^`/`$` anchors;
/// broad patterns placed early will shadow later, more specific ones.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Compile a route table from configured rules, preserving order.
    pub fn from_rules(rules: &[RouteRule]) -> Result<Self, ValidationError> {
        let entries = rules
            .iter()
            .map(|rule| {
                let pattern =
                    Regex::new(&rule.pattern).map_err(|source| ValidationError::InvalidPattern {
                        pattern: rule.pattern.clone(),
                        source,
                    })?;
                Ok(RouteEntry {
                    pattern,
                    target: rule.target.clone(),
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self { entries })
    }

    /// Resolve a request path to its dispatch coordinates.
    ///
    /// Leading and trailing slashes are trimmed before matching. The
    /// matched portion of the path is rewritten with the rule's target
    /// template (`$1`, `$2`, … expand to capture groups; text outside the
    /// match is kept), and the resulting internal route is decomposed.
    ///
    /// Returns `None` when no pattern matches; answering that request is
    /// the caller's concern.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let path = path.trim_matches('/');

        self.entries.iter().find_map(|entry| {
            if entry.pattern.is_match(path) {
                let internal = entry.pattern.replace(path, entry.target.as_str());
                Some(ResolvedRoute::parse(&internal))
            } else {
                None
            }
        })
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no rules are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pattern/target pairs in table order, for diagnostics.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.pattern.as_str(), e.target.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rules: &[(&str, &str)]) -> RouteTable {
        let rules: Vec<RouteRule> = rules
            .iter()
            .map(|(pattern, target)| RouteRule {
                pattern: pattern.to_string(),
                target: target.to_string(),
            })
            .collect();
        RouteTable::from_rules(&rules).unwrap()
    }

    #[test]
    fn test_capture_groups_feed_params() {
        let t = table(&[("^product/([0-9]+)$", "product/view/$1")]);

        let route = t.resolve("product/42").unwrap();
        assert_eq!(route.controller, "ProductController");
        assert_eq!(route.action, "actionView");
        assert_eq!(route.params, vec!["42".to_string()]);
    }

    #[test]
    fn test_first_match_wins() {
        let t = table(&[
            ("catalog", "site/index"),
            ("^catalog$", "catalog/index"),
        ]);

        // The broader pattern sits first and shadows the exact one.
        let route = t.resolve("catalog").unwrap();
        assert_eq!(route.controller, "SiteController");
    }

    #[test]
    fn test_unanchored_substring_match() {
        let t = table(&[("about", "site/about")]);

        // Matches anywhere in the path, by design.
        assert!(t.resolve("company/about-us").is_some());
    }

    #[test]
    fn test_slashes_are_trimmed_before_matching() {
        let t = table(&[("^cart$", "cart/index")]);
        let route = t.resolve("/cart/").unwrap();
        assert_eq!(route.controller, "CartController");
        assert_eq!(route.action, "actionIndex");
    }

    #[test]
    fn test_no_match_returns_none() {
        let t = table(&[("^product/([0-9]+)$", "product/view/$1")]);
        assert!(t.resolve("user/login").is_none());
    }

    #[test]
    fn test_empty_pattern_rule_for_front_page() {
        let t = table(&[("^$", "site/index")]);
        let route = t.resolve("/").unwrap();
        assert_eq!(route.controller, "SiteController");
        assert_eq!(route.action, "actionIndex");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let rules = vec![RouteRule {
            pattern: "([0-9".to_string(),
            target: "product/view/$1".to_string(),
        }];
        assert!(RouteTable::from_rules(&rules).is_err());
    }

    #[test]
    fn test_two_captures_in_order() {
        let t = table(&[(
            "^catalog/category/([0-9]+)/page-([0-9]+)$",
            "catalog/category/$1/$2",
        )]);

        let route = t.resolve("catalog/category/3/page-2").unwrap();
        assert_eq!(route.action, "actionCategory");
        assert_eq!(route.params, vec!["3".to_string(), "2".to_string()]);
    }
}
