//! Crumb derivation from request paths.

use serde::Serialize;

/// One element of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Human-readable text for the crumb.
    pub label: String,
    /// Link target; `None` for the trail's final, unlinked element.
    pub href: Option<String>,
}

/// Build the breadcrumb trail for a request path.
///
/// The root path yields a single unlinked `Home` crumb. Deeper paths get a
/// linked `Home` crumb followed by one crumb per segment with cumulative
/// hrefs. Dashes in segment names are shown as spaces. A segment that
/// carries a file extension has the extension dropped and is left
/// unlinked.
pub fn trail(path: &str) -> Vec<Crumb> {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return vec![Crumb {
            label: "Home".to_string(),
            href: None,
        }];
    }

    let mut crumbs = vec![Crumb {
        label: "Home".to_string(),
        href: Some("/".to_string()),
    }];

    let mut prefix = String::new();
    for segment in trimmed.split('/') {
        if let Some(dot) = segment.rfind('.') {
            crumbs.push(Crumb {
                label: segment[..dot].replace('-', " "),
                href: None,
            });
        } else {
            prefix.push('/');
            prefix.push_str(segment);
            crumbs.push(Crumb {
                label: segment.replace('-', " "),
                href: Some(format!("{}/", prefix)),
            });
        }
    }

    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_a_single_unlinked_home() {
        assert_eq!(
            trail("/"),
            vec![Crumb {
                label: "Home".to_string(),
                href: None
            }]
        );
    }

    #[test]
    fn test_nested_path_accumulates_hrefs() {
        let crumbs = trail("catalog/summer-sale");
        assert_eq!(crumbs.len(), 3);

        assert_eq!(crumbs[0].href.as_deref(), Some("/"));
        assert_eq!(crumbs[1].label, "catalog");
        assert_eq!(crumbs[1].href.as_deref(), Some("/catalog/"));
        assert_eq!(crumbs[2].label, "summer sale");
        assert_eq!(crumbs[2].href.as_deref(), Some("/catalog/summer-sale/"));
    }

    #[test]
    fn test_extension_segment_ends_the_trail_unlinked() {
        let crumbs = trail("/docs/getting-started.html");
        let last = crumbs.last().unwrap();
        assert_eq!(last.label, "getting started");
        assert_eq!(last.href, None);
    }
}
