//! Page window computation and link generation.

use regex::Regex;
use serde::Serialize;

/// Number of numbered navigation links to display.
const MAX_LINKS: u64 = 10;

/// A single navigation link descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Link text. Page number for numbered links, `<` / `>` for jumps.
    pub label: String,
    /// Page the link targets.
    pub page: u64,
    /// Target URL for the link.
    pub href: String,
    /// True for the page currently being viewed (rendered non-clickable).
    pub current: bool,
    /// True for the first/last jump links framing the window.
    pub nav: bool,
}

/// Bounded pagination window over a list view.
///
/// Holds the total record count, the page size and the clamped current
/// page. `page_count` is zero when there are no records; `current_page`
/// always lands in `1..=max(page_count, 1)` no matter what the caller
/// passed in.
#[derive(Debug, Clone)]
pub struct Pagination {
    total: u64,
    limit: u64,
    page_key: String,
    page_count: u64,
    current_page: u64,
    strip: Regex,
}

impl Pagination {
    /// Build a pagination window.
    ///
    /// `current_page` is taken as requested by the client and clamped:
    /// zero or negative becomes page 1, past-the-end becomes the last
    /// page. A zero `limit` is treated as 1.
    pub fn new(total: u64, current_page: i64, limit: u64, page_key: &str) -> Self {
        let limit = limit.max(1);
        let page_count = total.div_ceil(limit);

        let current_page = if current_page <= 0 {
            1
        } else {
            (current_page as u64).min(page_count.max(1))
        };

        // Matches an existing "/<key><digits>" path segment so stale page
        // markers are dropped before a new one is appended.
        let strip = Regex::new(&format!("/{}[0-9]+", regex::escape(page_key)))
            .expect("escaped page key forms a valid pattern");

        Self {
            total,
            limit,
            page_key: page_key.to_string(),
            page_count,
            current_page,
            strip,
        }
    }

    /// Total number of records across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Total number of pages (0 when the list is empty).
    pub fn page_count(&self) -> u64 {
        self.page_count
    }

    /// The clamped current page, always at least 1.
    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    /// Record offset of the current page, for paged data queries.
    pub fn offset(&self) -> u64 {
        (self.current_page - 1) * self.limit
    }

    /// First and last page of the visible window (inclusive).
    ///
    /// The window aims to keep the current page in the middle. When fewer
    /// than `MAX_LINKS` pages remain ahead, the window is pinned to the
    /// end of the range instead. An empty list yields an empty window
    /// (`start > end`).
    fn window(&self) -> (u64, u64) {
        let left = self.current_page.saturating_sub(MAX_LINKS.div_ceil(2));
        let start = left.max(1);

        if start + MAX_LINKS <= self.page_count {
            let end = if start > 1 { start + MAX_LINKS } else { MAX_LINKS };
            (start, end)
        } else {
            let end = self.page_count;
            let start = self.page_count.saturating_sub(MAX_LINKS).max(1);
            (start, end)
        }
    }

    /// Generate the navigation links for the current window.
    ///
    /// `current_path` is the request path of the list view; any existing
    /// page marker segment in it is stripped before the target marker is
    /// appended. When the window does not start at page 1 a `<` jump to
    /// the first page is prepended, and when it does not end at the last
    /// page a `>` jump to the final page is appended.
    pub fn links(&self, current_path: &str) -> Vec<PageLink> {
        let base = self.href_base(current_path);
        let (start, end) = self.window();

        let mut links: Vec<PageLink> = (start..=end)
            .map(|page| PageLink {
                label: page.to_string(),
                page,
                href: format!("{}{}{}", base, self.page_key, page),
                current: page == self.current_page,
                nav: false,
            })
            .collect();

        if !links.is_empty() {
            if start > 1 {
                links.insert(
                    0,
                    PageLink {
                        label: "<".to_string(),
                        page: 1,
                        href: format!("{}{}1", base, self.page_key),
                        current: false,
                        nav: true,
                    },
                );
            }

            if end < self.page_count {
                links.push(PageLink {
                    label: ">".to_string(),
                    page: self.page_count,
                    href: format!("{}{}{}", base, self.page_key, self.page_count),
                    current: false,
                    nav: true,
                });
            }
        }

        links
    }

    /// Normalised link prefix: leading and trailing slash, stale page
    /// marker removed.
    fn href_base(&self, current_path: &str) -> String {
        let trimmed = current_path.trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        };

        self.strip.replace(&base, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(links: &[PageLink]) -> Vec<u64> {
        links.iter().filter(|l| !l.nav).map(|l| l.page).collect()
    }

    #[test]
    fn test_full_range_without_jumps() {
        let p = Pagination::new(95, 1, 10, "page-");
        assert_eq!(p.page_count(), 10);

        let links = p.links("catalog");
        assert_eq!(pages(&links), (1..=10).collect::<Vec<_>>());
        assert!(links.iter().all(|l| !l.nav));
        assert!(links[0].current);
    }

    #[test]
    fn test_current_page_clamping() {
        for raw in [-5i64, 0, 1, 7, 100] {
            let p = Pagination::new(63, raw, 10, "page-");
            assert!(p.current_page() >= 1);
            assert!(p.current_page() <= p.page_count().max(1));
        }

        assert_eq!(Pagination::new(63, 100, 10, "page-").current_page(), 7);
        assert_eq!(Pagination::new(63, -3, 10, "page-").current_page(), 1);
    }

    #[test]
    fn test_empty_total() {
        let p = Pagination::new(0, 1, 10, "page-");
        assert_eq!(p.page_count(), 0);
        assert_eq!(p.current_page(), 1);
        assert!(p.links("catalog").is_empty());
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let p = Pagination::new(10, 1, 0, "page-");
        assert_eq!(p.page_count(), 10);
    }

    #[test]
    fn test_window_in_the_middle() {
        let p = Pagination::new(300, 15, 10, "page-");
        assert_eq!(p.page_count(), 30);

        let links = p.links("catalog/category/2");
        assert_eq!(pages(&links), (10..=20).collect::<Vec<_>>());

        // Both jump links frame the clipped window.
        assert_eq!(links.first().map(|l| (l.page, l.nav)), Some((1, true)));
        assert_eq!(links.last().map(|l| (l.page, l.nav)), Some((30, true)));
    }

    #[test]
    fn test_window_pinned_to_the_end() {
        let p = Pagination::new(300, 30, 10, "page-");
        let links = p.links("catalog/category/2");
        assert_eq!(pages(&links), (20..=30).collect::<Vec<_>>());

        // Backward jump only.
        assert_eq!(links.first().map(|l| (l.page, l.nav)), Some((1, true)));
        assert!(!links.last().map(|l| l.nav).unwrap_or(true));
    }

    #[test]
    fn test_links_are_deterministic() {
        let a = Pagination::new(123, 4, 10, "page-").links("catalog/category/7");
        let b = Pagination::new(123, 4, 10, "page-").links("catalog/category/7");
        assert_eq!(a, b);
    }

    #[test]
    fn test_href_strips_stale_page_marker() {
        let p = Pagination::new(50, 2, 10, "page-");
        let links = p.links("/catalog/category/1/page-2/");

        let third = links.iter().find(|l| l.page == 3).unwrap();
        assert_eq!(third.href, "/catalog/category/1/page-3");
    }

    #[test]
    fn test_href_from_root_path() {
        let p = Pagination::new(20, 1, 10, "page-");
        let links = p.links("");
        assert_eq!(links[1].href, "/page-2");
    }

    #[test]
    fn test_offset() {
        let p = Pagination::new(63, 3, 10, "page-");
        assert_eq!(p.offset(), 20);
        assert_eq!(Pagination::new(63, 1, 10, "page-").offset(), 0);
    }
}
