/// Page slicing over ordered result sets
///
/// Feeds order their posts newest-first at the query level; this module only
/// turns a total count plus a requested page number into a stable window
/// (LIMIT/OFFSET) and the metadata listing responses expose.
use serde::Serialize;

/// Resolved window into an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number after defaulting and clamping
    pub number: u32,
    pub total_pages: u32,
    pub total_items: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of items plus the metadata of its window.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub total_pages: u32,
    pub total_items: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: PageWindow) -> Self {
        Self {
            items,
            number: window.number,
            total_pages: window.total_pages,
            total_items: window.total_items,
            has_next: window.has_next,
            has_previous: window.has_previous,
        }
    }
}

/// Leniently parse a raw `?page=` value. Garbage and zero are treated the
/// same as an absent parameter, never as a client error.
pub fn parse_page(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|page| *page >= 1)
}

/// Resolve a 1-based page request against a counted result set.
///
/// An absent or invalid request defaults to page 1; out-of-range numbers
/// clamp to the nearest valid page. An empty result set is a single empty
/// page, so callers always get a well-formed window.
pub fn page_window(total_items: i64, page_size: u32, requested: Option<u32>) -> PageWindow {
    let page_size = page_size.max(1);
    let total_items = total_items.max(0);

    let total_pages = if total_items == 0 {
        1
    } else {
        ((total_items + i64::from(page_size) - 1) / i64::from(page_size)) as u32
    };

    let number = requested.unwrap_or(1).clamp(1, total_pages);

    PageWindow {
        number,
        total_pages,
        total_items,
        limit: i64::from(page_size),
        offset: i64::from(number - 1) * i64::from(page_size),
        has_next: number < total_pages,
        has_previous: number > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_second_page_split() {
        // 15 items at 10 per page: page 1 holds 10, page 2 holds 5.
        let first = page_window(15, 10, Some(1));
        assert_eq!(first.limit, 10);
        assert_eq!(first.offset, 0);
        assert_eq!(first.total_pages, 2);
        assert!(first.has_next);
        assert!(!first.has_previous);

        let second = page_window(15, 10, Some(2));
        assert_eq!(second.offset, 10);
        assert_eq!(second.total_items - second.offset, 5);
        assert!(!second.has_next);
        assert!(second.has_previous);
    }

    #[test]
    fn test_absent_page_defaults_to_first() {
        let window = page_window(30, 10, None);
        assert_eq!(window.number, 1);
        assert_eq!(window.offset, 0);
    }

    #[test]
    fn test_out_of_range_clamps_to_last_page() {
        let window = page_window(15, 10, Some(99));
        assert_eq!(window.number, 2);
        assert_eq!(window.offset, 10);
        assert!(!window.has_next);
    }

    #[test]
    fn test_empty_set_is_single_empty_page() {
        let window = page_window(0, 10, Some(5));
        assert_eq!(window.number, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.offset, 0);
        assert!(!window.has_next);
        assert!(!window.has_previous);
    }

    #[test]
    fn test_exact_multiple_of_page_size() {
        let window = page_window(20, 10, Some(2));
        assert_eq!(window.total_pages, 2);
        assert!(!window.has_next);
    }

    #[test]
    fn test_parse_page_is_lenient() {
        assert_eq!(parse_page(Some("2")), Some(2));
        assert_eq!(parse_page(Some(" 3 ")), Some(3));
        assert_eq!(parse_page(Some("abc")), None);
        assert_eq!(parse_page(Some("0")), None);
        assert_eq!(parse_page(Some("-1")), None);
        assert_eq!(parse_page(None), None);
    }

    #[test]
    fn test_page_wrapper_carries_window_metadata() {
        let window = page_window(15, 10, Some(2));
        let page = Page::new(vec!["a", "b"], window);
        assert_eq!(page.number, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 15);
        assert!(page.has_previous);
    }
}
