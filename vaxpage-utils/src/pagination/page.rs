//! Pure page-count math and slice helpers.

use std::ops::Range;

/// Compute the number of pages for a list of `item_count` records.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Derive the page count from a list response.
///
/// List endpoints report the total record count and return one page of
/// results. The page size is taken from the number of results on that page,
/// and an empty page counts as a page size of one.
pub fn total_pages_from_response(record_count: usize, results_on_page: usize) -> usize {
    total_pages(record_count, results_on_page.max(1))
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Resolve a typed-in page against the page count the user was shown.
///
/// The hint can go stale when records are deleted after the prompt opened, so
/// the target is bounded by both the live total and the hinted total.
pub fn resolve_jump_target(
    entered_page: usize,
    current_total: usize,
    hinted_total: usize,
) -> usize {
    let max_allowed_page = current_total.min(hinted_total.max(1));
    clamp_page(entered_page, max_allowed_page)
}

/// Return the item index range covered by `page`.
pub fn page_slice(total_items: usize, per_page: usize, page: usize) -> Range<usize> {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    start.min(total_items)..end
}

/// Parse a one-based page argument.
///
/// A missing argument means the first page. Returns `None` for `0` or
/// anything that is not a number.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }

    #[test]
    fn total_pages_treats_zero_page_size_as_one() {
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn response_page_size_comes_from_results() {
        assert_eq!(total_pages_from_response(42, 10), 5);
        assert_eq!(total_pages_from_response(0, 0), 0);
        assert_eq!(total_pages_from_response(3, 0), 3);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(9, 5), 5);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn jump_target_respects_stale_hint() {
        assert_eq!(resolve_jump_target(8, 10, 6), 6);
        assert_eq!(resolve_jump_target(8, 4, 6), 4);
        assert_eq!(resolve_jump_target(0, 4, 6), 1);
        assert_eq!(resolve_jump_target(3, 4, 0), 1);
    }

    #[test]
    fn page_slice_windows() {
        assert_eq!(page_slice(24, 5, 1), 0..5);
        assert_eq!(page_slice(24, 5, 5), 20..24);
        assert_eq!(page_slice(24, 5, 6), 24..24);
        assert_eq!(page_slice(24, 5, 0), 0..5);
    }

    #[test]
    fn parse_page_argument() {
        assert_eq!(parse_one_based_page(None), Some(1));
        assert_eq!(parse_one_based_page(Some("3")), Some(3));
        assert_eq!(parse_one_based_page(Some(" 12 ")), Some(12));
        assert_eq!(parse_one_based_page(Some("0")), None);
        assert_eq!(parse_one_based_page(Some("-1")), None);
        assert_eq!(parse_one_based_page(Some("two")), None);
    }
}
