//! Pure pagination derivation over the filtered product list.

/// Fixed number of products shown per page
pub const PAGE_SIZE: usize = 6;

/// Entry in the numbered page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index
    Page(usize),
    /// Ellipsis between elided page numbers
    Break,
}

/// Number of pages needed to display `len` items; 0 for an empty list
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamp a page index into `[0, total_pages)`, falling back to 0 when
/// there are no pages. Keeps the current page valid after the filtered
/// list shrinks.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        0
    } else {
        page.min(total_pages - 1)
    }
}

/// The contiguous slice `[page * size, page * size + size)` clamped to the
/// list bounds. An out-of-range page yields an empty slice, never an error.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page numbers to render in the navigation bar: up to `page_range` pages
/// in a window around the current page, `margin` pages pinned at each end,
/// and a break wherever pages are elided.
pub fn page_items(current: usize, total: usize, page_range: usize, margin: usize) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= page_range + margin * 2 {
        return (0..total).map(PageItem::Page).collect();
    }

    // Window of page_range pages centered on the current page, shifted
    // back when it would run past the end.
    let mut window_start = current.saturating_sub(page_range / 2);
    if window_start + page_range > total {
        window_start = total - page_range;
    }
    let window_end = window_start + page_range;

    let mut items = Vec::new();
    let mut last_emitted: Option<usize> = None;
    for idx in 0..total {
        let in_margin = idx < margin || idx >= total - margin;
        let in_window = idx >= window_start && idx < window_end;
        if !in_margin && !in_window {
            continue;
        }
        if let Some(prev) = last_emitted {
            if idx > prev + 1 {
                items.push(PageItem::Break);
            }
        }
        items.push(PageItem::Page(idx));
        last_emitted = Some(idx);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(6, PAGE_SIZE), 1);
        assert_eq!(page_count(7, PAGE_SIZE), 2);
        assert_eq!(page_count(13, PAGE_SIZE), 3);
    }

    #[test]
    fn test_last_page_slice_of_thirteen_items() {
        let items: Vec<usize> = (0..13).collect();
        assert_eq!(page_count(items.len(), PAGE_SIZE), 3);
        assert_eq!(page_slice(&items, 2, PAGE_SIZE), &[12]);
    }

    #[test]
    fn test_out_of_range_page_yields_empty_slice() {
        let items: Vec<usize> = (0..12).collect();
        assert_eq!(page_count(items.len(), PAGE_SIZE), 2);
        assert!(page_slice(&items, 5, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_pages_partition_the_list() {
        let items: Vec<usize> = (0..20).collect();
        let total = page_count(items.len(), PAGE_SIZE);

        let mut reconstructed = Vec::new();
        for page in 0..total {
            reconstructed.extend_from_slice(page_slice(&items, page, PAGE_SIZE));
        }
        // no overlap, no gaps
        assert_eq!(reconstructed, items);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 0), 0);
        assert_eq!(clamp_page(5, 0), 0);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(7, 3), 2);
    }

    #[test]
    fn test_page_items_lists_all_pages_when_few() {
        let items = page_items(0, 3, 5, 2);
        assert_eq!(
            items,
            vec![PageItem::Page(0), PageItem::Page(1), PageItem::Page(2)]
        );
        // boundary: range + both margins exactly fits
        assert_eq!(page_items(4, 9, 5, 2).len(), 9);
    }

    #[test]
    fn test_page_items_elides_tail_from_first_page() {
        let items = page_items(0, 20, 5, 2);
        assert_eq!(
            items,
            vec![
                PageItem::Page(0),
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Break,
                PageItem::Page(18),
                PageItem::Page(19),
            ]
        );
    }

    #[test]
    fn test_page_items_elides_both_sides_in_the_middle() {
        let items = page_items(10, 20, 5, 2);
        assert_eq!(
            items,
            vec![
                PageItem::Page(0),
                PageItem::Page(1),
                PageItem::Break,
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10),
                PageItem::Page(11),
                PageItem::Page(12),
                PageItem::Break,
                PageItem::Page(18),
                PageItem::Page(19),
            ]
        );
    }

    #[test]
    fn test_page_items_window_sticks_to_the_end() {
        let items = page_items(19, 20, 5, 2);
        assert_eq!(
            items,
            vec![
                PageItem::Page(0),
                PageItem::Page(1),
                PageItem::Break,
                PageItem::Page(15),
                PageItem::Page(16),
                PageItem::Page(17),
                PageItem::Page(18),
                PageItem::Page(19),
            ]
        );
    }
}
