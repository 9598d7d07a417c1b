use annota_bridge::article::Article;

/// The article listing page's state: the current page of rows, the cursor,
/// and the last-known page count.
///
/// The cursor and rows only change when a page response arrives; requesting
/// a page merely raises `loading`, so there is never an optimistic update.
#[derive(Debug, Clone)]
pub struct ArticlesEntity {
    /// 1-based cursor of the page currently displayed.
    pub page: u64,
    /// Last-known number of pages, used to clamp navigation requests.
    pub total_pages: u64,
    pub articles: Vec<Article>,
    /// A page fetch is in flight; pagination controls stay disabled.
    pub loading: bool,
}

impl Default for ArticlesEntity {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            articles: Vec::new(),
            loading: false,
        }
    }
}

/// Clamps a requested page number into `[1, total_pages]`.
///
/// The request side uses `i64` so "previous" from page 1 can underflow to 0
/// (or below) and still clamp back to 1.
pub fn clamp_page(requested: i64, total_pages: u64) -> u64 {
    let upper = total_pages.max(1);
    if requested < 1 {
        1
    } else {
        (requested as u64).min(upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: page requests clamp below 1 up to 1 and above the page count
    /// down to the page count.
    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(-5, 3), 1);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(3, 3), 3);
        assert_eq!(clamp_page(4, 3), 3);
        assert_eq!(clamp_page(100, 3), 3);
    }

    /// Test: a zero page count still pins the cursor to page 1.
    #[test]
    fn test_clamp_page_degenerate_total() {
        assert_eq!(clamp_page(1, 0), 1);
        assert_eq!(clamp_page(7, 0), 1);
    }
}
