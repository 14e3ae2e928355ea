/// One page of domain records plus pagination metadata.
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Self {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }

    /// Maps every item, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Clamps raw query parameters into a usable page window.
///
/// The upstream system trusted `page`/`per_page` as-is; here out-of-range
/// values are normalized instead of producing empty or unbounded reads:
/// page < 1 reads as 1, per_page is clamped to 1..=100.
pub fn clamp_page(page: u64, per_page: u64) -> (u64, u64) {
    (page.max(1), per_page.clamp(1, 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_zero_page_and_per_page() {
        assert_eq!(clamp_page(0, 0), (1, 1));
    }

    #[test]
    fn clamps_oversized_per_page() {
        assert_eq!(clamp_page(3, 1000), (3, 100));
    }

    #[test]
    fn leaves_valid_values_alone() {
        assert_eq!(clamp_page(2, 25), (2, 25));
    }

    #[test]
    fn computes_total_pages_with_remainder() {
        let page = Paginated::new(vec![1, 2, 3], 7, 1, 3);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let page: Paginated<i32> = Paginated::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }
}
