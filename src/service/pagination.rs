//! Page windows over fully-loaded result sets.

/// Questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Zero-based page index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Page(pub u32);

impl Page {
    /// Half-open index range `[start, end)` of this page.
    pub fn bounds(self, per_page: usize) -> (usize, usize) {
        let start = (self.0 as usize).saturating_mul(per_page);
        (start, start.saturating_add(per_page))
    }

    /// The items on this page, or `None` when the page starts past the end.
    pub fn slice<T>(self, items: &[T], per_page: usize) -> Option<&[T]> {
        let (start, end) = self.bounds(per_page);
        if start >= items.len() {
            return None;
        }
        Some(&items[start..end.min(items.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_ten_wide() {
        assert_eq!(Page(0).bounds(QUESTIONS_PER_PAGE), (0, 10));
        assert_eq!(Page(3).bounds(QUESTIONS_PER_PAGE), (30, 40));
    }

    #[test]
    fn last_page_is_truncated() {
        let items: Vec<u32> = (0..19).collect();
        assert_eq!(Page(0).slice(&items, 10).unwrap().len(), 10);
        assert_eq!(Page(1).slice(&items, 10).unwrap(), &items[10..19]);
    }

    #[test]
    fn page_past_end_is_none() {
        let items: Vec<u32> = (0..19).collect();
        assert!(Page(2).slice(&items, 10).is_none());
        assert!(Page(1000).slice(&items, 10).is_none());
        assert!(Page(0).slice::<u32>(&[], 10).is_none());
        assert!(Page(u32::MAX).slice(&items, 10).is_none());
    }
}
