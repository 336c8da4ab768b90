//! Circular pagination arithmetic for the education carousel.
//!
//! The carousel shows a fixed list of entries N at a time. Every page is
//! pre-rendered; prev/next controls carry anchor targets computed here, so
//! the wrap-around behavior is decided at render time, not in script:
//! stepping past the last page lands on the first, stepping before the
//! first lands on the last.
//!
//! Slide direction is purely cosmetic — it picks the enter animation class
//! and carries no functional contract.

/// Pagination over a fixed list of entries, N at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    total: usize,
    per_page: usize,
}

/// Which way a page transition slides. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// CSS class applied to the entering page.
    pub fn class(self) -> &'static str {
        match self {
            Direction::Left => "slide-left",
            Direction::Right => "slide-right",
        }
    }
}

impl Carousel {
    /// A carousel over `total` entries showing `per_page` at a time.
    ///
    /// `per_page` of zero is treated as one; an empty list still has one
    /// (empty) page so callers never divide by or index into nothing.
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            total,
            per_page: per_page.max(1),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// `ceil(total / per_page)`, minimum one.
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// Whether paging controls are needed at all.
    pub fn has_pages(&self) -> bool {
        self.page_count() > 1
    }

    /// The page after `page`, wrapping past the end to page zero.
    pub fn next_page(&self, page: usize) -> usize {
        if page + 1 >= self.page_count() {
            0
        } else {
            page + 1
        }
    }

    /// The page before `page`, wrapping before zero to the last page.
    pub fn prev_page(&self, page: usize) -> usize {
        if page == 0 {
            self.page_count() - 1
        } else {
            page - 1
        }
    }

    /// Half-open index range of the entries on `page`. The final page may
    /// be short.
    pub fn page_bounds(&self, page: usize) -> std::ops::Range<usize> {
        let start = (page * self.per_page).min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    /// Iterator over all page indices.
    pub fn pages(&self) -> std::ops::Range<usize> {
        0..self.page_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(Carousel::new(2, 1).page_count(), 2);
        assert_eq!(Carousel::new(2, 2).page_count(), 1);
        assert_eq!(Carousel::new(3, 2).page_count(), 2);
        assert_eq!(Carousel::new(5, 2).page_count(), 3);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let c = Carousel::new(0, 2);
        assert_eq!(c.page_count(), 1);
        assert!(!c.has_pages());
        assert_eq!(c.page_bounds(0), 0..0);
    }

    #[test]
    fn next_twice_from_zero_wraps_home() {
        // totalEntries = 2, entriesPerPage = 1
        let c = Carousel::new(2, 1);
        let after_one = c.next_page(0);
        assert_eq!(after_one, 1);
        assert_eq!(c.next_page(after_one), 0);
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let c = Carousel::new(2, 1);
        assert_eq!(c.prev_page(0), 1);
        let c = Carousel::new(5, 2);
        assert_eq!(c.prev_page(0), 2);
    }

    #[test]
    fn final_page_may_be_short() {
        let c = Carousel::new(5, 2);
        assert_eq!(c.page_bounds(0), 0..2);
        assert_eq!(c.page_bounds(1), 2..4);
        assert_eq!(c.page_bounds(2), 4..5);
    }

    #[test]
    fn zero_per_page_treated_as_one() {
        let c = Carousel::new(3, 0);
        assert_eq!(c.per_page(), 1);
        assert_eq!(c.page_count(), 3);
    }

    #[test]
    fn single_page_wraps_to_itself() {
        let c = Carousel::new(2, 2);
        assert_eq!(c.next_page(0), 0);
        assert_eq!(c.prev_page(0), 0);
    }

    #[test]
    fn direction_classes() {
        assert_eq!(Direction::Left.class(), "slide-left");
        assert_eq!(Direction::Right.class(), "slide-right");
    }
}
