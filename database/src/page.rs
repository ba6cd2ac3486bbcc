/// The window of a collection to return
///
/// Pages are 1-indexed. Any page less than 1 is treated as the first page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Page {
    limit: i64,
    offset: i64,
}

impl Page {
    /// Create a page from the `limit` and `page` arguments of a query
    pub fn new(limit: i32, page: i32) -> Page {
        let limit = i64::from(limit.max(0));
        let offset = if page > 0 {
            (i64::from(page) - 1) * limit
        } else {
            0
        };

        Page { limit, offset }
    }

    /// The maximum number of records in the page
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// The number of records to skip
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// Take the page out of an already ordered sequence
    pub fn slice<T, I>(&self, items: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);

        items.into_iter().skip(skip).take(take).collect()
    }
}

/// A page of records along with the size of the whole collection
#[derive(Clone, Debug, PartialEq)]
pub struct Paginated<T> {
    /// The number of matching records, ignoring pagination
    pub total: i64,
    /// The records in the requested page
    pub result: Vec<T>,
}

impl<T> Paginated<T> {
    /// Convert each of the records in the page
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            total: self.total,
            result: self.result.into_iter().map(f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn first_page_has_no_offset() {
        let page = Page::new(8, 1);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 8);
    }

    #[test]
    fn later_pages_skip_previous_ones() {
        assert_eq!(Page::new(8, 3).offset(), 16);
        assert_eq!(Page::new(3, 2).offset(), 3);
    }

    #[test]
    fn non_positive_pages_are_the_first_page() {
        assert_eq!(Page::new(4, 0), Page::new(4, 1));
        assert_eq!(Page::new(4, -7), Page::new(4, 1));
    }

    #[test]
    fn large_pages_do_not_overflow() {
        let page = Page::new(i32::MAX, i32::MAX);
        assert_eq!(
            page.offset(),
            (i64::from(i32::MAX) - 1) * i64::from(i32::MAX)
        );
        assert!(page.slice(0..10).is_empty());
    }

    #[test]
    fn slice_count_matches_remaining_records() {
        let total = 10;
        for limit in 1..=12 {
            for page in 1..=12 {
                let expected = (total - (page - 1) * limit).clamp(0, limit) as usize;
                let result = Page::new(limit, page).slice(0..total);
                assert_eq!(result.len(), expected, "limit={limit} page={page}");
            }
        }
    }

    #[test]
    fn slice_keeps_order() {
        let result = Page::new(3, 2).slice(vec!['a', 'b', 'c', 'd', 'e']);
        assert_eq!(result, vec!['d', 'e']);
    }
}
