//! # List pipeline: filter, sort, paginate
//!
//! Every list screen (catalog gallery, librarian book table, user table) runs
//! the same pipeline over its in-memory collection:
//!
//! ```text
//! items → filter(search) → stable sort(key, direction) → page slice
//! ```
//!
//! [`ListState`] holds the three pieces of UI state plus the current page and
//! produces a [`ListView`] borrowing from the collection. Item types opt in by
//! implementing [`Listable`], which names the fields a search looks at and how
//! two items compare under each [`SortKey`].
//!
//! ## Rules
//!
//! - Search is a case-insensitive substring match, OR-ed across
//!   [`Listable::search_fields`]. An empty query keeps everything.
//! - Sorting is stable in both directions: descending reverses the comparator,
//!   not the output, so equal items keep their original relative order.
//! - Pages are 1-based. `total_pages` is `ceil(matched / page_size)` and is 0
//!   when nothing matches. Out-of-range pages clamp to the last page.
//! - Changing the search text, sort key or direction resets to page 1.

use std::cmp::Ordering;

/// Sort direction toggled by the ↑/↓ control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A field a list can be sorted by. `as_str` is the value used in the
/// `<select>` element, `label` the text shown to the user.
pub trait SortKey: Copy + PartialEq + Default + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn label(self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == value)
    }
}

/// An item that can flow through the list pipeline.
pub trait Listable {
    type Sort: SortKey;

    /// Fields matched by the search box. Missing fields are left out.
    fn search_fields(&self) -> Vec<&str>;

    fn compare_by(&self, other: &Self, key: Self::Sort) -> Ordering;

    fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Case-insensitive ordering with the raw text as tie-breaker, so `"apple"`
/// and `"Apple"` still order deterministically.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Page boundaries for a filtered sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective 1-based page after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// Index range into the filtered+sorted sequence.
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn compute(len: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = len.div_ceil(page_size);
        let page = page.clamp(1, total_pages.max(1));
        let start = ((page - 1) * page_size).min(len);
        let end = (start + page_size).min(len);
        Self {
            page,
            total_pages,
            start,
            end,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// The rows to render for one page, plus enough context for the summary line
/// ("Showing 11–12 of 12 books") and the pager.
#[derive(Debug)]
pub struct ListView<'a, T> {
    pub rows: Vec<&'a T>,
    /// Number of items that passed the filter, across all pages.
    pub matched: usize,
    pub window: PageWindow,
}

impl<T: Clone> ListView<'_, T> {
    pub fn cloned_rows(&self) -> Vec<T> {
        self.rows.iter().map(|row| (*row).clone()).collect()
    }
}

/// Search, sort and page state for one list screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<K> {
    search: String,
    sort: K,
    direction: SortDirection,
    page: usize,
    page_size: usize,
}

impl<K: SortKey> ListState<K> {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort: K::default(),
            direction: SortDirection::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> K {
        self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Apply a (debounced) search query.
    pub fn set_search(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.search {
            self.search = query;
            self.page = 1;
        }
    }

    pub fn set_sort(&mut self, key: K) {
        if key != self.sort {
            self.sort = key;
            self.page = 1;
        }
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.toggled();
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Back to defaults: no search, default key, ascending, page 1.
    pub fn reset(&mut self) {
        *self = Self::new(self.page_size);
    }

    /// Whether a Reset control would change anything visible.
    pub fn is_customized(&self) -> bool {
        !self.search.is_empty() || self.sort != K::default() || self.direction != SortDirection::default()
    }

    /// Filter and stable-sort `items` without paginating.
    pub fn process<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: Listable<Sort = K>,
    {
        let mut rows: Vec<&T> = items.iter().filter(|item| item.matches(&self.search)).collect();
        rows.sort_by(|a, b| self.direction.apply(a.compare_by(b, self.sort)));
        rows
    }

    /// Run the full pipeline and slice out the current page.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> ListView<'a, T>
    where
        T: Listable<Sort = K>,
    {
        let rows = self.process(items);
        let matched = rows.len();
        let window = PageWindow::compute(matched, self.page, self.page_size);
        let rows = rows[window.start..window.end].to_vec();
        ListView {
            rows,
            matched,
            window,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, BookSort, User, UserSort};

    fn book(id: i64, title: &str, author: &str, genre: Option<&str>) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.map(str::to_string),
            available: Some(1),
            description: None,
            image_url: None,
            pdf_url: None,
            is_borrowed: false,
        }
    }

    fn user(id: i64, name: Option<&str>, email: Option<&str>) -> User {
        User {
            id,
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            role: None,
        }
    }

    fn shelf() -> Vec<Book> {
        vec![
            book(1, "Dune", "Frank Herbert", Some("Sci-Fi")),
            book(2, "Emma", "Jane Austen", Some("Classic")),
            book(3, "Neuromancer", "William Gibson", Some("Sci-Fi")),
            book(4, "Persuasion", "Jane Austen", None),
            book(5, "dune messiah", "Frank Herbert", Some("Sci-Fi")),
        ]
    }

    fn ids(rows: &[&Book]) -> Vec<i64> {
        rows.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_search_matches_any_field_case_insensitively() {
        let books = shelf();
        let mut state = ListState::<BookSort>::new(10);

        state.set_search("AUSTEN");
        assert_eq!(ids(&state.process(&books)), vec![2, 4]);

        state.set_search("dune");
        let rows = state.process(&books);
        assert_eq!(ids(&rows), vec![1, 5]);
        for row in rows {
            assert!(row
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains("dune")));
        }
    }

    #[test]
    fn test_every_filtered_item_matches_for_many_queries() {
        let books = shelf();
        let mut state = ListState::<BookSort>::new(10);
        for query in ["", "e", "an", "GIB", "zzz", " ", "herbert", "a"] {
            state.set_search(query);
            let rows = state.process(&books);
            for row in &rows {
                assert!(row.matches(query), "{} should match {query:?}", row.title);
            }
            let expected = books.iter().filter(|b| b.matches(query)).count();
            assert_eq!(rows.len(), expected);
        }
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let books = shelf();
        let state = ListState::<BookSort>::new(10);
        assert_eq!(state.process(&books).len(), books.len());
    }

    #[test]
    fn test_user_without_name_or_email_only_matches_empty_query() {
        let users = vec![user(1, None, None), user(2, Some("Ada"), None)];
        let mut state = ListState::<UserSort>::new(10);
        assert_eq!(state.process(&users).len(), 2);
        state.set_search("a");
        let rows = state.process(&users);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 2);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let books = shelf();
        let mut state = ListState::<BookSort>::new(10);

        assert_eq!(ids(&state.process(&books)), vec![1, 5, 2, 3, 4]);

        state.toggle_direction();
        assert_eq!(ids(&state.process(&books)), vec![4, 3, 2, 5, 1]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let books = shelf();
        let mut state = ListState::<BookSort>::new(10);
        state.set_sort(BookSort::Author);

        // Herbert (1, 5) and Austen (2, 4) ties keep their input order.
        assert_eq!(ids(&state.process(&books)), vec![1, 5, 2, 4, 3]);

        state.toggle_direction();
        assert_eq!(ids(&state.process(&books)), vec![3, 2, 4, 1, 5]);
    }

    #[test]
    fn test_sort_by_genre_treats_missing_as_empty() {
        let books = shelf();
        let mut state = ListState::<BookSort>::new(10);
        state.set_sort(BookSort::Genre);
        assert_eq!(ids(&state.process(&books)), vec![4, 2, 1, 3, 5]);
    }

    #[test]
    fn test_sort_is_monotonic() {
        let books = shelf();
        let mut state = ListState::<BookSort>::new(10);
        for key in BookSort::ALL {
            state.set_sort(*key);
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                if state.direction() != direction {
                    state.toggle_direction();
                }
                let rows = state.process(&books);
                for pair in rows.windows(2) {
                    let ord = direction.apply(pair[0].compare_by(pair[1], *key));
                    assert_ne!(ord, Ordering::Greater);
                }
            }
        }
    }

    #[test]
    fn test_users_sort_by_id_numerically() {
        let users = vec![
            user(10, Some("b"), None),
            user(2, Some("a"), None),
            user(33, Some("c"), None),
        ];
        let mut state = ListState::<UserSort>::new(10);
        state.set_sort(UserSort::Id);
        let rows: Vec<i64> = state.process(&users).iter().map(|u| u.id).collect();
        assert_eq!(rows, vec![2, 10, 33]);
    }

    #[test]
    fn test_twelve_books_split_into_two_pages() {
        let books: Vec<Book> = (1..=12)
            .map(|i| book(i, &format!("Title {i:02}"), "Author", None))
            .collect();
        let mut state = ListState::<BookSort>::new(10);

        let first = state.apply(&books);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.matched, 12);
        assert_eq!(first.window.total_pages, 2);
        assert!(first.window.has_next());
        assert!(!first.window.has_prev());

        state.go_to(2);
        let second = state.apply(&books);
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.window.page, 2);
        assert!(!second.window.has_next());
    }

    #[test]
    fn test_pages_cover_filtered_set_exactly_once() {
        let books: Vec<Book> = (1..=23)
            .map(|i| book(i, &format!("Book {i}"), if i % 3 == 0 { "Tolkien" } else { "Le Guin" }, None))
            .collect();
        let mut state = ListState::<BookSort>::new(4);
        state.set_search("le guin");

        let filtered = state.process(&books);
        let total_pages = state.apply(&books).window.total_pages;
        assert_eq!(total_pages, filtered.len().div_ceil(4));

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            state.go_to(page);
            let view = state.apply(&books);
            let remaining = filtered.len() - (page - 1) * 4;
            assert_eq!(view.rows.len(), remaining.min(4));
            seen.extend(view.rows.iter().map(|b| b.id));
        }
        assert_eq!(seen, ids(&filtered));
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let books = shelf();
        let mut state = ListState::<BookSort>::new(2);
        state.go_to(9);
        let view = state.apply(&books);
        assert_eq!(view.window.page, 3);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn test_no_matches_yields_zero_pages() {
        let books = shelf();
        let mut state = ListState::<BookSort>::new(10);
        state.set_search("nothing like this");
        let view = state.apply(&books);
        assert!(view.rows.is_empty());
        assert_eq!(view.matched, 0);
        assert_eq!(view.window.total_pages, 0);
        assert_eq!(view.window.page, 1);
    }

    #[test]
    fn test_search_and_sort_changes_reset_page() {
        let mut state = ListState::<BookSort>::new(10);

        state.go_to(3);
        state.set_search("x");
        assert_eq!(state.page(), 1);

        state.go_to(3);
        state.set_search("x");
        assert_eq!(state.page(), 3, "same query is not a change");

        state.set_sort(BookSort::Genre);
        assert_eq!(state.page(), 1);

        state.go_to(2);
        state.toggle_direction();
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = ListState::<UserSort>::new(10);
        assert!(!state.is_customized());

        state.set_search("ada");
        state.set_sort(UserSort::Email);
        state.toggle_direction();
        state.go_to(4);
        assert!(state.is_customized());

        state.reset();
        assert_eq!(state, ListState::<UserSort>::new(10));
        assert_eq!(state.sort(), UserSort::Name);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let state = ListState::<BookSort>::new(0);
        assert_eq!(state.page_size(), 1);
        assert_eq!(PageWindow::compute(3, 1, 0).total_pages, 3);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(BookSort::parse("author"), Some(BookSort::Author));
        assert_eq!(UserSort::parse("email"), Some(UserSort::Email));
        assert_eq!(BookSort::parse("isbn"), None);
    }
}
