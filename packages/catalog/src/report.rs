//! # Library reports
//!
//! Aggregates computed from the fetched book list and borrow records, plus
//! CSV export of each table. Everything here is a pure function of its
//! inputs; the reports screen recomputes on every fetch.
//!
//! | Function | Output |
//! |----------|--------|
//! | [`genre_distribution`] | books per genre, most common first |
//! | [`availability`] | available vs borrowed counts |
//! | [`top_authors`] | authors with the most titles |
//! | [`monthly_activity`] | loans opened / closed per month of a year |
//! | [`export_csv`] | one of the above as CSV text |

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Book, BorrowRecord};

pub const UNCATEGORIZED: &str = "Uncategorized";
pub const TOP_AUTHOR_LIMIT: usize = 5;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally {
    pub name: String,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Availability {
    pub available: usize,
    pub borrowed: usize,
}

impl Availability {
    pub fn total(&self) -> usize {
        self.available + self.borrowed
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlyActivity {
    pub name: &'static str,
    pub borrowed: usize,
    pub returned: usize,
    pub active: usize,
    pub is_current_month: bool,
}

/// Headline numbers for the overview tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overview {
    pub total_books: usize,
    pub genres: usize,
    pub authors: usize,
    pub availability: Availability,
}

pub fn overview(books: &[Book]) -> Overview {
    Overview {
        total_books: books.len(),
        genres: genre_distribution(books).len(),
        authors: author_counts(books).len(),
        availability: availability(books),
    }
}

/// Books per genre, highest count first, ties alphabetical. Blank or missing
/// genres are grouped under [`UNCATEGORIZED`].
pub fn genre_distribution(books: &[Book]) -> Vec<Tally> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in books {
        *counts.entry(book.genre_name().unwrap_or(UNCATEGORIZED)).or_default() += 1;
    }
    ranked(counts)
}

pub fn availability(books: &[Book]) -> Availability {
    let borrowed = books.iter().filter(|b| b.is_borrowed).count();
    Availability {
        available: books.len() - borrowed,
        borrowed,
    }
}

/// The `limit` authors with the most titles.
pub fn top_authors(books: &[Book], limit: usize) -> Vec<Tally> {
    let mut tallies = ranked(author_counts(books));
    tallies.truncate(limit);
    tallies
}

fn author_counts(books: &[Book]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for book in books {
        *counts.entry(book.author.as_str()).or_default() += 1;
    }
    counts
}

fn ranked(counts: HashMap<&str, usize>) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = counts
        .into_iter()
        .map(|(name, count)| Tally {
            name: name.to_string(),
            count,
        })
        .collect();
    tallies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    tallies
}

/// Per-month loan activity for the year of `today`.
///
/// A record counts as borrowed in the month of its `borrowDate` and as
/// returned in the month of its `returnDate`; `active` is the difference,
/// floored at zero.
pub fn monthly_activity(borrows: &[BorrowRecord], today: NaiveDate) -> Vec<MonthlyActivity> {
    let year = today.year();
    let mut borrowed = [0usize; 12];
    let mut returned = [0usize; 12];

    for record in borrows {
        if let Some(date) = record.borrow_date.filter(|d| d.year() == year) {
            borrowed[date.month0() as usize] += 1;
        }
        if let Some(date) = record.return_date.filter(|d| d.year() == year) {
            returned[date.month0() as usize] += 1;
        }
    }

    MONTHS
        .iter()
        .enumerate()
        .map(|(i, &name)| MonthlyActivity {
            name,
            borrowed: borrowed[i],
            returned: returned[i],
            active: borrowed[i].saturating_sub(returned[i]),
            is_current_month: i as u32 == today.month0(),
        })
        .collect()
}

/// Which table to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportKind {
    Books,
    Genres,
    Activity,
}

impl ReportKind {
    pub fn filename(self) -> &'static str {
        match self {
            ReportKind::Books => "library_books_report.csv",
            ReportKind::Genres => "library_genres_report.csv",
            ReportKind::Activity => "library_activity_report.csv",
        }
    }
}

/// Render one report as CSV, header row included even when empty.
pub fn export_csv(
    kind: ReportKind,
    books: &[Book],
    borrows: &[BorrowRecord],
    today: NaiveDate,
) -> Result<String, csv::Error> {
    match kind {
        ReportKind::Books => write_csv(
            &["id", "title", "author", "genre", "isBorrowed"],
            books.iter().map(|b| {
                vec![
                    b.id.to_string(),
                    b.title.clone(),
                    b.author.clone(),
                    b.genre.clone().unwrap_or_default(),
                    b.is_borrowed.to_string(),
                ]
            }),
        ),
        ReportKind::Genres => write_csv(
            &["name", "value"],
            genre_distribution(books)
                .into_iter()
                .map(|t| vec![t.name, t.count.to_string()]),
        ),
        ReportKind::Activity => write_csv(
            &["name", "borrowed", "returned", "active"],
            monthly_activity(borrows, today).into_iter().map(|m| {
                vec![
                    m.name.to_string(),
                    m.borrowed.to_string(),
                    m.returned.to_string(),
                    m.active.to_string(),
                ]
            }),
        ),
    }
}

fn write_csv(
    headers: &[&str],
    rows: impl IntoIterator<Item = Vec<String>>,
) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, author: &str, genre: Option<&str>, is_borrowed: bool) -> Book {
        Book {
            id,
            title: format!("Title {id}"),
            author: author.to_string(),
            genre: genre.map(str::to_string),
            available: Some(1),
            description: None,
            image_url: None,
            pdf_url: None,
            is_borrowed,
        }
    }

    fn loan(borrowed: &str, returned: Option<&str>) -> BorrowRecord {
        BorrowRecord {
            id: None,
            user_id: Some(1),
            book_id: Some(1),
            user: None,
            book: None,
            borrow_date: NaiveDate::parse_from_str(borrowed, "%Y-%m-%d").ok(),
            return_date: returned.and_then(|r| NaiveDate::parse_from_str(r, "%Y-%m-%d").ok()),
        }
    }

    fn library() -> Vec<Book> {
        vec![
            book(1, "Le Guin", Some("Fantasy"), false),
            book(2, "Le Guin", Some("Sci-Fi"), true),
            book(3, "Herbert", Some("Sci-Fi"), false),
            book(4, "Austen", None, true),
            book(5, "Austen", Some("  "), false),
            book(6, "Le Guin", Some("Fantasy"), false),
        ]
    }

    #[test]
    fn test_genre_distribution_groups_blank_as_uncategorized() {
        let genres = genre_distribution(&library());
        assert_eq!(
            genres,
            vec![
                Tally { name: "Fantasy".into(), count: 2 },
                Tally { name: "Sci-Fi".into(), count: 2 },
                Tally { name: UNCATEGORIZED.into(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_availability_counts_borrowed_flag() {
        let counts = availability(&library());
        assert_eq!(counts, Availability { available: 4, borrowed: 2 });
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_top_authors_ranked_and_truncated() {
        let authors = top_authors(&library(), 2);
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0], Tally { name: "Le Guin".into(), count: 3 });
        assert_eq!(authors[1], Tally { name: "Austen".into(), count: 2 });
    }

    #[test]
    fn test_overview() {
        let summary = overview(&library());
        assert_eq!(summary.total_books, 6);
        assert_eq!(summary.genres, 3);
        assert_eq!(summary.authors, 3);
        assert_eq!(summary.availability.borrowed, 2);
    }

    #[test]
    fn test_monthly_activity_for_current_year() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let loans = vec![
            loan("2024-01-05", Some("2024-02-01")),
            loan("2024-01-20", None),
            loan("2024-03-02", Some("2024-03-09")),
            loan("2023-12-30", Some("2024-01-03")),
        ];
        let months = monthly_activity(&loans, today);

        assert_eq!(months.len(), 12);
        assert_eq!(months[0].name, "Jan");
        assert_eq!((months[0].borrowed, months[0].returned, months[0].active), (2, 1, 1));
        assert_eq!((months[1].borrowed, months[1].returned, months[1].active), (0, 1, 0));
        assert_eq!((months[2].borrowed, months[2].returned), (1, 1));
        assert!(months[2].is_current_month);
        assert_eq!(months.iter().filter(|m| m.is_current_month).count(), 1);
    }

    #[test]
    fn test_export_books_csv_quotes_commas() {
        let mut books = library();
        books.truncate(1);
        books[0].title = "Tales from Earthsea, Vol. 1".into();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let csv = export_csv(ReportKind::Books, &books, &[], today).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,title,author,genre,isBorrowed"));
        assert_eq!(
            lines.next(),
            Some("1,\"Tales from Earthsea, Vol. 1\",Le Guin,Fantasy,false")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_export_empty_still_has_header() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let csv = export_csv(ReportKind::Genres, &[], &[], today).unwrap();
        assert_eq!(csv.trim_end(), "name,value");

        let activity = export_csv(ReportKind::Activity, &[], &[], today).unwrap();
        assert_eq!(activity.lines().count(), 13);
        assert_eq!(activity.lines().nth(1), Some("Jan,0,0,0"));
    }

    #[test]
    fn test_report_filenames() {
        assert_eq!(ReportKind::Books.filename(), "library_books_report.csv");
        assert_eq!(ReportKind::Genres.filename(), "library_genres_report.csv");
        assert_eq!(ReportKind::Activity.filename(), "library_activity_report.csv");
    }
}
