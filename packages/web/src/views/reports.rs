//! Reports dashboard: headline numbers, genre and author breakdowns, monthly
//! loan activity, and CSV export of each table.

use catalog::report::{self, ReportKind, Tally, TOP_AUTHOR_LIMIT};
use dioxus::prelude::*;
use ui::{download_csv, today, use_books, use_collection, use_notifier};

use super::Loading;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Genres,
    Activity,
    Authors,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Overview, Tab::Genres, Tab::Activity, Tab::Authors];

    fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Genres => "Genres",
            Tab::Activity => "Activity",
            Tab::Authors => "Popular Authors",
        }
    }
}

/// Bar width as a percentage of the largest value.
fn bar_width(value: usize, max: usize) -> String {
    if max == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", value as f64 * 100.0 / max as f64)
}

#[component]
pub fn Reports() -> Element {
    let notifier = use_notifier();
    let books = use_books();
    let borrows = use_collection("borrow records", |api| async move { api.list_borrows().await });
    let mut tab = use_signal(|| Tab::Overview);
    let mut exporting = use_signal(|| false);

    let mut export = move |kind: ReportKind| {
        exporting.set(true);
        let date = today();
        let csv = report::export_csv(kind, books.read().items(), borrows.read().items(), date);
        match csv.map_err(std::io::Error::from).and_then(|csv| download_csv(kind.filename(), &csv)) {
            Ok(()) => {
                notifier.success(format!("Exported {}", kind.filename()));
            }
            Err(e) => {
                tracing::error!("export of {} failed: {e}", kind.filename());
                notifier.error("Export failed. Please try again.");
            }
        }
        exporting.set(false);
    };

    let book_list = books.read();
    if book_list.is_loading() {
        return rsx! {
            Loading { label: "Loading report data..." }
        };
    }
    if let Some(err) = book_list.error() {
        return rsx! {
            div { class: "error-message", role: "alert", "{err}" }
        };
    }

    let date = today();
    let as_of = date.format("%B %-d, %Y").to_string();
    let year = date.format("%Y").to_string();
    let overview = report::overview(book_list.items());
    let genres = report::genre_distribution(book_list.items());
    let authors = report::top_authors(book_list.items(), TOP_AUTHOR_LIMIT);
    drop(book_list);
    let activity = report::monthly_activity(borrows.read().items(), date);
    let activity_error = borrows.read().error().map(str::to_string);

    let top_genres: Vec<Tally> = genres.iter().take(5).cloned().collect();
    let max_genre = genres.first().map(|t| t.count).unwrap_or(0);
    let max_author = authors.first().map(|t| t.count).unwrap_or(0);
    let max_borrowed = activity.iter().map(|m| m.borrowed).max().unwrap_or(0);
    let availability = overview.availability;
    let current = tab();

    rsx! {
        div {
            class: "reports-container",
            div {
                class: "reports-header",
                h1 { "Library Reports Dashboard" }
                p { class: "last-updated", "Data as of {as_of}" }
            }

            div {
                class: "reports-tabs",
                role: "tablist",
                for t in Tab::ALL {
                    button {
                        key: "{t.label()}",
                        r#type: "button",
                        role: "tab",
                        class: if t == current { "tab-button active" } else { "tab-button" },
                        onclick: move |_| tab.set(t),
                        "{t.label()}"
                    }
                }
            }

            div {
                class: "reports-content",
                {match current {
                    Tab::Overview => rsx! {
                        div {
                            class: "summary-cards",
                            SummaryCard { title: "Total Books", value: overview.total_books }
                            SummaryCard { title: "Available Books", value: availability.available }
                            SummaryCard { title: "Borrowed Books", value: availability.borrowed }
                            SummaryCard { title: "Total Genres", value: overview.genres }
                        }
                        div {
                            class: "chart-row",
                            div {
                                class: "chart-container half-width",
                                h3 { "Book Availability" }
                                BarChart {
                                    rows: vec![
                                        ("Available".to_string(), availability.available),
                                        ("Borrowed".to_string(), availability.borrowed),
                                    ],
                                    max: availability.total(),
                                }
                            }
                            div {
                                class: "chart-container half-width",
                                h3 { "Top 5 Genres" }
                                BarChart {
                                    rows: top_genres.into_iter().map(|t| (t.name, t.count)).collect::<Vec<_>>(),
                                    max: max_genre,
                                }
                            }
                        }
                        ExportButton {
                            label: "Export Books Report",
                            busy: exporting(),
                            onclick: move |_| export(ReportKind::Books),
                        }
                    },
                    Tab::Genres => rsx! {
                        h2 { "Book Genre Distribution" }
                        BarChart {
                            rows: genres.iter().map(|t| (t.name.clone(), t.count)).collect::<Vec<_>>(),
                            max: max_genre,
                        }
                        table {
                            class: "data-table",
                            thead { tr { th { "Genre" } th { "Books" } } }
                            tbody {
                                for t in genres.iter() {
                                    tr { key: "{t.name}", td { "{t.name}" } td { "{t.count}" } }
                                }
                            }
                        }
                        ExportButton {
                            label: "Export Genres Report",
                            busy: exporting(),
                            onclick: move |_| export(ReportKind::Genres),
                        }
                    },
                    Tab::Activity => rsx! {
                        h2 { "Monthly Borrowing Activity ({year})" }
                        if let Some(err) = activity_error {
                            div { class: "error-message", role: "alert", "{err}" }
                        }
                        table {
                            class: "data-table activity-table",
                            thead {
                                tr {
                                    th { "Month" }
                                    th { "Borrowed" }
                                    th { "Returned" }
                                    th { "Active" }
                                    th { "" }
                                }
                            }
                            tbody {
                                for m in activity {
                                    tr {
                                        key: "{m.name}",
                                        class: if m.is_current_month { "current-month" } else { "" },
                                        td { "{m.name}" }
                                        td { "{m.borrowed}" }
                                        td { "{m.returned}" }
                                        td { "{m.active}" }
                                        td {
                                            class: "bar-cell",
                                            div {
                                                class: "bar",
                                                style: "width: {bar_width(m.borrowed, max_borrowed)}",
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        ExportButton {
                            label: "Export Activity Report",
                            busy: exporting(),
                            onclick: move |_| export(ReportKind::Activity),
                        }
                    },
                    Tab::Authors => rsx! {
                        h2 { "Top {TOP_AUTHOR_LIMIT} Authors" }
                        if authors.is_empty() {
                            div { class: "no-results", "No authors yet." }
                        } else {
                            BarChart {
                                rows: authors.iter().map(|t| (t.name.clone(), t.count)).collect::<Vec<_>>(),
                                max: max_author,
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn SummaryCard(title: &'static str, value: usize) -> Element {
    rsx! {
        div {
            class: "summary-card",
            h3 { "{title}" }
            div { class: "card-value", "{value}" }
        }
    }
}

/// Horizontal bars drawn with plain CSS widths.
#[component]
fn BarChart(rows: Vec<(String, usize)>, max: usize) -> Element {
    rsx! {
        div {
            class: "bar-chart",
            for (name, value) in rows {
                div {
                    key: "{name}",
                    class: "bar-row",
                    span { class: "bar-label", "{name}" }
                    div {
                        class: "bar-track",
                        div { class: "bar", style: "width: {bar_width(value, max)}" }
                    }
                    span { class: "bar-value", "{value}" }
                }
            }
        }
    }
}

#[component]
fn ExportButton(label: &'static str, busy: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "actions-container",
            button {
                class: "btn btn-primary export-button",
                r#type: "button",
                disabled: busy,
                onclick: move |evt| onclick.call(evt),
                if busy { "Exporting..." } else { "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_is_relative_to_max() {
        assert_eq!(bar_width(5, 10), "50.0%");
        assert_eq!(bar_width(10, 10), "100.0%");
        assert_eq!(bar_width(3, 0), "0%");
    }
}
