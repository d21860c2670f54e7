use owo_colors::{OwoColorize, Stream};
use tracker_core::format::{
    color_for, direction_for, format_currency, format_signed_currency, Color,
};
use tracker_core::{Holding, ListingView, Notice, PortfolioStats, StockInfo};

/// A table cell: plain text plus the tone it should be painted in.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub color: Color,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::Default,
        }
    }

    fn money(value: f64) -> Self {
        Self::plain(format!("${}", format_currency(value)))
    }

    fn gain_or_loss(value: f64) -> Self {
        Self {
            text: format!(
                "{} {}",
                format_signed_currency(value),
                direction_for(value).marker()
            ),
            color: color_for(value),
        }
    }
}

/// How a listing's rows are laid out and what it says when there is nothing to show.
pub trait TableRow {
    const TITLE: &'static str;
    const HEADERS: &'static [&'static str];
    const EMPTY_NOTICE: &'static str;
    const FAILED_NOTICE: &'static str;

    fn cells(&self) -> Vec<Cell>;
}

impl TableRow for StockInfo {
    const TITLE: &'static str = "Stock search";
    const HEADERS: &'static [&'static str] =
        &["#", "Symbol", "Name", "Exchange", "Country", "Currency", "MIC"];
    const EMPTY_NOTICE: &'static str = "No stocks match the given pattern.";
    const FAILED_NOTICE: &'static str = "Couldn't fetch stock data.";

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(self.symbol.as_str()),
            Cell::plain(self.name.as_str()),
            Cell::plain(self.exchange.as_str()),
            Cell::plain(self.country.as_str()),
            Cell::plain(self.currency.as_str()),
            Cell::plain(self.mic_code.as_str()),
        ]
    }
}

impl TableRow for Holding {
    const TITLE: &'static str = "Portfolio holdings";
    const HEADERS: &'static [&'static str] = &[
        "#",
        "Symbol",
        "Name",
        "Current Price",
        "Quantity",
        "Total Purchase Price",
        "Total Cash Value",
        "Total Gain/Loss",
        "Type",
        "Duration",
    ];
    const EMPTY_NOTICE: &'static str = "You don't have any holdings.";
    const FAILED_NOTICE: &'static str = "Couldn't fetch your portfolio holdings.";

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::plain(self.symbol.as_str()),
            Cell::plain(self.name.as_str()),
            Cell::money(self.current_price),
            Cell::plain(self.quantity.to_string()),
            Cell::money(self.purchase_price),
            Cell::money(self.cash_value()),
            Cell::gain_or_loss(self.total_gain_or_loss),
            Cell::plain(self.kind.to_string()),
            Cell::plain(self.duration.as_str()),
        ]
    }
}

/// Header block for the holdings view.
pub fn render_stats(stats: &PortfolioStats) -> Vec<String> {
    let gain = Cell::gain_or_loss(stats.total_gain_or_loss);
    vec![
        format!("TOTAL VALUE      ${}", format_currency(stats.total_value)),
        format!("TOTAL GAIN/LOSS  {}", paint(&gain.text, gain.color)),
    ]
}

pub fn render_listing<T: TableRow>(view: &ListingView<T>) -> Vec<String> {
    let mut lines = vec![title_line::<T>(view)];

    let rows = view
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![Cell::plain(row.number.to_string())];
            cells.extend(row.item.cells());
            cells
        })
        .collect::<Vec<_>>();

    if !rows.is_empty() {
        let mut widths = T::HEADERS.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for cells in &rows {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        let header = T::HEADERS
            .iter()
            .zip(&widths)
            .map(|(h, &w)| format!("{h:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(header.trim_end().to_string());
        for cells in &rows {
            let line = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| paint(&format!("{:<w$}", cell.text), cell.color))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line.trim_end().to_string());
        }
    }

    if view.pagination_visible {
        lines.push(format!("page {} of {}", view.page + 1, view.total_pages));
    }

    match view.notice {
        Some(Notice::FetchFailed) => lines.push(T::FAILED_NOTICE.to_string()),
        Some(Notice::NoResults) => lines.push(T::EMPTY_NOTICE.to_string()),
        None => {}
    }

    lines
}

fn title_line<T: TableRow>(view: &ListingView<T>) -> String {
    let mut title = T::TITLE.to_string();
    if !view.term.is_empty() {
        title.push_str(&format!(" for {:?}", view.term));
    }
    if view.is_fetching {
        title.push_str("  (loading...)");
    }
    title
}

fn paint(text: &str, color: Color) -> String {
    match color {
        Color::Green => text
            .if_supports_color(Stream::Stdout, |t| t.green())
            .to_string(),
        Color::Red => text
            .if_supports_color(Stream::Stdout, |t| t.red())
            .to_string(),
        Color::Default => text.to_string(),
    }
}
