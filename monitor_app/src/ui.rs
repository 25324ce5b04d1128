//! Dashboard views.
//!
//! Pure projections of `App` state onto the terminal: a header with the
//! update time, one card per coin, a tab bar, the active lower view (detail
//! chart, statistics table or comparison chart) and a key-hint footer.
//! Nothing here holds state; every frame is drawn from scratch.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span, Text},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Sparkline, Table,
        Tabs,
    },
};

use monitor_core::format::signed_percent;
use monitor_core::quote::{CoinQuote, PricePoint};
use monitor_core::stats::{HistoryStats, history_bounds, volatility};

use crate::app::{App, ViewTab};

/// History points shown in each card's sparkline.
const SPARK_LEN: usize = 6;

/// Dataset colors for the comparison chart, cycled per coin.
const PALETTE: [Color; 4] = [Color::Magenta, Color::Cyan, Color::Green, Color::Yellow];

/// Render the whole dashboard for one frame.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_cards(f, chunks[1], app);
    draw_tabs(f, chunks[2], app);
    match app.view {
        ViewTab::Chart => draw_detail_chart(f, chunks[3], app),
        ViewTab::Stats => draw_stats(f, chunks[3], app),
        ViewTab::Compare => draw_compare(f, chunks[3], app),
    }
    draw_footer(f, chunks[4]);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let updated = app
        .last_update
        .map(|time| time.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    let header = Paragraph::new(Text::from(vec![
        Line::from(vec![
            Span::styled(
                "CRYPTO DASHBOARD ",
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "LIVE",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Simulated prices | Last update: {}", updated),
            Style::default().fg(Color::Gray),
        )),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));

    f.render_widget(header, area);
}

fn draw_cards(f: &mut Frame, area: Rect, app: &App) {
    if app.quotes.is_empty() {
        let placeholder = Paragraph::new("Waiting for data...")
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    }

    let constraints = vec![Constraint::Ratio(1, app.quotes.len() as u32); app.quotes.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let selected_index = app.selected_index();
    for (i, quote) in app.quotes.iter().enumerate() {
        draw_card(f, columns[i], app, quote, i == selected_index);
    }
}

fn draw_card(f: &mut Frame, area: Rect, app: &App, quote: &CoinQuote, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::LightCyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", quote.symbol));

    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height < 3 || inner.width < 10 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let change_color = if quote.change_24h < 0.0 {
        Color::Red
    } else {
        Color::Green
    };

    let name_line = Line::from(vec![
        Span::styled(quote.name.clone(), Style::default().fg(Color::Gray)),
        Span::raw(" "),
        Span::styled(
            signed_percent(quote.change_24h),
            Style::default().fg(change_color),
        ),
    ]);
    f.render_widget(Paragraph::new(name_line), rows[0]);

    let price = Span::styled(
        app.locale.currency(quote.price),
        Style::default().add_modifier(Modifier::BOLD),
    );
    f.render_widget(Paragraph::new(price), rows[1]);

    let spark = sparkline_data(quote);
    let sparkline = Sparkline::default()
        .data(&spark)
        .style(Style::default().fg(change_color));
    f.render_widget(sparkline, rows[2]);
}

/// Last `SPARK_LEN` history prices, rescaled so small moves stay visible.
fn sparkline_data(quote: &CoinQuote) -> Vec<u64> {
    let start = quote.history.len().saturating_sub(SPARK_LEN);
    let tail: Vec<f64> = quote.history[start..].iter().map(|p| p.price).collect();

    let Some(stats) = HistoryStats::from_prices(tail.iter().copied()) else {
        return Vec::new();
    };
    let span = stats.max - stats.min;
    tail.iter()
        .map(|price| {
            if span <= f64::EPSILON {
                1
            } else {
                (((price - stats.min) / span) * 100.0).round() as u64 + 1
            }
        })
        .collect()
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<&str> = ViewTab::ALL.iter().map(|tab| tab.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.view.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_detail_chart(f: &mut Frame, area: Rect, app: &App) {
    let Some(quote) = app.selected_quote() else {
        f.render_widget(Block::default().borders(Borders::ALL).title(" Price "), area);
        return;
    };
    let Some(stats) = HistoryStats::from_prices(quote.history.iter().map(|p| p.price)) else {
        f.render_widget(Block::default().borders(Borders::ALL).title(" Price "), area);
        return;
    };

    let points: Vec<(f64, f64)> = quote
        .history
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.price))
        .collect();

    let (min_price, max_price) = padded_bounds(stats.min, stats.max);
    let dataset = Dataset::default()
        .name(quote.symbol.clone())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::LightCyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} 24h ", quote.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .x_axis(time_axis(&quote.history, points.len()))
        .y_axis(price_axis(app, min_price, max_price));

    f.render_widget(chart, area);
}

fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let Some(quote) = app.selected_quote() else {
        f.render_widget(Block::default().borders(Borders::ALL).title(" Statistics "), area);
        return;
    };

    let change_color = if quote.change_24h < 0.0 {
        Color::Red
    } else {
        Color::Green
    };

    let mut rows = vec![
        Row::new(vec![
            Cell::from("Current Price"),
            Cell::from(app.locale.currency(quote.price)),
        ]),
        Row::new(vec![
            Cell::from("24h Change"),
            Cell::from(Span::styled(
                signed_percent(quote.change_24h),
                Style::default().fg(change_color),
            )),
        ]),
        Row::new(vec![
            Cell::from("24h Volume"),
            Cell::from(app.locale.currency_compact(quote.volume_24h)),
        ]),
        Row::new(vec![
            Cell::from("Market Cap"),
            Cell::from(app.locale.currency_compact(quote.market_cap)),
        ]),
    ];
    if let Some(stats) = HistoryStats::from_prices(quote.history.iter().map(|p| p.price)) {
        rows.push(Row::new(vec![
            Cell::from("24h High"),
            Cell::from(app.locale.currency(stats.max)),
        ]));
        rows.push(Row::new(vec![
            Cell::from("24h Low"),
            Cell::from(app.locale.currency(stats.min)),
        ]));
        rows.push(Row::new(vec![
            Cell::from("24h Average"),
            Cell::from(app.locale.currency(stats.mean)),
        ]));
    }
    rows.push(Row::new(vec![
        Cell::from("Volatility"),
        Cell::from(format!("{:.2}%", volatility(quote.change_24h))),
    ]));

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(14)]).block(
        Block::default()
            .title(Span::styled(
                format!(" {} Statistics ", quote.symbol),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL),
    );
    f.render_widget(table, area);
}

fn draw_compare(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(6)])
        .split(area);

    draw_compare_chart(f, halves[0], app);
    draw_compare_cards(f, halves[1], app);
}

fn draw_compare_chart(f: &mut Frame, area: Rect, app: &App) {
    let Some((raw_min, raw_max)) = history_bounds(&app.quotes) else {
        f.render_widget(Block::default().borders(Borders::ALL).title(" All Coins "), area);
        return;
    };

    let series: Vec<Vec<(f64, f64)>> = app
        .quotes
        .iter()
        .map(|quote| {
            quote
                .history
                .iter()
                .enumerate()
                .map(|(i, point)| (i as f64, point.price))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = app
        .quotes
        .iter()
        .zip(&series)
        .enumerate()
        .map(|(i, (quote, points))| {
            Dataset::default()
                .name(quote.symbol.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
                .data(points)
        })
        .collect();

    let (min_price, max_price) = padded_bounds(raw_min, raw_max);
    let sample_count = app
        .quotes
        .first()
        .map(|quote| quote.history.len())
        .unwrap_or(0);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(
                    " All Coins ",
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .x_axis(time_axis(
            app.quotes.first().map(|q| q.history.as_slice()).unwrap_or(&[]),
            sample_count,
        ))
        .y_axis(price_axis(app, min_price, max_price));

    f.render_widget(chart, area);
}

fn draw_compare_cards(f: &mut Frame, area: Rect, app: &App) {
    if app.quotes.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Ratio(1, app.quotes.len() as u32); app.quotes.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, quote) in app.quotes.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let change_color = if quote.change_24h < 0.0 {
            Color::Red
        } else {
            Color::Green
        };
        let card = Paragraph::new(Text::from(vec![
            Line::from(vec![
                Span::styled(app.locale.currency(quote.price), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(
                    signed_percent(quote.change_24h),
                    Style::default().fg(change_color),
                ),
            ]),
            Line::from(Span::styled(
                format!("Vol {}", app.locale.currency_compact(quote.volume_24h)),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                format!("Cap {}", app.locale.currency_compact(quote.market_cap)),
                Style::default().fg(Color::Gray),
            )),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(format!(" {} ", quote.name)),
        );
        f.render_widget(card, columns[i]);
    }
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let key = Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD);
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("q", key),
        Span::raw(" quit | "),
        Span::styled("tab", key),
        Span::raw(" view | "),
        Span::styled("left/right", key),
        Span::raw(" coin | "),
        Span::styled("1-4", key),
        Span::raw(" jump"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, area);
}

/// Y-axis with locale-formatted price labels at the bounds and midpoint.
fn price_axis(app: &App, min_price: f64, max_price: f64) -> Axis<'static> {
    let mid_price = (min_price + max_price) / 2.0;
    Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds([min_price, max_price])
        .labels(vec![
            Span::raw(app.locale.currency(min_price)),
            Span::raw(app.locale.currency(mid_price)),
            Span::raw(app.locale.currency(max_price)),
        ])
}

/// X-axis labelled with the first, middle and last history timestamps.
fn time_axis(history: &[PricePoint], sample_count: usize) -> Axis<'static> {
    let label_at = |index: usize| {
        history
            .get(index)
            .map(|point| point.label.clone())
            .unwrap_or_default()
    };
    let last = sample_count.saturating_sub(1);
    Axis::default()
        .style(Style::default().fg(Color::DarkGray))
        .bounds([0.0, last.max(1) as f64])
        .labels(vec![
            Span::raw(label_at(0)),
            Span::raw(label_at(last / 2)),
            Span::raw(label_at(last)),
        ])
}

/// Widen `[min, max]` slightly so the line never hugs the chart border.
fn padded_bounds(min: f64, max: f64) -> (f64, f64) {
    let pad = (max - min) * 0.05;
    if pad > 0.0 {
        (min - pad, max + pad)
    } else {
        (min - 1.0, max + 1.0)
    }
}
