use futurework_core::models::{format_long_date, ContentKind, Insight, Signal};
use futurework_core::{SortOrder, StreamController, StreamItem};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
};

use crate::ui::app::{App, Focus, HitTarget, InputMode};
use crate::ui::components::StackItem;
use crate::ui::{card, format, theme};

const SKELETON_CARDS: usize = 3;

fn accent(kind: ContentKind) -> Color {
    match kind {
        ContentKind::Signals => theme::ACCENT_CYAN,
        ContentKind::Insights => theme::ACCENT_GOLD,
    }
}

fn header(kind: ContentKind, focused: bool) -> StackItem {
    let (lead, highlight, glyph) = match kind {
        ContentKind::Signals => ("AI ", "Signal", card::SPARKLE),
        ContentKind::Insights => ("Expert ", "Insights", card::BULLET_GLYPH),
    };
    let marker = if focused { "\u{25b8} " } else { "  " };
    StackItem::line(Line::from(vec![
        Span::styled(marker, theme::eyebrow(accent(kind))),
        Span::styled(format!("{} ", glyph.trim_end()), Style::default().fg(accent(kind))),
        Span::styled(lead, theme::title()),
        Span::styled(highlight, theme::eyebrow(accent(kind))),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(accent(kind))),
    )
    .gap(1)
}

fn search_field(kind: ContentKind, query: &str, editing: bool) -> StackItem {
    let placeholder = match kind {
        ContentKind::Signals => "Search from signals...",
        ContentKind::Insights => "Search from insights...",
    };
    let mut spans = vec![Span::styled(card::SEARCH_GLYPH, theme::text_dim())];
    if query.is_empty() && !editing {
        spans.push(Span::styled(placeholder, theme::text_dim()));
        spans.push(Span::styled("  (/)", theme::key_hint()));
    } else {
        spans.push(Span::styled(query.to_string(), theme::text_primary()));
        if editing {
            spans.push(Span::styled("\u{258f}", Style::default().fg(accent(kind))));
        }
    }

    StackItem::line(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(if editing {
                Style::default().fg(accent(kind))
            } else {
                theme::border(false)
            })
            .style(Style::default().bg(theme::BG_INPUT)),
    )
}

fn controls_line<T: StreamItem>(kind: ContentKind, stream: &StreamController<T>) -> StackItem {
    let arrow = match stream.sort_order() {
        SortOrder::Ascending => "\u{2191}",
        SortOrder::Descending => "\u{2193}",
    };
    let mut spans = Vec::new();
    if kind == ContentKind::Signals {
        let category = stream.category().map_or("All", |c| c.label());
        spans.push(Span::styled("Category ", theme::text_dim()));
        spans.push(Span::styled(category.to_string(), Style::default().fg(accent(kind))));
        spans.push(Span::styled(" (c)", theme::key_hint()));
        spans.push(Span::raw(card::SPACER));
    }
    spans.push(Span::styled("Sort ", theme::text_dim()));
    spans.push(Span::styled(
        format!("{} {} {}", stream.sort_field().label(), arrow, stream.sort_order().label()),
        theme::text_muted(),
    ));
    spans.push(Span::styled(" (s/o)", theme::key_hint()));
    StackItem::line(Line::from(spans))
}

fn skeleton_card(width_hint: usize) -> StackItem {
    let fill = |n: usize| Span::styled(card::SKELETON_FILL.repeat(n), Style::default().fg(theme::SKELETON));
    StackItem::new(vec![
        Line::from(fill(width_hint / 3)),
        Line::from(fill(width_hint)),
        Line::from(fill(width_hint * 2 / 3)),
    ])
    .block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(theme::SKELETON))
            .padding(Padding::horizontal(1)),
    )
    .gap(1)
}

fn card_block(kind: ContentKind, selected: bool) -> Block<'static> {
    let bg = if selected { theme::BG_SELECTED } else { theme::BG_CARD };
    Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(accent(kind)))
        .padding(Padding::new(1, 1, 0, 0))
        .style(Style::default().bg(bg))
}

fn signal_card_lines(signal: &Signal) -> Vec<Line<'static>> {
    let mut meta = format!("{}{}", card::SPARKLE, signal.source.to_uppercase());
    if let Some(clock) = format::format_clock(&signal.detected_at) {
        meta.push_str(card::META_SEPARATOR);
        meta.push_str(&clock);
    }

    let mut lines = vec![Line::from(Span::styled(meta, Style::default().fg(theme::ACCENT_CYAN)))];

    let mut chips = Vec::new();
    if let Some(category) = signal.category {
        chips.push(Span::styled(format!(" {} ", category.label()), theme::chip(theme::ACCENT_CYAN)));
    }
    if let Some(horizon) = signal.decision_horizon {
        if !chips.is_empty() {
            chips.push(Span::raw(" "));
        }
        chips.push(Span::styled(format!(" {} ", horizon.label()), theme::chip(theme::ACCENT_BLUE)));
    }
    if !chips.is_empty() {
        lines.push(Line::from(chips));
    }

    lines.push(Line::from(Span::styled(signal.title.clone(), theme::title())));
    lines.push(Line::from(Span::styled(signal.summary.clone(), theme::text_muted())));
    lines
}

fn insight_card_lines(insight: &Insight) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            format!("By {}{}{}", insight.author, card::META_SEPARATOR, insight.author_role),
            Style::default()
                .fg(theme::ACCENT_GOLD)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(format_long_date(&insight.date), theme::text_dim())),
        Line::from(Span::styled(insight.title.clone(), theme::title())),
        Line::from(Span::styled(insight.excerpt.clone(), theme::text_body())),
        Line::from(Span::styled(
            format!("READ FULL ARTICLE {}", card::ARROW_RIGHT),
            theme::eyebrow(theme::ACCENT_GOLD),
        )),
    ]
}

fn column<T: StreamItem>(
    app: &App,
    kind: ContentKind,
    stream: &StreamController<T>,
    width: u16,
    card_lines: impl Fn(&T) -> Vec<Line<'static>>,
) -> Vec<StackItem> {
    let focused = app.focus == Focus::from(kind);
    let editing = focused && app.input_mode == InputMode::Search;

    let mut items = vec![
        header(kind, focused),
        search_field(kind, stream.query(), editing),
        controls_line(kind, stream).gap(1),
    ];

    if app.loading {
        let hint = width.saturating_sub(4) as usize;
        items.extend((0..SKELETON_CARDS).map(|_| skeleton_card(hint)));
        return items;
    }

    let visible = stream.view();
    if visible.is_empty() {
        let message = match kind {
            ContentKind::Signals => "No signals match the current filters.",
            ContentKind::Insights => "No insights match the current search.",
        };
        items.push(StackItem::line(Span::styled(message, theme::text_dim())).gap(1));
        return items;
    }

    let cursor = app.cursor(kind);
    let shown = visible.len();
    for (index, item) in visible.into_iter().enumerate() {
        let selected = focused && index == cursor;
        items.push(
            StackItem::new(card_lines(item))
                .block(card_block(kind, selected))
                .hit(HitTarget::Card(kind, index))
                .gap(1),
        );
    }

    let total = stream.matching_count();
    if stream.has_more() {
        let remaining = total - shown;
        items.push(
            StackItem::line(Line::from(vec![
                Span::styled(
                    format!("Show more ({} remaining)", remaining),
                    theme::eyebrow(accent(kind)),
                ),
                Span::styled("  (m)", theme::key_hint()),
            ]))
            .hit(HitTarget::ShowMore(kind)),
        );
    } else {
        items.push(StackItem::line(Span::styled(
            format!("Showing all {}", total),
            theme::text_dim(),
        )));
    }
    items
}

pub fn column_items(app: &App, kind: ContentKind, width: u16) -> Vec<StackItem> {
    match kind {
        ContentKind::Signals => column(app, kind, &app.signals, width, signal_card_lines),
        ContentKind::Insights => column(app, kind, &app.insights, width, insight_card_lines),
    }
}

/// The single page-level load error line, if any
pub fn banner_items(app: &App) -> Vec<StackItem> {
    match &app.load_error {
        Some(message) => vec![StackItem::line(Line::from(vec![
            Span::styled("\u{26a0} ", Style::default().fg(theme::ACCENT_WARNING)),
            Span::styled(message.clone(), Style::default().fg(theme::ACCENT_WARNING)),
        ]))
        .gap(1)],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futurework_core::defaults::default_signals;

    fn plain(lines: &[Line<'static>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_signal_card_shows_source_time_and_category() {
        let signal = default_signals().remove(0);
        let text = plain(&signal_card_lines(&signal));
        assert_eq!(text[0], "\u{2726} AUTO-DETECTED \u{2022} 00:42:15");
        assert_eq!(text[1], " Developer Tools ");
        assert_eq!(text[2], signal.title);
    }

    #[test]
    fn test_insight_card_byline() {
        let insight = futurework_core::defaults::default_insights().remove(0);
        let text = plain(&insight_card_lines(&insight));
        assert_eq!(text[0], "By Dr. Sarah Jenkins \u{2022} Research Lead");
        assert_eq!(text[1], "Wednesday, 4 February 2026");
    }
}
