use futurework_core::models::{
    format_long_date, format_long_date_time, ContentBlock, ContentItem, Insight, InsightBody,
    Signal,
};
use futurework_core::DrawerFocus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::ui::components::{render_backdrop, render_panel_background, render_panel_header};
use crate::ui::{card, layout, markdown, theme, App};

fn accent(item: &ContentItem) -> Color {
    match item {
        ContentItem::Signal(_) => theme::ACCENT_CYAN,
        ContentItem::Insight(_) => theme::ACCENT_GOLD,
    }
}

fn section_heading(label: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(label.to_uppercase(), theme::eyebrow(color)))
}

fn bullets(items: &[String], color: Color, lines: &mut Vec<Line<'static>>) {
    for item in items {
        lines.push(Line::from(vec![
            Span::styled(card::LIST_BULLET, Style::default().fg(color)),
            Span::styled(item.clone(), theme::text_body()),
        ]));
    }
}

fn tags_line(tags: &[String]) -> Line<'static> {
    let spans: Vec<Span<'static>> = tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("#{}", tag), theme::text_muted()),
                Span::raw(card::SPACER),
            ]
        })
        .collect();
    Line::from(spans)
}

pub fn signal_lines(signal: &Signal) -> Vec<Line<'static>> {
    let mut meta = vec![Span::styled(
        format!("{}{}", card::SPARKLE, signal.source.to_uppercase()),
        Style::default().fg(theme::ACCENT_CYAN),
    )];
    if let Some(category) = signal.category {
        meta.push(Span::raw(card::SPACER));
        meta.push(Span::styled(format!(" {} ", category.label()), theme::chip(theme::ACCENT_CYAN)));
    }
    if let Some(horizon) = signal.decision_horizon {
        meta.push(Span::raw(card::SPACER));
        meta.push(Span::styled(format!(" {} ", horizon.label()), theme::chip(theme::ACCENT_BLUE)));
    }

    let mut lines = vec![
        Line::from(meta),
        Line::from(""),
        Line::from(Span::styled(format_long_date_time(&signal.detected_at), theme::text_dim())),
        Line::from(""),
        Line::from(Span::styled(signal.title.clone(), theme::title())),
        Line::from(""),
        Line::from(Span::styled(signal.summary.clone(), theme::text_body())),
    ];

    let sections: [(&str, &[String], Color); 3] = [
        ("Why it matters", signal.why_it_matters.as_slice(), theme::ACCENT_CYAN),
        ("Recommended actions", signal.recommended_actions.as_slice(), theme::ACCENT_SUCCESS),
        ("Risks & caveats", signal.risks_and_caveats.as_slice(), theme::ACCENT_WARNING),
    ];
    for (label, items, color) in sections {
        if items.is_empty() {
            continue;
        }
        lines.push(Line::from(""));
        lines.push(section_heading(label, color));
        bullets(items, color, &mut lines);
    }

    if !signal.tags.is_empty() {
        lines.push(Line::from(""));
        lines.push(tags_line(&signal.tags));
    }

    if let Some(url) = &signal.source_url {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Source ", theme::text_dim()),
            Span::styled(url.clone(), theme::link()),
        ]));
    }
    lines
}

fn block_lines(blocks: &[ContentBlock], lines: &mut Vec<Line<'static>>) {
    for block in blocks {
        match block {
            ContentBlock::Heading { text } => {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    theme::eyebrow(theme::ACCENT_GOLD),
                )));
            }
            ContentBlock::Paragraph { text } => {
                lines.push(Line::from(Span::styled(text.clone(), theme::text_body())));
            }
            ContentBlock::Quote { text, attribution } => {
                lines.push(Line::from(vec![
                    Span::styled(card::QUOTE_BAR, theme::eyebrow(theme::ACCENT_GOLD)),
                    Span::styled(
                        text.clone(),
                        theme::text_muted().add_modifier(Modifier::ITALIC),
                    ),
                ]));
                if let Some(attribution) = attribution {
                    lines.push(Line::from(Span::styled(
                        format!("  \u{2014} {}", attribution),
                        theme::text_dim(),
                    )));
                }
            }
            ContentBlock::List { items } => {
                bullets(items, theme::ACCENT_GOLD, lines);
            }
        }
        lines.push(Line::from(""));
    }
}

pub fn insight_lines(insight: &Insight) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("By {}{}{}", insight.author, card::META_SEPARATOR, insight.author_role),
            Style::default()
                .fg(theme::ACCENT_GOLD)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(format_long_date(&insight.date), theme::text_dim())),
        Line::from(""),
        Line::from(Span::styled(insight.title.clone(), theme::title())),
        Line::from(""),
    ];

    match &insight.body {
        InsightBody::Paragraphs(paragraphs) => {
            for paragraph in paragraphs {
                lines.push(Line::from(Span::styled(paragraph.clone(), theme::text_body())));
                lines.push(Line::from(""));
            }
        }
        InsightBody::Blocks(blocks) => block_lines(blocks, &mut lines),
        InsightBody::Markdown(text) => {
            lines.extend(markdown::render_markdown(text));
            lines.push(Line::from(""));
        }
    }
    if insight.body.is_empty() {
        lines.push(Line::from(Span::styled(insight.excerpt.clone(), theme::text_body())));
        lines.push(Line::from(""));
    }

    if !insight.tags.is_empty() {
        lines.push(tags_line(&insight.tags));
        lines.push(Line::from(""));
    }
    if let Some(url) = &insight.url {
        lines.push(Line::from(vec![
            Span::styled(format!("Read the original {} ", card::ARROW_RIGHT), theme::text_dim()),
            Span::styled(url.clone(), theme::link()),
        ]));
    }

    while lines.last().is_some_and(|line| line.width() == 0) {
        lines.pop();
    }
    lines
}

pub fn render_drawer(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(item) = app.drawer.item() else {
        return;
    };
    let focus = app.drawer.focus().unwrap_or_default();
    let accent = accent(item);

    let (title, body) = match item {
        ContentItem::Signal(signal) => ("AI SIGNAL DETAILS", signal_lines(signal)),
        ContentItem::Insight(insight) => ("EXPERT INSIGHT ARTICLE", insight_lines(insight)),
    };

    render_backdrop(f, area);
    let panel = layout::drawer_area(area);
    let inner = render_panel_background(f, panel, accent);
    let padded = layout::with_horizontal_padding(
        Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        },
        layout::DRAWER_PADDING_H,
    );

    let control = format!("[ {} Close ]", card::CLOSE_GLYPH);
    let control_style = if focus == DrawerFocus::Dismiss {
        theme::focused(accent)
    } else {
        theme::text_muted()
    };
    let title_style = if focus == DrawerFocus::Body {
        theme::eyebrow(accent).add_modifier(Modifier::UNDERLINED)
    } else {
        theme::eyebrow(accent)
    };
    let body_area = render_panel_header(f, padded, title, title_style, &control, control_style);

    let paragraph = Paragraph::new(body).wrap(Wrap { trim: false });
    let total = paragraph.line_count(body_area.width.max(1)) as u16;
    app.drawer_body_max = total.saturating_sub(body_area.height);
    let scroll = app.drawer.body_scroll().min(app.drawer_body_max);

    f.render_widget(paragraph.scroll((scroll, 0)), body_area);
}
