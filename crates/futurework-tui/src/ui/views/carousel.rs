use std::time::Instant;

use futurework_core::models::SlideCategory;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
};

use crate::ui::app::{App, Focus};
use crate::ui::components::StackItem;
use crate::ui::{card, format, theme};

/// Cells per progress segment
const SEGMENT_WIDTH: usize = 8;

fn category_color(category: SlideCategory) -> Color {
    match category {
        SlideCategory::AiSignal => theme::ACCENT_CYAN,
        SlideCategory::ExpertInsights => theme::ACCENT_GOLD,
        SlideCategory::AboutProject => theme::ACCENT_BLUE,
    }
}

/// Segments before the active one are full, the active one fills with
/// the slide's progress, the rest are empty.
fn progress_spans(active: usize, count: usize, progress: f32) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(count * 3);
    for index in 0..count {
        let filled = if index < active {
            SEGMENT_WIDTH
        } else if index == active {
            ((progress * SEGMENT_WIDTH as f32).round() as usize).min(SEGMENT_WIDTH)
        } else {
            0
        };
        spans.push(Span::styled(
            card::SEGMENT_FULL.repeat(filled),
            Style::default().fg(theme::ACCENT_GOLD),
        ));
        spans.push(Span::styled(
            card::SEGMENT_EMPTY.repeat(SEGMENT_WIDTH - filled),
            Style::default().fg(theme::PROGRESS_EMPTY),
        ));
        if index + 1 < count {
            spans.push(Span::raw(" "));
        }
    }
    spans
}

fn controls_line(app: &App, now: Instant) -> Line<'static> {
    let engine = &app.carousel;
    let mut spans = vec![Span::styled(format!("{}  ", card::PREV_GLYPH), theme::text_muted())];
    spans.extend(progress_spans(
        engine.active_index(),
        engine.slide_count(),
        engine.progress(now),
    ));
    spans.push(Span::styled(format!("  {}", card::NEXT_GLYPH), theme::text_muted()));
    spans.push(Span::styled(
        format!("   {} / {}", engine.active_index() + 1, engine.slide_count()),
        theme::text_dim(),
    ));

    let status = if engine.reduced_motion() {
        format!("   {} Autoplay off (reduced motion)", card::PAUSE_GLYPH)
    } else if engine.is_paused() {
        format!("   {} Paused", card::PAUSE_GLYPH)
    } else {
        format!("   {} Playing", card::PLAY_GLYPH)
    };
    spans.push(Span::styled(status, theme::text_dim()));
    Line::from(spans)
}

pub fn carousel_items(app: &App, now: Instant) -> Vec<StackItem> {
    let slide = app.active_slide();
    let focused = app.focus == Focus::Carousel;
    let accent = category_color(slide.category);

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", slide.category.label().to_uppercase()),
            theme::chip(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(slide.question, theme::title())),
        Line::from(""),
        Line::from(Span::styled(slide.context, theme::text_muted())),
        Line::from(""),
    ];

    if let Some(label) = slide.cta_label {
        let style = if focused {
            theme::focused(theme::ACCENT_GOLD)
        } else {
            theme::eyebrow(theme::ACCENT_GOLD)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} {}", label.to_uppercase(), card::ARROW_RIGHT), style),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(controls_line(app, now));

    let panel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(focused || app.is_hovering_carousel()))
        .padding(Padding::new(2, 2, 1, 0))
        .style(Style::default().bg(theme::BG_PANEL));

    vec![
        StackItem::line(Span::styled(
            format::tracked("Strategic Provocations"),
            theme::eyebrow(theme::ACCENT_GOLD),
        ))
        .centered()
        .gap(1),
        StackItem::new(lines).block(panel).centered(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span<'static>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_progress_segments() {
        let full = card::SEGMENT_FULL.repeat(SEGMENT_WIDTH);
        let empty = card::SEGMENT_EMPTY.repeat(SEGMENT_WIDTH);
        let half = format!(
            "{}{}",
            card::SEGMENT_FULL.repeat(4),
            card::SEGMENT_EMPTY.repeat(4)
        );

        assert_eq!(
            text(&progress_spans(1, 3, 0.5)),
            format!("{} {} {}", full, half, empty)
        );
        assert_eq!(
            text(&progress_spans(0, 2, 0.0)),
            format!("{} {}", empty, empty)
        );
    }
}
