use std::time::Instant;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui;
use crate::ui::{format, layout};
use crate::ui::{App, Focus, InputMode};

/// Key hints for whatever currently has the keyboard
pub(crate) fn hint_text(app: &App) -> &'static str {
    if app.drawer.is_open() {
        return "Esc close \u{b7} Tab switch focus \u{b7} \u{2191}/\u{2193} scroll";
    }
    if app.input_mode == InputMode::Search {
        return "type to filter \u{b7} Ctrl+U clear \u{b7} Enter/Esc done";
    }
    match app.focus {
        Focus::Carousel => {
            "\u{2190}/\u{2192} slides \u{b7} 1-3 jump \u{b7} Space play/pause \u{b7} Enter explore \u{b7} Tab next \u{b7} q quit"
        }
        Focus::Signals => {
            "\u{2191}/\u{2193} select \u{b7} Enter open \u{b7} / search \u{b7} c category \u{b7} s/o sort \u{b7} m more \u{b7} Tab next \u{b7} q quit"
        }
        Focus::Insights => {
            "\u{2191}/\u{2193} select \u{b7} Enter open \u{b7} / search \u{b7} s/o sort \u{b7} m more \u{b7} Tab next \u{b7} q quit"
        }
        Focus::Page | Focus::About => "Tab sections \u{b7} j/k scroll \u{b7} Home/End \u{b7} q quit",
    }
}

fn render_statusbar(f: &mut Frame, app: &App, area: Rect) {
    let padding = " ".repeat(layout::CONTENT_PADDING_H as usize);
    let mut spans = vec![Span::raw(padding)];
    if app.loading {
        spans.push(Span::styled(
            "Loading content\u{2026}  ",
            Style::default().fg(ui::theme::ACCENT_CYAN),
        ));
    }
    let room = (area.width as usize).saturating_sub(layout::CONTENT_PADDING_H as usize * 2);
    spans.push(Span::styled(
        format::truncate_with_ellipsis(hint_text(app), room),
        ui::theme::text_muted(),
    ));

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(ui::theme::BG_PANEL));
    f.render_widget(bar, area);
}

pub(crate) fn render(f: &mut Frame, app: &mut App, now: Instant) {
    // Fill entire frame with app background
    let bg_block = Block::default().style(Style::default().bg(ui::theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let screen = f.area();
    app.screen = screen;

    let chunks = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(screen);

    ui::page::render_page(f, app, chunks[0], now);
    render_statusbar(f, app, chunks[1]);

    // The drawer overlays everything, status bar included
    if app.drawer.is_open() {
        ui::views::render_drawer(f, app, screen);
    }
}
