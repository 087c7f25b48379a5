use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Dims whatever is already drawn, keeping it readable behind the drawer
struct DimOverlay;

impl Widget for DimOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .add_modifier(Modifier::DIM)
                            .fg(theme::TEXT_DIM)
                            .bg(theme::BG_BACKDROP),
                    );
                }
            }
        }
    }
}

/// Dim the whole screen behind an overlay panel
pub fn render_backdrop(f: &mut Frame, area: Rect) {
    f.render_widget(DimOverlay, area);
}

/// Clear the panel area, fill it and draw the accent edge on the left.
/// Returns the area inside the edge.
pub fn render_panel_background(f: &mut Frame, area: Rect, accent: Color) -> Rect {
    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(theme::BG_DRAWER));
    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

/// Panel header: title on the left, a control on the right.
/// Returns the remaining area below the header.
pub fn render_panel_header(
    f: &mut Frame,
    area: Rect,
    title: &str,
    title_style: Style,
    control: &str,
    control_style: Style,
) -> Rect {
    // Header takes 2 lines (1 for content + 1 for spacing)
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

    let spacing = (chunks[0].width as usize)
        .saturating_sub(title.width() + control.width());

    let header_line = Line::from(vec![
        Span::styled(title.to_string(), title_style),
        Span::raw(" ".repeat(spacing)),
        Span::styled(control.to_string(), control_style),
    ]);

    f.render_widget(Paragraph::new(header_line), chunks[0]);

    chunks[1]
}
