use std::time::Instant;

use futurework_core::models::ContentKind;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};

use crate::ui::app::{App, Focus, HitTarget, PageLayout, SectionId};
use crate::ui::components::{render_stack, stack_height, StackItem};
use crate::ui::{layout, theme, views};

/// A section's items and where they sit on the page
struct Placed {
    id: Option<SectionId>,
    rect: Rect,
    items: Vec<StackItem>,
}

/// Lay every section out in page coordinates, top to bottom
fn place_sections(app: &App, width: u16, now: Instant) -> (Vec<Placed>, u16) {
    let x = layout::content_x(width);
    let content = layout::content_width(width);
    let mut placed = Vec::new();
    let mut y = 0u16;

    let push = |placed: &mut Vec<Placed>, y: &mut u16, id: Option<SectionId>, items: Vec<StackItem>| {
        let height = stack_height(&items, content);
        placed.push(Placed {
            id,
            rect: Rect::new(x, *y, content, height),
            items,
        });
        *y = y.saturating_add(height);
    };

    push(&mut placed, &mut y, Some(SectionId::Hero), views::hero_items());
    y = y.saturating_add(layout::SECTION_GAP);
    push(&mut placed, &mut y, Some(SectionId::Carousel), views::carousel_items(app, now));
    y = y.saturating_add(layout::SECTION_GAP);
    push(&mut placed, &mut y, None, views::banner_items(app));

    match layout::column_widths(content) {
        Some((left, right)) => {
            let signals = views::column_items(app, ContentKind::Signals, left);
            let insights = views::column_items(app, ContentKind::Insights, right);
            let left_height = stack_height(&signals, left);
            let right_height = stack_height(&insights, right);
            placed.push(Placed {
                id: Some(SectionId::Signals),
                rect: Rect::new(x, y, left, left_height),
                items: signals,
            });
            placed.push(Placed {
                id: Some(SectionId::Insights),
                rect: Rect::new(x + left + layout::COLUMN_GAP, y, right, right_height),
                items: insights,
            });
            y = y.saturating_add(left_height.max(right_height));
        }
        None => {
            let signals = views::column_items(app, ContentKind::Signals, content);
            push(&mut placed, &mut y, Some(SectionId::Signals), signals);
            y = y.saturating_add(layout::SECTION_GAP);
            let insights = views::column_items(app, ContentKind::Insights, content);
            push(&mut placed, &mut y, Some(SectionId::Insights), insights);
        }
    }

    y = y.saturating_add(layout::SECTION_GAP);
    push(
        &mut placed,
        &mut y,
        Some(SectionId::About),
        views::about_items(app.focus == Focus::About),
    );
    y = y.saturating_add(layout::SECTION_GAP);
    push(&mut placed, &mut y, Some(SectionId::Footer), views::footer_items());

    (placed, y)
}

/// Keep the focused card (or its column, when it has none) inside the viewport
fn reveal_cursor(app: &mut App) {
    app.reveal_cursor = false;
    let Some(kind) = app.focus.kind() else {
        return;
    };
    let target = app
        .layout
        .hit_rect(HitTarget::Card(kind, app.cursor(kind)))
        .or_else(|| app.focus.section().and_then(|s| app.layout.section(s)));
    let Some(rect) = target else {
        return;
    };

    let viewport = app.page_area.height;
    if rect.y < app.page_scroll {
        app.page_scroll = rect.y;
    } else if rect.bottom() > app.page_scroll.saturating_add(viewport) {
        app.page_scroll = rect.bottom().saturating_sub(viewport).min(rect.y);
    }
}

/// Draw the scrolling page into `area`.
///
/// The whole page is rendered offscreen at its natural height and the rows
/// under the scroll position are copied into the frame.
pub fn render_page(f: &mut Frame, app: &mut App, area: Rect, now: Instant) {
    let (placed, total) = place_sections(app, area.width, now);

    let mut page = Buffer::empty(Rect::new(0, 0, area.width, total));
    page.set_style(page.area, Style::default().bg(theme::BG_APP));

    let mut hits = Vec::new();
    for section in &placed {
        render_stack(&section.items, section.rect, &mut page, &mut hits);
    }

    app.page_area = area;
    app.layout = PageLayout {
        sections: placed
            .iter()
            .filter_map(|section| section.id.map(|id| (id, section.rect)))
            .collect(),
        hits,
        total_height: total,
    };

    if app.reveal_cursor {
        reveal_cursor(app);
    }
    app.page_scroll = app.page_scroll.min(app.max_scroll());

    let buf = f.buffer_mut();
    for row in 0..area.height {
        let page_row = app.page_scroll.saturating_add(row);
        if page_row >= total {
            break;
        }
        for column in 0..area.width {
            let Some(source) = page.cell((column, page_row)) else {
                continue;
            };
            if let Some(target) = buf.cell_mut((area.x + column, area.y + row)) {
                *target = source.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futurework_core::LoadedContent;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn loaded_app(now: Instant) -> App {
        let mut app = App::new(Duration::from_millis(9000), false, now);
        app.apply_content(LoadedContent::bundled());
        app
    }

    fn draw(app: &mut App, width: u16, height: u16, now: Instant) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_page(f, app, area, now);
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_wide_terminal_puts_columns_side_by_side() {
        let now = Instant::now();
        let mut app = loaded_app(now);
        draw(&mut app, 120, 40, now);

        let signals = app.layout.section(SectionId::Signals).unwrap();
        let insights = app.layout.section(SectionId::Insights).unwrap();
        assert_eq!(signals.y, insights.y);
        assert!(insights.x > signals.x + signals.width);
        assert!(app.layout.total_height > 40);
        assert!(app
            .layout
            .hit_rect(HitTarget::Card(ContentKind::Signals, 2))
            .is_some());
        assert!(app
            .layout
            .hit_rect(HitTarget::Card(ContentKind::Insights, 1))
            .is_some());
    }

    #[test]
    fn test_narrow_terminal_stacks_columns() {
        let now = Instant::now();
        let mut app = loaded_app(now);
        draw(&mut app, 60, 30, now);

        let signals = app.layout.section(SectionId::Signals).unwrap();
        let insights = app.layout.section(SectionId::Insights).unwrap();
        assert_eq!(signals.x, insights.x);
        assert!(insights.y >= signals.bottom());
    }

    #[test]
    fn test_hero_is_visible_at_the_top() {
        let now = Instant::now();
        let mut app = loaded_app(now);
        let rows = draw(&mut app, 100, 30, now);
        assert!(rows.iter().any(|row| row.contains("SOFTWARE WORK")));
    }

    #[test]
    fn test_focusing_a_column_reveals_its_cards() {
        let now = Instant::now();
        let mut app = loaded_app(now);
        draw(&mut app, 100, 30, now);
        assert_eq!(app.page_scroll, 0);

        app.set_focus(Focus::Signals, now);
        app.reveal_cursor = true;
        let rows = draw(&mut app, 100, 30, now);

        assert!(!app.reveal_cursor);
        let card = app
            .layout
            .hit_rect(HitTarget::Card(ContentKind::Signals, 0))
            .unwrap();
        assert!(card.y >= app.page_scroll);
        assert!(card.bottom() <= app.page_scroll + 30);
        assert!(rows.iter().any(|row| row.contains("AUTO-DETECTED")));
    }

    #[test]
    fn test_loading_shows_no_cards() {
        let now = Instant::now();
        let mut app = App::new(Duration::from_millis(9000), false, now);
        draw(&mut app, 100, 30, now);
        assert!(app.layout.hits.is_empty());
        assert!(app.layout.section(SectionId::Signals).is_some());
    }

    #[test]
    fn test_scroll_is_clamped_to_page_height() {
        let now = Instant::now();
        let mut app = loaded_app(now);
        app.page_scroll = u16::MAX;
        draw(&mut app, 100, 30, now);
        assert_eq!(app.page_scroll, app.layout.total_height - 30);
    }
}
