use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::ui::app::HitTarget;

/// One vertically stacked element of a page section: wrapped text with an
/// optional frame, measured before it is drawn so the page knows its height.
#[derive(Debug, Clone)]
pub struct StackItem {
    lines: Vec<Line<'static>>,
    block: Option<Block<'static>>,
    alignment: Alignment,
    gap_after: u16,
    hit: Option<HitTarget>,
}

impl StackItem {
    pub fn new(lines: Vec<Line<'static>>) -> Self {
        Self {
            lines,
            block: None,
            alignment: Alignment::Left,
            gap_after: 0,
            hit: None,
        }
    }

    pub fn line(line: impl Into<Line<'static>>) -> Self {
        Self::new(vec![line.into()])
    }

    /// Blank rows
    pub fn spacer(rows: u16) -> Self {
        Self::new(Vec::new()).gap(rows)
    }

    pub fn block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn gap(mut self, rows: u16) -> Self {
        self.gap_after = rows;
        self
    }

    pub fn hit(mut self, target: HitTarget) -> Self {
        self.hit = Some(target);
        self
    }

    fn paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.lines.clone())
            .alignment(self.alignment)
            .wrap(Wrap { trim: false })
    }

    /// Columns and rows taken by the frame at a given width
    fn chrome(&self, width: u16) -> (u16, u16) {
        match &self.block {
            Some(block) => {
                let measure = Rect::new(0, 0, width, u16::MAX / 2);
                let inner = block.inner(measure);
                (inner.width, measure.height - inner.height)
            }
            None => (width, 0),
        }
    }

    /// Rows of the element itself, without the trailing gap
    fn body_height(&self, width: u16) -> u16 {
        let (inner_width, frame_rows) = self.chrome(width);
        let text_rows = if self.lines.is_empty() {
            0
        } else {
            self.paragraph().line_count(inner_width.max(1))
        };
        (text_rows as u16).saturating_add(frame_rows)
    }

    pub fn height(&self, width: u16) -> u16 {
        self.body_height(width).saturating_add(self.gap_after)
    }
}

pub fn stack_height(items: &[StackItem], width: u16) -> u16 {
    items
        .iter()
        .fold(0u16, |acc, item| acc.saturating_add(item.height(width)))
}

/// Draw `items` top to bottom starting at `area.y`, clipped to `area`.
/// Interactive items record their drawn rect in `hits`.
pub fn render_stack(
    items: &[StackItem],
    area: Rect,
    buf: &mut Buffer,
    hits: &mut Vec<(Rect, HitTarget)>,
) {
    let mut y = area.y;
    let bottom = area.bottom();

    for item in items {
        if y >= bottom {
            break;
        }
        let body = item.body_height(area.width).min(bottom - y);
        let rect = Rect::new(area.x, y, area.width, body);

        let text_area = match &item.block {
            Some(block) => {
                let inner = block.inner(rect);
                block.clone().render(rect, buf);
                inner
            }
            None => rect,
        };
        if !item.lines.is_empty() {
            item.paragraph().render(text_area, buf);
        }
        if let Some(target) = item.hit {
            hits.push((rect, target));
        }

        y = y.saturating_add(item.height(area.width));
    }
}
