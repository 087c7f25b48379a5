use ratatui::text::Span;

use crate::ui::components::StackItem;
use crate::ui::theme;

pub fn footer_items() -> Vec<StackItem> {
    vec![
        StackItem::line(Span::styled(
            "\u{a9} 2026 Alternative Futures of Software Work Project.",
            theme::text_dim(),
        ))
        .centered(),
        StackItem::line(Span::styled(
            "A collaboration between VTT, University of Helsinki, and Business Finland.",
            theme::text_dim(),
        ))
        .centered()
        .gap(1),
    ]
}
