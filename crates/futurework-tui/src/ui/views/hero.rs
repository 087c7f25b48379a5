use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::ui::components::StackItem;
use crate::ui::{format, theme};

pub fn hero_items() -> Vec<StackItem> {
    vec![
        StackItem::spacer(2),
        StackItem::line(Span::styled(
            "Alternative Futures of",
            theme::title().add_modifier(Modifier::ITALIC),
        ))
        .centered(),
        StackItem::line(Span::styled("SOFTWARE WORK", theme::title())).centered().gap(1),
        StackItem::line(Line::from(vec![
            Span::styled("Exploring the ", theme::text_body()),
            Span::styled("socio-technical shift", theme::eyebrow(theme::ACCENT_GOLD)),
            Span::styled(" where AI meets human expertise.", theme::text_body()),
        ]))
        .centered(),
        StackItem::line(Span::styled(
            "A collaboration between VTT, University of Helsinki, and Business Finland.",
            theme::text_muted().fg(theme::ACCENT_CYAN),
        ))
        .centered()
        .gap(1),
        StackItem::line(Span::styled(
            format!("{} \u{2193}", format::tracked("Read more")),
            theme::eyebrow(theme::ACCENT_GOLD),
        ))
        .centered(),
    ]
}
