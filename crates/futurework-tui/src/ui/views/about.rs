use ratatui::text::{Line, Span};

use crate::ui::components::StackItem;
use crate::ui::{card, theme};

const PARAGRAPHS: [&str; 5] = [
    "Software work has significantly evolved over the past decades, and the demand for \
     software professionals has skyrocketed. According to a report published in 2023, Finland \
     will need 200,000 new software professionals by 2030. However, the development of \
     artificial intelligence, particularly generative language models like ChatGPT, has rapidly \
     changed the landscape. In 2025, advanced language models are expected to handle routine \
     programming tasks and surpass the skills of the best programmers.",
    "This development does not imply that humans will lose their roles in the software \
     industry; rather, the nature of the work will change. Industry leaders and researchers \
     predict that in the future, there will be little need for novice and mid-level software \
     engineers, with demand focusing primarily on top-tier experts.",
    "The breakthrough in AI has also transformed the nature of work and accelerated the pace \
     of software development. This creates challenges in terms of employee motivation, \
     well-being, and ensuring organizational competitiveness. The impact of AI on the \
     workplace is not merely technological but constitutes an unpredictable socio-technical \
     shift.",
    "The project investigates the impact of AI on software work and collaborates with \
     companies to develop a vision for sustainable and human-centered software work. \
     Solutions are sought for current challenges such as the skills shortage and workload \
     management, as well as for long-term transformations.",
    "The project enhances participants' ability to anticipate, understand, and prepare for \
     various futures, learn by experimenting with new work methods, and develop skills and \
     competences. Additionally, it provides guidelines for management, HR, and operational \
     teams, and improves companies' ethical and responsibility competencies in the face of the \
     AI revolution. The project supports employee well-being and motivation, encourages \
     creativity and enthusiasm, and strengthens ethical and responsible productivity growth.",
];

pub const PARTNERS: [&str; 3] = ["VTT", "Business Finland", "University of Helsinki"];

pub fn about_items(focused: bool) -> Vec<StackItem> {
    let marker = if focused { "\u{25b8} " } else { "" };
    let mut items = vec![
        StackItem::line(Line::from(vec![
            Span::styled(marker, theme::eyebrow(theme::ACCENT_GOLD)),
            Span::styled("About the ", theme::title()),
            Span::styled("Project", theme::eyebrow(theme::ACCENT_BLUE)),
        ]))
        .centered(),
        StackItem::line(Span::styled(
            "\u{2501}".repeat(12),
            theme::eyebrow(theme::ACCENT_GOLD),
        ))
        .centered()
        .gap(1),
    ];

    items.extend(
        PARAGRAPHS
            .iter()
            .map(|text| StackItem::line(Span::styled(*text, theme::text_body())).gap(1)),
    );

    let partners = PARTNERS.join(card::META_SEPARATOR);
    items.push(StackItem::line(Span::styled(partners, theme::eyebrow(theme::TEXT_MUTED))).centered());
    items
}
