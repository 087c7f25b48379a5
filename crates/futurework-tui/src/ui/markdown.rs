use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::{card, theme};

const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone)]
struct StyleStack {
    styles: Vec<Style>,
}

impl StyleStack {
    fn new() -> Self {
        Self {
            styles: vec![theme::text_body()],
        }
    }

    fn current(&self) -> Style {
        self.styles.last().copied().unwrap_or_else(theme::text_body)
    }

    fn push(&mut self, modifier: impl Fn(Style) -> Style) {
        let new_style = modifier(self.current());
        self.styles.push(new_style);
    }

    fn pop(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }
}

fn flush(lines: &mut Vec<Line<'static>>, current_line: &mut Vec<Span<'static>>) {
    if !current_line.is_empty() {
        lines.push(Line::from(std::mem::take(current_line)));
    }
}

/// Render an article's markdown body into styled lines
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let parser = Parser::new(text);
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_line: Vec<Span<'static>> = Vec::new();
    let mut style_stack = StyleStack::new();
    let mut in_code_block = false;
    let mut in_quote = false;
    let mut list_level: usize = 0;

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => {
                    if in_quote {
                        current_line.push(Span::styled(card::QUOTE_BAR, theme::eyebrow(theme::ACCENT_GOLD)));
                    }
                }
                Tag::Heading { .. } => {
                    style_stack.push(|s| s.fg(theme::ACCENT_GOLD).add_modifier(Modifier::BOLD));
                }
                Tag::BlockQuote(_) => {
                    in_quote = true;
                    style_stack.push(|s| s.fg(theme::TEXT_MUTED).add_modifier(Modifier::ITALIC));
                }
                Tag::CodeBlock(_) => {
                    in_code_block = true;
                }
                Tag::List(_) => {
                    flush(&mut lines, &mut current_line);
                    list_level += 1;
                }
                Tag::Item => {
                    let indent = card::INDENT_UNIT.repeat(list_level.saturating_sub(1));
                    current_line.push(Span::styled(
                        format!("{}{}", indent, card::LIST_BULLET),
                        Style::default().fg(theme::ACCENT_GOLD),
                    ));
                }
                Tag::Emphasis => {
                    style_stack.push(|s| s.add_modifier(Modifier::ITALIC));
                }
                Tag::Strong => {
                    style_stack.push(|s| s.add_modifier(Modifier::BOLD));
                }
                Tag::Link { .. } => {
                    style_stack.push(|s| s.fg(theme::ACCENT_BLUE).add_modifier(Modifier::UNDERLINED));
                }
                _ => {}
            },
            Event::End(tag_end) => match tag_end {
                TagEnd::Paragraph => {
                    flush(&mut lines, &mut current_line);
                    // Tight list items have no paragraph; loose ones keep one blank row
                    if list_level == 0 {
                        lines.push(Line::from(""));
                    }
                }
                TagEnd::Heading(_) => {
                    flush(&mut lines, &mut current_line);
                    lines.push(Line::from(""));
                    style_stack.pop();
                }
                TagEnd::BlockQuote(_) => {
                    flush(&mut lines, &mut current_line);
                    in_quote = false;
                    style_stack.pop();
                }
                TagEnd::CodeBlock => {
                    in_code_block = false;
                    lines.push(Line::from(""));
                }
                TagEnd::List(_) => {
                    flush(&mut lines, &mut current_line);
                    list_level = list_level.saturating_sub(1);
                    if list_level == 0 {
                        lines.push(Line::from(""));
                    }
                }
                TagEnd::Item => {
                    flush(&mut lines, &mut current_line);
                }
                TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link => {
                    style_stack.pop();
                }
                _ => {}
            },
            Event::Text(text) => {
                if in_code_block {
                    // The whole block arrives as one text event
                    for code_line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("{}{}", card::INDENT_UNIT, code_line),
                            Style::default().fg(theme::ACCENT_SUCCESS),
                        )));
                    }
                } else {
                    current_line.push(Span::styled(text.to_string(), style_stack.current()));
                }
            }
            Event::Code(code) => {
                current_line.push(Span::styled(
                    code.to_string(),
                    Style::default().fg(theme::ACCENT_SUCCESS),
                ));
            }
            Event::SoftBreak => {
                current_line.push(Span::styled(" ", style_stack.current()));
            }
            Event::HardBreak => {
                flush(&mut lines, &mut current_line);
            }
            Event::Rule => {
                lines.push(Line::from(Span::styled("─".repeat(RULE_WIDTH), theme::text_dim())));
                lines.push(Line::from(""));
            }
            _ => {}
        }
    }

    flush(&mut lines, &mut current_line);

    while lines.last().is_some_and(|line| line.width() == 0) {
        lines.pop();
    }

    if lines.is_empty() && !text.trim().is_empty() {
        lines.push(Line::from(Span::styled(text.to_string(), theme::text_body())));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'static>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_render_plain_text() {
        let lines = render_markdown("Hello, world!");
        assert_eq!(plain(&lines), vec!["Hello, world!"]);
    }

    #[test]
    fn test_soft_breaks_join_into_one_line() {
        let lines = render_markdown("first half\nsecond half");
        assert_eq!(plain(&lines), vec!["first half second half"]);
    }

    #[test]
    fn test_heading_is_bold_gold() {
        let lines = render_markdown("# The Shift\n\nBody text.");
        let text = plain(&lines);
        assert_eq!(text[0], "The Shift");
        assert_eq!(text[1], "");
        assert_eq!(text[2], "Body text.");

        let heading = &lines[0].spans[0];
        assert_eq!(heading.style.fg, Some(theme::ACCENT_GOLD));
        assert!(heading.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_list_items_get_bullets() {
        let lines = render_markdown("- one\n- two\n\nafter");
        let text = plain(&lines);
        assert_eq!(text[0], "• one");
        assert_eq!(text[1], "• two");
        assert!(text.contains(&"after".to_string()));
    }

    #[test]
    fn test_quote_has_bar() {
        let lines = render_markdown("> Design for people.");
        let text = plain(&lines);
        assert_eq!(text[0], "│ Design for people.");
    }

    #[test]
    fn test_render_code_block() {
        let lines = render_markdown("```\nlet x = 1;\nlet y = 2;\n```");
        let text = plain(&lines);
        assert_eq!(text, vec!["  let x = 1;", "  let y = 2;"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(render_markdown("").is_empty());
    }
}
