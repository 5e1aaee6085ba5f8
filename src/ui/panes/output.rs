//! Generated C pane rendering

use super::{clamp_scroll, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Simple syntax highlighting for the C subset the compiler writes
fn highlight_c(line: &str) -> Line<'_> {
    if line.starts_with('#') {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(DEFAULT_THEME.keyword),
        ));
    }

    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '"' {
            flush_word(&mut spans, &mut current_word, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                if chars[end] == '\\' {
                    end += 2;
                } else {
                    end += 1;
                }
            }
            let end = (end + 1).min(chars.len());
            let literal: String = chars[i..end].iter().collect();
            spans.push(Span::styled(literal, Style::default().fg(DEFAULT_THEME.string)));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' && c != '.' {
            flush_word(&mut spans, &mut current_word, c == '(');

            let style = match c {
                '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, false);
    Line::from(spans)
}

fn flush_word(spans: &mut Vec<Span<'_>>, word: &mut String, is_function: bool) {
    if word.is_empty() {
        return;
    }
    spans.push(Span::styled(word.clone(), c_word_style(word, is_function)));
    word.clear();
}

fn c_word_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "float" | "void" => Style::default().fg(DEFAULT_THEME.type_name), // Types
        "if" | "while" | "goto" | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.number)
        }
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the generated C pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: Option<&str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Generated C ", is_focused);

    let Some(output) = output else {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let lines: Vec<&str> = output.lines().collect();
    let visible_height = clamp_scroll(scroll_offset, lines.len(), area);

    let visible_lines: Vec<Line> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| highlight_c(line))
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_highlighting() {
        let line = highlight_c("printf(\"%.2f\\n\", (float)(x));");
        assert_eq!(line.spans[0].content, "printf");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.function));
        assert_eq!(line.spans[2].content, "\"%.2f\\n\"");
        assert_eq!(line.spans[2].style.fg, Some(DEFAULT_THEME.string));

        let line = highlight_c("float x;");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.type_name));
    }

    #[test]
    fn test_preprocessor_line() {
        let line = highlight_c("#include <stdio.h>");
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));
    }
}
