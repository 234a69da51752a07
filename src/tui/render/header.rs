use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the header: title row with counts, then the new-item input row
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    // Title row: app name left, done/total counts right
    let total = app.store.items().len();
    let done = app.store.items().iter().filter(|i| i.complete).count();
    let title = " tick";
    let counts = if total > 0 {
        format!("{}/{} done ", done, total)
    } else {
        String::new()
    };
    let title_width = unicode::display_width(title);
    let counts_width = unicode::display_width(&counts);
    let padding = width.saturating_sub(title_width + counts_width);

    let title_line = Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)),
    ]);

    // Input row
    let input_line = match app.mode {
        Mode::Input => {
            let value = app.store.value();
            let (before, after) = value.split_at(app.input_cursor.min(value.len()));
            let mut spans = vec![
                Span::styled(" > ", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(
                    before.to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            if !after.is_empty() {
                spans.push(Span::styled(
                    after.to_string(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ));
            }
            Line::from(spans)
        }
        Mode::Navigate => {
            let value = app.store.value();
            if value.is_empty() {
                Line::from(vec![
                    Span::styled(" > ", Style::default().fg(app.theme.dim).bg(bg)),
                    Span::styled(
                        "add a to-do (press i)",
                        Style::default().fg(app.theme.dim).bg(bg),
                    ),
                ])
            } else {
                // Half-typed entry kept after Esc
                Line::from(vec![
                    Span::styled(" > ", Style::default().fg(app.theme.dim).bg(bg)),
                    Span::styled(
                        value.to_string(),
                        Style::default().fg(app.theme.text).bg(bg),
                    ),
                ])
            }
        }
    };

    let paragraph = Paragraph::new(vec![title_line, input_line]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crate::tui::render::test_helpers::{loaded_test_app, render_app_to_string};

    #[test]
    fn header_shows_counts() {
        let mut app = loaded_test_app(&["one", "two", "three"]);
        let key = app.store.items()[0].key;
        app.store.toggle_complete(key, true);

        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("tick"));
        assert!(screen.contains("1/3 done"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let mut app = loaded_test_app(&[]);
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("add a to-do (press i)"));
        assert!(!screen.contains("done"));
    }
}
