use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// Render the item list: one row per item, checkbox + text, cursor row
/// highlighted. Adjusts the scroll offset to keep the cursor visible.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.items().is_empty() {
        if !app.store.loading() {
            let empty = Paragraph::new(" Nothing to do")
                .style(Style::default().fg(app.theme.dim).bg(bg));
            frame.render_widget(empty, area);
        }
        return;
    }

    let visible_height = area.height as usize;
    if visible_height == 0 {
        return;
    }

    // Keep the cursor on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, item) in app
        .store
        .items()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { app.theme.highlight } else { bg };

        let checkbox = if item.complete { " [x] " } else { " [ ] " };
        let checkbox_style = if item.complete {
            Style::default().fg(app.theme.done).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };

        let text_style = if item.complete {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(row_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let text_budget = width.saturating_sub(unicode::display_width(checkbox));
        let text = unicode::truncate_to_width(&item.text, text_budget);

        let used = unicode::display_width(checkbox) + unicode::display_width(&text);
        let mut spans = vec![
            Span::styled(checkbox, checkbox_style),
            Span::styled(text, text_style),
        ];
        if width > used {
            // Pad so the cursor highlight spans the full row
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crate::tui::render::test_helpers::{loaded_test_app, render_app_to_string};

    #[test]
    fn rows_show_checkbox_state() {
        let mut app = loaded_test_app(&["buy milk", "water plants"]);
        let key = app.store.items()[1].key;
        app.store.toggle_complete(key, true);

        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("[ ] buy milk"));
        assert!(screen.contains("[x] water plants"));
    }

    #[test]
    fn empty_list_message() {
        let mut app = loaded_test_app(&[]);
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("Nothing to do"));
    }

    #[test]
    fn long_text_is_truncated() {
        let long = "x".repeat(200);
        let mut app = loaded_test_app(&[long.as_str()]);
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains('\u{2026}'));
        // No line wider than the test terminal
        assert!(screen.lines().all(|l| l.chars().count() <= 80));
    }

    #[test]
    fn cursor_scrolls_into_view() {
        let texts: Vec<String> = (0..50).map(|i| format!("item {:02}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let mut app = loaded_test_app(&refs);
        app.cursor = 49;

        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("item 49"));
        assert!(!screen.contains("item 00"));
        assert!(app.scroll_offset > 0);
    }
}
