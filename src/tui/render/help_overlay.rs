use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const KEYS: &[(&str, &str)] = &[
    ("i / Enter", "type a new to-do"),
    ("space / x", "toggle done"),
    ("d / Del", "delete"),
    ("a", "toggle all"),
    ("j k / arrows", "move"),
    ("g G", "top / bottom"),
    ("q", "quit"),
];

/// Render the help overlay (toggled with `?`)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let w: u16 = 40;
    let h: u16 = KEYS.len() as u16 + 2;
    if area.width < w || area.height < h {
        return;
    }
    let popup = Rect {
        x: (area.width - w) / 2,
        y: (area.height - h) / 2,
        width: w,
        height: h,
    };

    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:>14}  ", key),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" keys ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg));
    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .block(block);
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use crate::tui::render::test_helpers::{loaded_test_app, render_app_to_string};

    #[test]
    fn overlay_lists_bindings() {
        let mut app = loaded_test_app(&["a"]);
        app.show_help = true;
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("keys"));
        assert!(screen.contains("toggle done"));
        assert!(screen.contains("quit"));
    }
}
