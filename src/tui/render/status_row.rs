use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen): key hints for the current
/// mode, plus a save-failure warning when the write thread has been
/// reporting errors.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.mode {
        Mode::Navigate => " i add  space toggle  d delete  a toggle all  ? help  q quit",
        Mode::Input => " Enter add  Esc back",
    };

    let hint_style = Style::default().fg(app.theme.dim).bg(bg);
    let warning_style = Style::default().fg(app.theme.warning).bg(bg);

    let failed = app.store.failed_saves();
    let spans = if failed > 0 {
        let warning = format!("! {} saves failed (.write-errors.log) ", failed);
        let hint_width = unicode::display_width(hint);
        let warning_width = unicode::display_width(&warning);
        if hint_width + warning_width < width {
            vec![
                Span::styled(hint, hint_style),
                Span::styled(
                    " ".repeat(width - hint_width - warning_width),
                    Style::default().bg(bg),
                ),
                Span::styled(warning, warning_style),
            ]
        } else if warning_width < width {
            // Not enough room for both: the warning wins
            vec![
                Span::styled(" ".repeat(width - warning_width), Style::default().bg(bg)),
                Span::styled(warning, warning_style),
            ]
        } else {
            vec![Span::styled(warning, warning_style)]
        }
    } else {
        vec![Span::styled(hint, hint_style)]
    };

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crate::tui::app::Mode;
    use crate::tui::render::test_helpers::{loaded_test_app, render_app_to_string};

    #[test]
    fn navigate_hints_shown() {
        let mut app = loaded_test_app(&["a"]);
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("space toggle"));
        assert!(screen.contains("q quit"));
    }

    #[test]
    fn input_hints_shown() {
        let mut app = loaded_test_app(&[]);
        app.mode = Mode::Input;
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("Enter add"));
        assert!(screen.contains("Esc back"));
    }

    #[test]
    fn save_failures_shown_right_aligned() {
        use crate::io::gateway::ItemGateway;
        use crate::model::Item;
        use crate::store::ListStore;
        use crate::tui::app::App;
        use crate::tui::render::test_helpers::TERM_W;
        use crate::tui::theme::Theme;
        use std::sync::{Arc, mpsc};

        struct FailingGateway;
        impl ItemGateway for FailingGateway {
            fn load(&self) -> Option<Vec<Item>> {
                None
            }
            fn save(&self, _items: &[Item]) {}
            fn failed_saves(&self) -> usize {
                3
            }
        }

        let (_tx, rx) = mpsc::channel();
        let store = ListStore::new(Arc::new(FailingGateway) as Arc<dyn ItemGateway>);
        let mut app = App::new(store, Theme::default(), rx);
        app.store.load(None);

        let screen = render_app_to_string(&mut app);
        let status = screen.lines().last().unwrap();
        assert!(status.contains("3 saves failed (.write-errors.log)"));
        // At 80 cols the hint doesn't fit next to the warning; the warning
        // takes the row alone, pushed to the right edge, never clipped
        assert!(!status.contains("q quit"));
        assert!(status.len() <= TERM_W as usize);
        assert!(status.trim_end().ends_with("(.write-errors.log)"));
    }
}
