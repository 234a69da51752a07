use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Centered overlay shown while the initial load from storage is pending
pub fn render_loading_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let w: u16 = 20;
    let h: u16 = 3;
    if area.width < w || area.height < h {
        return;
    }
    let popup = Rect {
        x: (area.width - w) / 2,
        y: (area.height - h) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    let paragraph = Paragraph::new(Line::from("Loading\u{2026}").centered())
        .style(
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background),
        )
        .block(block);
    frame.render_widget(paragraph, popup);
}
