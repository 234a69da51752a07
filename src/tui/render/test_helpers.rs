use std::sync::Arc;
use std::sync::mpsc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::io::gateway::{ItemGateway, MemoryGateway};
use crate::store::ListStore;
use crate::tui::app::App;
use crate::tui::render;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// An app that has finished its initial load with the given items
pub fn loaded_test_app(texts: &[&str]) -> App {
    let mut app = pending_test_app();
    app.store.load(None);
    for text in texts {
        app.store.add_item(text);
    }
    app
}

/// An app still waiting on the startup load
pub fn pending_test_app() -> App {
    let (_tx, rx) = mpsc::channel();
    let store = ListStore::new(Arc::new(MemoryGateway::new()) as Arc<dyn ItemGateway>);
    App::new(store, Theme::default(), rx)
}

/// Render the full screen into an in-memory buffer and return plain text
/// (no styles), trailing blanks trimmed.
pub fn render_app_to_string(app: &mut App) -> String {
    let backend = TestBackend::new(TERM_W, TERM_H);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}
