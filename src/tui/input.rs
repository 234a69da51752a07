use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay intercepts everything
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // While the initial load is pending, only quit and help work —
    // mutating a list we haven't seen yet would race the load.
    if app.store.loading() {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('?') => app.show_help = true,
            _ => {}
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Input => handle_input(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.store.items().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => {
            let len = app.store.items().len();
            app.cursor = len.saturating_sub(1);
        }

        // Toggle completion on the item under the cursor
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(key) = app.cursor_key() {
                let complete = app
                    .store
                    .items()
                    .get(app.cursor)
                    .map(|item| item.complete)
                    .unwrap_or(false);
                app.store.toggle_complete(key, !complete);
            }
        }

        // Remove the item under the cursor
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(key) = app.cursor_key() {
                app.store.remove_item(key);
                app.clamp_cursor();
            }
        }

        // Toggle everything
        KeyCode::Char('a') => app.store.toggle_all_complete(),

        // Into the input field
        KeyCode::Char('i') | KeyCode::Enter => {
            app.mode = Mode::Input;
            app.input_cursor = app.store.value().len();
        }

        _ => {}
    }
}

fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            // Back to the list; pending text is kept, not submitted
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            app.store.submit_value();
            app.input_cursor = app.store.value().len();
            app.clamp_cursor();
        }
        KeyCode::Backspace => {
            let value = app.store.value().to_string();
            if let Some(prev) = unicode::prev_grapheme_boundary(&value, app.input_cursor) {
                let mut edited = value;
                edited.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
                app.store.set_value(edited);
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(app.store.value(), app.input_cursor)
            {
                app.input_cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(app.store.value(), app.input_cursor)
            {
                app.input_cursor = next;
            }
        }
        KeyCode::Home => app.input_cursor = 0,
        KeyCode::End => app.input_cursor = app.store.value().len(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut value = app.store.value().to_string();
            value.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
            app.store.set_value(value);
        }
        _ => {}
    }
}
