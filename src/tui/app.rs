use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::gateway::{ItemGateway, JsonFileGateway};
use crate::io::lock::DataLock;
use crate::io::{default_data_dir, ensure_data_dir};
use crate::model::Item;
use crate::store::ListStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around the list, toggling and removing items
    Navigate,
    /// Typing a new item into the header input
    Input,
}

/// Main application state
pub struct App {
    pub store: ListStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the item list
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Byte offset of the caret within the pending input value
    pub input_cursor: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Result channel for the startup load (None once delivered)
    load_rx: Option<Receiver<Option<Vec<Item>>>>,
}

impl App {
    pub fn new(store: ListStore, theme: Theme, load_rx: Receiver<Option<Vec<Item>>>) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            input_cursor: 0,
            show_help: false,
            load_rx: Some(load_rx),
        }
    }

    /// Key of the item under the cursor
    pub fn cursor_key(&self) -> Option<i64> {
        self.store.items().get(self.cursor).map(|item| item.key)
    }

    /// Keep the cursor inside the list after removals or loads
    pub fn clamp_cursor(&mut self) {
        let len = self.store.items().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Deliver the startup load result if it has arrived. Returns true
    /// while the load is still pending.
    fn poll_load(&mut self) -> bool {
        let Some(rx) = &self.load_rx else {
            return false;
        };
        match rx.try_recv() {
            Ok(items) => {
                self.store.load(items);
                self.clamp_cursor();
                self.load_rx = None;
                false
            }
            Err(mpsc::TryRecvError::Empty) => true,
            Err(mpsc::TryRecvError::Disconnected) => {
                // Loader died without answering; treat as an empty store
                self.store.load(None);
                self.load_rx = None;
                false
            }
        }
    }
}

/// Launch the TUI against the given data directory (default: ~/.tick)
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = match data_dir {
        Some(dir) => PathBuf::from(dir),
        None => default_data_dir(),
    };
    ensure_data_dir(&data_dir)?;

    // One instance per data dir; released on exit
    let _lock = DataLock::acquire_default(&data_dir)?;

    let config = read_config(&data_dir);
    let theme = Theme::from_config(&config.ui);

    let gateway: Arc<dyn ItemGateway> = Arc::new(JsonFileGateway::new(&data_dir));

    // Kick off the initial load; the event loop shows the loading overlay
    // until the result lands on this channel.
    let (load_tx, load_rx) = mpsc::channel();
    let loader_gateway = Arc::clone(&gateway);
    std::thread::spawn(move || {
        let _ = load_tx.send(loader_gateway.load());
    });

    let store = ListStore::new(gateway);
    let mut app = App::new(store, theme, load_rx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.poll_load();

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
