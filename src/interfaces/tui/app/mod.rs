//! App state definition and basic state management

mod link_operations;
mod navigation;
mod transient;

pub use transient::Transient;

use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::config::{AppConfig, UiConfig};
use crate::errors::Result;
use crate::interfaces::tui::clipboard::{ClipboardSink, SystemClipboard};
use crate::interfaces::tui::theme::Theme;
use crate::services::LinkService;
use crate::storage::{LinkEntry, LinkRepository, StorageFactory};
use crate::system::{NoopLauncher, SystemLauncher, UrlLauncher};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Help,
    Exiting,
}

/// 键盘焦点：输入框或链接列表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Editing,
    Browsing,
}

pub struct App {
    pub service: LinkService,
    pub current_screen: CurrentScreen,
    pub input_mode: InputMode,

    // Form state
    pub url_input: String,

    // UI state
    pub dark_mode: bool,
    pub selected_index: usize,
    pub table_state: TableState,
    pub error: Transient<String>,
    pub notice: Transient<String>,
    pub copied_index: Transient<usize>,

    clipboard: Box<dyn ClipboardSink>,
    launcher: Arc<dyn UrlLauncher>,
}

impl App {
    pub async fn new(config: &AppConfig) -> Result<App> {
        let store = StorageFactory::create(&config.storage).await?;
        let repository = LinkRepository::new(store, config.storage.key.clone());
        let service = LinkService::load(repository, config.links.clone()).await?;

        let launcher: Arc<dyn UrlLauncher> = if config.ui.open_on_visit {
            Arc::new(SystemLauncher)
        } else {
            Arc::new(NoopLauncher)
        };

        Ok(Self::with_parts(
            &config.ui,
            service,
            Box::new(SystemClipboard::new()),
            launcher,
        ))
    }

    /// Assemble an app from already-built parts.
    pub fn with_parts(
        ui: &UiConfig,
        service: LinkService,
        clipboard: Box<dyn ClipboardSink>,
        launcher: Arc<dyn UrlLauncher>,
    ) -> App {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        App {
            service,
            current_screen: CurrentScreen::Main,
            input_mode: InputMode::Editing,
            url_input: String::new(),
            dark_mode: ui.dark_mode,
            selected_index: 0,
            table_state,
            error: Transient::new(Duration::from_millis(ui.error_display_ms)),
            notice: Transient::new(Duration::from_millis(ui.error_display_ms)),
            copied_index: Transient::new(Duration::from_millis(ui.copied_feedback_ms)),
            clipboard,
            launcher,
        }
    }

    pub fn links(&self) -> &[LinkEntry] {
        self.service.links()
    }

    pub fn get_selected_link(&self) -> Option<&LinkEntry> {
        self.service.get(self.selected_index)
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.dark_mode)
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copied_index.get() == Some(&index)
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error.set(message.into(), Instant::now());
        self.notice.clear();
    }

    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice.set(message.into(), Instant::now());
    }

    /// Expire transient flags. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let error = self.error.expire(now);
        let notice = self.notice.expire(now);
        let copied = self.copied_index.expire(now);
        error || notice || copied
    }

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Browsing;
    }

    pub fn clear_input(&mut self) {
        self.url_input.clear();
    }
}
