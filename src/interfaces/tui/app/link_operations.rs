//! Link operations: shorten, visit, copy

use std::time::Instant;

use tracing::warn;

use super::App;
use crate::errors::MinilinkerError;

impl App {
    /// Shorten whatever is in the input field.
    ///
    /// Validation errors keep the input so it can be fixed; anything else
    /// happens after the entry was added, so the input is cleared either way.
    pub async fn shorten_input(&mut self) {
        let input = self.url_input.clone();
        match self.service.shorten(&input).await {
            Ok(entry) => {
                self.clear_input();
                self.after_prepend();
                self.set_notice(format!("Created {}", entry.short));
            }
            Err(MinilinkerError::Validation(message)) => {
                self.set_error(message);
            }
            Err(e) => {
                self.clear_input();
                self.after_prepend();
                self.set_error(format!("Failed to save links: {}", e.message()));
            }
        }
    }

    /// Count a click on the selected entry and open its original URL.
    pub async fn visit_selected(&mut self) {
        let index = self.selected_index;
        if self.service.get(index).is_none() {
            return;
        }

        let saved = match self.service.visit(index).await {
            Ok(_) => true,
            Err(e) => {
                self.set_error(format!("Failed to save links: {}", e.message()));
                false
            }
        };

        let Some(original) = self.service.get(index).map(|link| link.original.clone()) else {
            return;
        };
        match self.launcher.open(&original) {
            Ok(()) if saved => self.set_notice(format!("Opened {}", original)),
            Ok(()) => {}
            Err(e) => self.set_error(e.format_simple()),
        }
    }

    /// Copy the selected entry's short link to the clipboard.
    pub fn copy_selected(&mut self) {
        let index = self.selected_index;
        let Some(short) = self.service.get(index).map(|link| link.short.clone()) else {
            return;
        };

        match self.clipboard.set_text(&short) {
            Ok(()) => self.copied_index.set(index, Instant::now()),
            Err(e) => {
                warn!("Copy failed: {}", e);
                self.set_error(e.format_simple());
            }
        }
    }

    /// A new entry went to the top: select it and keep the "Copied" mark on
    /// the entry it belonged to.
    fn after_prepend(&mut self) {
        if let Some(index) = self.copied_index.get_mut() {
            *index += 1;
        }
        self.jump_to_top();
    }
}
