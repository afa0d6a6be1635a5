//! Navigation and selection logic

use super::App;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn move_selection_down(&mut self) {
        let len = self.service.len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_bottom(&mut self) {
        let len = self.service.len();
        if len > 0 {
            self.selected_index = len - 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.table_state.select(Some(self.selected_index));
    }

    pub fn page_down(&mut self) {
        let max_index = self.service.len().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.table_state.select(Some(self.selected_index));
    }
}
