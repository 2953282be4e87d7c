use crate::search::{Effect, SearchController, SearchEvent, SearchOutcome};

mod state;
pub use state::TextInput;

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,

    // Query input and the search state machine driven by it
    pub search_input: TextInput,
    pub search: SearchController,

    // Highlighted row in the result list
    pub selected_index: usize,

    // Spinner shown while a search is in flight
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            status_message: None,
            search_input: TextInput::new(),
            search: SearchController::new(),
            selected_index: 0,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn search_input_char(&mut self, c: char) -> Option<Effect> {
        self.search_input.insert(c);
        self.query_changed()
    }

    pub fn search_input_backspace(&mut self) -> Option<Effect> {
        let before = self.search_input.value.len();
        self.search_input.backspace();
        if self.search_input.value.len() == before {
            return None;
        }
        self.query_changed()
    }

    pub fn search_input_clear(&mut self) -> Option<Effect> {
        if self.search_input.value.is_empty() {
            return None;
        }
        self.search_input.clear();
        self.query_changed()
    }

    pub fn search_move_cursor(&mut self, left: bool) {
        if left {
            self.search_input.move_left();
        } else {
            self.search_input.move_right();
        }
    }

    pub fn search_cursor_home_end(&mut self, home: bool) {
        if home {
            self.search_input.home();
        } else {
            self.search_input.end();
        }
    }

    fn query_changed(&mut self) -> Option<Effect> {
        self.selected_index = 0;
        self.status_message = None;
        self.search
            .update(SearchEvent::QueryChanged(self.search_input.value.clone()))
    }

    /// Feed a settled search back into the controller.
    pub fn search_completed(&mut self, seq: u64, outcome: SearchOutcome) {
        self.search.update(SearchEvent::Completed { seq, outcome });
        let len = self.search.results().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        let len = self.search.results().len();
        if len > 0 {
            self.selected_index = (self.selected_index + 1) % len;
        }
    }

    pub fn select_previous(&mut self) {
        let len = self.search.results().len();
        if len > 0 {
            self.selected_index = (self.selected_index + len - 1) % len;
        }
    }

    /// Activate the highlighted profile, if any.
    pub fn activate_selected(&mut self) -> Option<Effect> {
        let fid = self.search.results().get(self.selected_index)?.fid;
        self.search.update(SearchEvent::ProfileSelected { fid })
    }
}
