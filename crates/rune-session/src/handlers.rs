use tracing::{debug, debug_span};

use super::types::{EditEvent, SessionResponse, MAX_INPUT_CHARS};
use super::ConverterSession;

impl ConverterSession {
    /// Apply an edit and return the refreshed rendering.
    pub fn handle(&mut self, event: EditEvent) -> SessionResponse {
        let _span = debug_span!("handle", ?event).entered();

        let (changed, truncated) = match event {
            EditEvent::Insert(s) => self.insert(&s),
            EditEvent::Backspace => (self.backspace(), false),
            EditEvent::Clear => {
                let changed = !self.text.is_empty();
                self.text.clear();
                (changed, false)
            }
            EditEvent::Replace(s) => self.replace(&s),
        };

        if changed {
            self.refresh();
        }
        if truncated {
            debug!(limit = MAX_INPUT_CHARS, "input truncated");
        }
        self.make_response(changed, truncated)
    }

    fn insert(&mut self, s: &str) -> (bool, bool) {
        let room = MAX_INPUT_CHARS.saturating_sub(self.char_count);
        let before = self.text.len();
        self.text.extend(s.chars().take(room));
        let truncated = s.chars().count() > room;
        (self.text.len() != before, truncated)
    }

    fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    fn replace(&mut self, s: &str) -> (bool, bool) {
        let new: String = s.chars().take(MAX_INPUT_CHARS).collect();
        let truncated = new.len() < s.len();
        let changed = new != self.text;
        self.text = new;
        (changed, truncated)
    }
}
