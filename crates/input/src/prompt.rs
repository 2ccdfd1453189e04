//! Single-line name entry used to change the player between games.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Longest accepted name, in characters
pub const MAX_NAME_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    Editing,
    /// Enter was pressed. The text may be blank.
    Submitted(String),
    /// Esc or Ctrl-C
    Cancelled,
}

/// Text buffer for the player-name box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePrompt {
    text: String,
}

impl NamePrompt {
    /// Start editing from the current name, if any.
    pub fn new(initial: Option<&str>) -> Self {
        Self {
            text: initial.unwrap_or_default().chars().take(MAX_NAME_LEN).collect(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply one key to the buffer.
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        if key.kind == KeyEventKind::Release {
            return PromptOutcome::Editing;
        }
        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c' | 'C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                PromptOutcome::Cancelled
            }
            KeyCode::Esc => PromptOutcome::Cancelled,
            KeyCode::Enter => PromptOutcome::Submitted(self.text.clone()),
            KeyCode::Backspace => {
                self.text.pop();
                PromptOutcome::Editing
            }
            KeyCode::Char(c)
                if !chord && !c.is_control() && self.text.chars().count() < MAX_NAME_LEN =>
            {
                self.text.push(c);
                PromptOutcome::Editing
            }
            _ => PromptOutcome::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(prompt: &mut NamePrompt, s: &str) {
        for c in s.chars() {
            assert_eq!(
                prompt.handle_key(KeyEvent::from(KeyCode::Char(c))),
                PromptOutcome::Editing
            );
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut prompt = NamePrompt::new(None);
        type_str(&mut prompt, "Grace q");
        assert_eq!(prompt.text(), "Grace q");
        assert_eq!(
            prompt.handle_key(KeyEvent::from(KeyCode::Enter)),
            PromptOutcome::Submitted("Grace q".to_string())
        );
    }

    #[test]
    fn test_starts_from_current_name_and_backspace() {
        let mut prompt = NamePrompt::new(Some("ada"));
        prompt.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(prompt.text(), "ad");

        for _ in 0..5 {
            prompt.handle_key(KeyEvent::from(KeyCode::Backspace));
        }
        assert_eq!(prompt.text(), "");
        assert_eq!(
            prompt.handle_key(KeyEvent::from(KeyCode::Enter)),
            PromptOutcome::Submitted(String::new())
        );
    }

    #[test]
    fn test_cancel_keys() {
        let mut prompt = NamePrompt::new(Some("ada"));
        assert_eq!(
            prompt.handle_key(KeyEvent::from(KeyCode::Esc)),
            PromptOutcome::Cancelled
        );
        assert_eq!(
            prompt.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            PromptOutcome::Cancelled
        );
        assert_eq!(prompt.text(), "ada");
    }

    #[test]
    fn test_name_length_is_capped() {
        let mut prompt = NamePrompt::new(Some(&"x".repeat(30)));
        assert_eq!(prompt.text().chars().count(), MAX_NAME_LEN);

        type_str(&mut prompt, "yz");
        assert_eq!(prompt.text(), "x".repeat(MAX_NAME_LEN));
    }

    #[test]
    fn test_chords_and_releases_do_not_type() {
        let mut prompt = NamePrompt::new(None);
        prompt.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT));
        prompt.handle_key(KeyEvent {
            kind: KeyEventKind::Release,
            ..KeyEvent::from(KeyCode::Char('b'))
        });
        prompt.handle_key(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT));
        assert_eq!(prompt.text(), "C");
    }
}
