//! Append-only conversation record.

use crate::{Role, Turn};

/// Ordered conversation turns. Insertion order is the only order; turns
/// are never edited, removed, or reordered.
#[derive(Debug, Clone)]
pub struct MessageHistory {
    turns: Vec<Turn>,
}

impl MessageHistory {
    /// Start a history holding exactly one assistant greeting.
    pub fn seeded(greeting: impl Into<String>) -> Self {
        Self {
            turns: vec![Turn::assistant(greeting)],
        }
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::assistant(text));
    }

    /// Read-only view for presentation.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false for a seeded history.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of turns authored by `role`.
    pub fn count(&self, role: Role) -> usize {
        self.turns.iter().filter(|t| t.role() == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_single_greeting() {
        let history = MessageHistory::seeded("Hi! How can I help you today?");
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert_eq!(
            history.all(),
            &[Turn::assistant("Hi! How can I help you today?")]
        );
    }

    #[test]
    fn appends_preserve_order() {
        let mut history = MessageHistory::seeded("hello");
        history.append_user("first");
        history.append_assistant("reply");
        history.append_user("second");

        let contents: Vec<&str> = history.all().iter().map(Turn::content).collect();
        assert_eq!(contents, vec!["hello", "first", "reply", "second"]);
        assert_eq!(history.last(), Some(&Turn::user("second")));
    }

    #[test]
    fn earlier_turns_are_untouched_by_appends() {
        let mut history = MessageHistory::seeded("hello");
        history.append_user("question");
        let before = history.all().to_vec();

        history.append_assistant("answer");
        assert_eq!(&history.all()[..before.len()], before.as_slice());
    }

    #[test]
    fn counts_by_role() {
        let mut history = MessageHistory::seeded("hello");
        history.append_user("a");
        history.append_assistant("b");
        assert_eq!(history.count(Role::User), 1);
        assert_eq!(history.count(Role::Assistant), 2);
    }
}
