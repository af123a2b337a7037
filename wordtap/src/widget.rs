use dictionary::{DictionaryError, Word};

/// Tag attached to a submitted lookup so late responses can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LookupId(u64);

/// A lookup the widget wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub id: LookupId,
    pub word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer lookup was submitted after this one, so its result was dropped.
    Stale,
}

/// State of the lookup widget: the search field and the outcome of the
/// most recent lookup. At most one of `definition` and `error` is set.
#[derive(Debug, Default)]
pub struct LookupWidget {
    word: String,
    definition: Option<Word>,
    error: Option<String>,
    pending: Option<LookupId>,
    next_id: u64,
}

impl LookupWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> Option<&Word> {
        self.definition.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_word(&mut self, word: impl Into<String>) {
        self.word = word.into();
    }

    /// Starts a lookup for the current word. Returns `None` and leaves the
    /// state untouched when the word is empty.
    pub fn submit(&mut self) -> Option<LookupRequest> {
        if self.word.is_empty() {
            return None;
        }
        self.definition = None;
        self.error = None;
        let id = LookupId(self.next_id);
        self.next_id += 1;
        self.pending = Some(id);
        Some(LookupRequest {
            id,
            word: self.word.clone(),
        })
    }

    pub fn resolve(&mut self, id: LookupId, result: Result<Word, DictionaryError>) -> Resolution {
        if self.pending != Some(id) {
            return Resolution::Stale;
        }
        self.pending = None;
        match result {
            Ok(word) => self.definition = Some(word),
            Err(error) => self.error = Some(error.to_string()),
        }
        Resolution::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(name: &str) -> Word {
        Word {
            word: name.to_owned(),
            phonetic: None,
            phonetics: Vec::new(),
            origin: None,
            meanings: Vec::new(),
        }
    }

    fn failure(message: &str) -> DictionaryError {
        DictionaryError::InvalidEndpoint(message.to_owned())
    }

    fn assert_exclusive(widget: &LookupWidget) {
        assert!(!(widget.definition().is_some() && widget.error().is_some()));
    }

    #[test]
    fn empty_word_is_a_no_op() {
        let mut widget = LookupWidget::new();
        widget.set_word("cat");
        let request = widget.submit().unwrap();
        widget.resolve(request.id, Ok(word("cat")));

        widget.set_word("");
        assert_eq!(widget.submit(), None);
        assert_eq!(widget.definition().map(|w| w.word.as_str()), Some("cat"));
        assert!(!widget.is_pending());
    }

    #[test]
    fn success_sets_definition() {
        let mut widget = LookupWidget::new();
        widget.set_word("cat");
        let request = widget.submit().unwrap();
        assert_eq!(request.word, "cat");
        assert!(widget.is_pending());

        assert_eq!(widget.resolve(request.id, Ok(word("cat"))), Resolution::Applied);
        assert_eq!(widget.definition().map(|w| w.word.as_str()), Some("cat"));
        assert_eq!(widget.error(), None);
        assert!(!widget.is_pending());
    }

    #[test]
    fn failure_sets_error_message() {
        let mut widget = LookupWidget::new();
        widget.set_word("cat");
        let request = widget.submit().unwrap();
        widget.resolve(request.id, Err(failure("boom")));
        assert_eq!(widget.error(), Some("invalid dictionary endpoint: boom"));
        assert_eq!(widget.definition(), None);
    }

    #[test]
    fn submit_clears_previous_error_before_resolving() {
        let mut widget = LookupWidget::new();
        widget.set_word("qwzx");
        let request = widget.submit().unwrap();
        widget.resolve(request.id, Err(failure("boom")));
        assert!(widget.error().is_some());

        widget.set_word("cat");
        widget.submit().unwrap();
        assert_eq!(widget.error(), None);
        assert_eq!(widget.definition(), None);
    }

    #[test]
    fn stale_results_are_dropped() {
        let mut widget = LookupWidget::new();
        widget.set_word("cat");
        let first = widget.submit().unwrap();
        widget.set_word("dog");
        let second = widget.submit().unwrap();
        assert_ne!(first.id, second.id);

        assert_eq!(widget.resolve(second.id, Ok(word("dog"))), Resolution::Applied);
        assert_eq!(widget.resolve(first.id, Ok(word("cat"))), Resolution::Stale);
        assert_eq!(widget.definition().map(|w| w.word.as_str()), Some("dog"));
    }

    #[test]
    fn stale_result_does_not_resolve_newer_lookup() {
        let mut widget = LookupWidget::new();
        widget.set_word("cat");
        let first = widget.submit().unwrap();
        widget.set_word("dog");
        let second = widget.submit().unwrap();

        assert_eq!(widget.resolve(first.id, Err(failure("late"))), Resolution::Stale);
        assert!(widget.is_pending());
        assert_eq!(widget.error(), None);

        widget.resolve(second.id, Ok(word("dog")));
        assert!(!widget.is_pending());
    }

    #[test]
    fn definition_and_error_stay_exclusive() {
        let mut widget = LookupWidget::new();
        for (index, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
            widget.set_word(name);
            let request = widget.submit().unwrap();
            assert_exclusive(&widget);
            let result = if index % 2 == 0 {
                Ok(word(name))
            } else {
                Err(failure(name))
            };
            widget.resolve(request.id, result);
            assert_exclusive(&widget);
        }
    }
}
