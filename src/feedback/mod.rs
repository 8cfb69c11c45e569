mod flat_file;
mod sqlite;

pub use flat_file::FlatFileStore;
pub use sqlite::SqliteStore;

use crate::{Error, Result};
use regex::Regex;
use std::sync::{LazyLock, Mutex};

// Minimal key-value contract over the feedback backing. Which backing sits
// behind it (flat file or embedded table) is a deployment detail.
pub trait FeedbackStore {
    // Exact-match lookup, returns the stored feedback text if the email was
    // seen before
    fn find(&self, email: &str) -> Result<Option<String>>;

    fn append(&self, email: &str, feedback: &str) -> Result<()>;
}

// One lock per process serializes the find-then-append sequence. Submissions
// from separate processes sharing a backing can still race on it.
pub type SharedStore = Mutex<Box<dyn FeedbackStore + Send>>;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").unwrap()
});

// Validation failures return before the backing is touched at all. A
// previously seen email fails with DuplicateFeedback carrying the stored
// text, so callers can show it.
pub fn submit(store: &dyn FeedbackStore, email: &str, feedback: &str) -> Result<()> {
    if !EMAIL.is_match(email) {
        return Err(Error::InvalidEmail(format!("Invalid email address: {email}")));
    }
    // The line format can't round-trip these
    if feedback.contains(':') || feedback.contains('\n') {
        return Err(Error::InvalidInput(
            "Feedback can't contain ':' or line breaks".into(),
        ));
    }
    if let Some(previous) = store.find(email)? {
        return Err(Error::DuplicateFeedback(previous));
    }
    store.append(email, feedback)
}

#[cfg(test)]
mod test {
    use super::{FeedbackStore, FlatFileStore};
    use crate::test::temp_path;
    use crate::{Error, Result};

    #[test]
    fn submit() -> Result<()> {
        let store = FlatFileStore::new(temp_path("submit"));
        super::submit(&store, "a@b.com", "great trip")?;
        assert_eq!(Some("great trip".into()), store.find("a@b.com")?);
        Ok(())
    }

    #[test]
    fn submit_twice() -> Result<()> {
        let store = FlatFileStore::new(temp_path("submit_twice"));
        super::submit(&store, "a@b.com", "great trip")?;
        let res = super::submit(&store, "a@b.com", "changed my mind");
        match res {
            Err(Error::DuplicateFeedback(previous)) => assert_eq!("great trip", previous),
            other => panic!("Expected DuplicateFeedback, got {other:?}"),
        }
        assert_eq!(Some("great trip".into()), store.find("a@b.com")?);
        Ok(())
    }

    #[test]
    fn submit_invalid_email() -> Result<()> {
        let path = temp_path("submit_invalid_email");
        let store = FlatFileStore::new(&path);
        assert!(matches!(
            super::submit(&store, "not-an-email", "hello"),
            Err(Error::InvalidEmail(_))
        ));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn submit_feedback_with_separator() -> Result<()> {
        let path = temp_path("submit_feedback_with_separator");
        let store = FlatFileStore::new(&path);
        assert!(matches!(
            super::submit(&store, "a@b.com", "rating: 5/5"),
            Err(Error::InvalidInput(_))
        ));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn email_pattern() {
        assert!(super::EMAIL.is_match("a@b.com"));
        assert!(super::EMAIL.is_match("first.last+tag@mail-host.co.uk"));
        assert!(!super::EMAIL.is_match("not-an-email"));
        assert!(!super::EMAIL.is_match("missing@dot"));
        assert!(!super::EMAIL.is_match("two@at@signs.com"));
    }
}
