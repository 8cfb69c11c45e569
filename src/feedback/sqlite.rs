use super::FeedbackStore;
use crate::{db, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

// Embedded-table backing, same contract as the flat file. The unique index on
// email backs up the duplicate check at the storage layer.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        let mut conn = db::open_connection(path)?;
        db::migration::run(&mut conn)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = Connection::open_in_memory()?;
        db::migration::run(&mut conn)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }
}

impl FeedbackStore for SqliteStore {
    fn find(&self, email: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let row = db::feedback::queries::select_by_email(email, &conn)?;
        Ok(row.map(|it| it.feedback))
    }

    fn append(&self, email: &str, feedback: &str) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        db::feedback::queries::insert(email, feedback, &conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::feedback::{FeedbackStore, SqliteStore};
    use crate::{Error, Result};

    #[test]
    fn round_trip() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        store.append("a@b.com", "great trip")?;
        assert_eq!(Some("great trip".into()), store.find("a@b.com")?);
        assert_eq!(None, store.find("c@d.com")?);
        Ok(())
    }

    #[test]
    fn one_entry_per_email() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        super::super::submit(&store, "a@b.com", "great trip")?;
        assert!(matches!(
            super::super::submit(&store, "a@b.com", "again"),
            Err(Error::DuplicateFeedback(_))
        ));
        Ok(())
    }

    #[test]
    fn duplicate_append_rejected_by_storage() -> Result<()> {
        let store = SqliteStore::open_in_memory()?;
        store.append("a@b.com", "first")?;
        assert!(store.append("a@b.com", "second").is_err());
        Ok(())
    }
}
