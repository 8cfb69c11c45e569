use super::schema;
use super::schema::Columns;
use super::schema::FeedbackRow;
use crate::Result;
use rusqlite::params;
use rusqlite::Connection;
use rusqlite::OptionalExtension;

pub fn insert(email: &str, feedback: &str, conn: &Connection) -> Result<FeedbackRow> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({email}, {feedback})
            VALUES (?1, ?2)
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        email = Columns::Email.as_str(),
        feedback = Columns::Feedback.as_str(),
        projection = FeedbackRow::projection(),
    );
    conn.query_row(&sql, params![email, feedback], FeedbackRow::mapper())
        .map_err(Into::into)
}

pub fn select_by_email(email: &str, conn: &Connection) -> Result<Option<FeedbackRow>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {email} = ?1
        "#,
        projection = FeedbackRow::projection(),
        table = schema::TABLE_NAME,
        email = Columns::Email.as_str(),
    );
    conn.query_row(&sql, params![email], FeedbackRow::mapper())
        .optional()
        .map_err(Into::into)
}

#[cfg(test)]
mod test {
    use crate::db::test::conn;
    use crate::Result;

    #[test]
    fn insert() -> Result<()> {
        let conn = conn();
        let row = super::insert("a@b.com", "great trip", &conn)?;
        assert_eq!("a@b.com", row.email);
        assert_eq!("great trip", row.feedback);
        Ok(())
    }

    #[test]
    fn insert_duplicate_email() -> Result<()> {
        let conn = conn();
        super::insert("a@b.com", "first", &conn)?;
        assert!(super::insert("a@b.com", "second", &conn).is_err());
        Ok(())
    }

    #[test]
    fn select_by_email() -> Result<()> {
        let conn = conn();
        assert!(super::select_by_email("a@b.com", &conn)?.is_none());
        super::insert("a@b.com", "great trip", &conn)?;
        let row = super::select_by_email("a@b.com", &conn)?.unwrap();
        assert_eq!("great trip", row.feedback);
        Ok(())
    }
}
