use rusqlite::Row;

pub const TABLE_NAME: &str = "feedback";

pub enum Columns {
    Id,
    Email,
    Feedback,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::Email => "email",
            Columns::Feedback => "feedback",
        }
    }
}

pub struct FeedbackRow {
    pub id: i64,
    pub email: String,
    pub feedback: String,
}

impl FeedbackRow {
    pub fn projection() -> String {
        [Columns::Id, Columns::Email, Columns::Feedback]
            .iter()
            .map(Columns::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn mapper() -> fn(&Row) -> rusqlite::Result<FeedbackRow> {
        |row: &Row| -> rusqlite::Result<FeedbackRow> {
            Ok(FeedbackRow {
                id: row.get(0)?,
                email: row.get(1)?,
                feedback: row.get(2)?,
            })
        }
    }
}
