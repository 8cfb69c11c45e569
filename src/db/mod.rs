pub mod feedback;
pub mod migration;

use crate::Result;
use rusqlite::Connection;
use std::path::Path;

pub fn open_connection(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(conn)
}

#[cfg(test)]
mod test {
    pub(super) fn conn() -> rusqlite::Connection {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        crate::db::migration::run(&mut conn).unwrap();
        conn
    }
}
