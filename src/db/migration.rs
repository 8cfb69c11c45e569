use crate::Result;
use include_dir::include_dir;
use include_dir::Dir;
use rusqlite::Connection;
use tracing::info;
use tracing::warn;

static MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migrations");

struct Migration(i16, String);

pub fn run(db: &mut Connection) -> Result<()> {
    execute_migrations(&get_migrations()?, db)
}

fn get_migrations() -> Result<Vec<Migration>> {
    let mut index = 1;
    let mut res = vec![];

    while let Some(file) = MIGRATIONS_DIR.get_file(format!("{index}.sql")) {
        let sql = file
            .contents_utf8()
            .ok_or(format!("Can't read {index}.sql in UTF-8"))?;
        res.push(Migration(index, sql.to_string()));
        index += 1;
    }

    Ok(res)
}

fn execute_migrations(migrations: &[Migration], db: &mut Connection) -> Result<()> {
    let mut schema_ver: i16 =
        db.query_row("SELECT user_version FROM pragma_user_version", [], |row| {
            row.get(0)
        })?;

    for migration in migrations.iter().filter(|it| it.0 > schema_ver) {
        warn!(version = migration.0, "Found new migration");
        let tx = db.transaction()?;
        tx.execute_batch(&migration.1)?;
        tx.execute_batch(&format!("PRAGMA user_version={}", migration.0))?;
        tx.commit()?;
        schema_ver = migration.0;
    }

    info!(schema_ver, "Database schema is up to date");

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::Result;
    use rusqlite::Connection;

    #[test]
    fn execute_migrations() -> Result<()> {
        let mut conn = Connection::open_in_memory()?;
        let mut migrations = vec![super::Migration(1, "CREATE TABLE foo(bar);".into())];
        super::execute_migrations(&migrations, &mut conn)?;
        let schema_ver: i16 =
            conn.query_row("SELECT user_version FROM pragma_user_version", [], |row| {
                row.get(0)
            })?;
        assert_eq!(1, schema_ver);
        migrations.push(super::Migration(
            2,
            "INSERT INTO foo (bar) values ('qwerty');".into(),
        ));
        super::execute_migrations(&migrations, &mut conn)?;
        let schema_ver: i16 =
            conn.query_row("SELECT user_version FROM pragma_user_version", [], |row| {
                row.get(0)
            })?;
        assert_eq!(2, schema_ver);
        Ok(())
    }
}
