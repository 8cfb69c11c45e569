pub mod aggregate;
pub mod coords;
pub mod landmarks;
pub mod loader;
pub mod schema;

use self::schema::RawRecord;

// Loaded once at startup and never mutated, views recompute from it on every
// request
pub struct Dataset {
    pub records: Vec<RawRecord>,
}
