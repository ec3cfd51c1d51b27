/// All database primary keys are 64-bit integers (SQLite INTEGER).
pub type DbId = i64;

/// Calendar date without a time component (release dates).
pub type Date = chrono::NaiveDate;
