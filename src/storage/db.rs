use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection, OptionalExtension, Result};

/// Default diamond balance for a newly created user.
pub const DEFAULT_DIAMONDS: i64 = 0;
/// Default energy for a newly created user. Energy is stored and returned
/// but never mutated by any operation.
pub const DEFAULT_ENERGY: i64 = 100;
/// Default cosmetic style.
pub const DEFAULT_STYLE: &str = "nika";
/// Default interface language.
pub const DEFAULT_LANGUAGE: &str = "Русский";

/// A user row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Telegram user id (externally supplied, primary key)
    pub user_id: i64,
    /// Diamond balance
    pub diamonds: i64,
    /// Energy (inert: never decremented or capped in scope)
    pub energy: i64,
    /// Cosmetic style identifier
    pub style: String,
    /// Interface language
    pub language: String,
}

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Create a new database connection pool
///
/// Initializes a connection pool with up to 10 connections and runs schema
/// migrations on the first connection.
///
/// # Arguments
///
/// * `database_path` - Path to SQLite database file
pub fn create_pool(database_path: &str) -> anyhow::Result<DbPool> {
    let manager = SqliteConnectionManager::file(database_path);
    let pool = Pool::builder()
        .max_size(10) // Maximum 10 connections in the pool
        .build(manager)?;

    let mut conn = pool.get()?;
    super::migrations::run_migrations(&mut conn)?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// The connection is automatically returned to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, r2d2::Error> {
    pool.get()
}

/// Create the user row with default values if it does not exist yet.
///
/// Uses INSERT OR IGNORE, so a concurrent first access or a repeat call is
/// a no-op rather than a duplicate-key error.
pub fn ensure_user(conn: &Connection, user_id: i64) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO users (user_id, diamonds, energy, style, language) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![user_id, DEFAULT_DIAMONDS, DEFAULT_ENERGY, DEFAULT_STYLE, DEFAULT_LANGUAGE],
    )?;
    Ok(())
}

/// Fetch a user row by id.
///
/// # Returns
///
/// `Ok(Some(User))` if the row exists, `Ok(None)` otherwise.
pub fn get_user(conn: &Connection, user_id: i64) -> Result<Option<User>> {
    conn.query_row(
        "SELECT user_id, diamonds, energy, style, language FROM users WHERE user_id = ?1",
        params![user_id],
        |row| {
            Ok(User {
                user_id: row.get(0)?,
                diamonds: row.get(1)?,
                energy: row.get(2)?,
                style: row.get(3)?,
                language: row.get(4)?,
            })
        },
    )
    .optional()
}

/// Overwrite the user's style. No validation against a known set of styles.
pub fn set_style(conn: &Connection, user_id: i64, style: &str) -> Result<()> {
    conn.execute(
        "UPDATE users SET style = ?1 WHERE user_id = ?2",
        params![style, user_id],
    )?;
    Ok(())
}

/// Overwrite the user's language. No validation against the supported set.
pub fn set_language(conn: &Connection, user_id: i64, language: &str) -> Result<()> {
    conn.execute(
        "UPDATE users SET language = ?1 WHERE user_id = ?2",
        params![language, user_id],
    )?;
    Ok(())
}

/// Add `delta` diamonds to the user's balance. `delta` may be negative.
pub fn adjust_diamonds(conn: &Connection, user_id: i64, delta: i64) -> Result<()> {
    conn.execute(
        "UPDATE users SET diamonds = diamonds + ?1 WHERE user_id = ?2",
        params![delta, user_id],
    )?;
    Ok(())
}

/// Current diamond balance of an existing user.
pub fn diamond_balance(conn: &Connection, user_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT diamonds FROM users WHERE user_id = ?1",
        params![user_id],
        |row| row.get(0),
    )
}

/// Append one purchase record. The purchase log has no uniqueness
/// constraint: repeat purchases of the same item each get their own row.
pub fn append_purchase(conn: &Connection, user_id: i64, item: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO purchases (user_id, item) VALUES (?1, ?2)",
        params![user_id, item],
    )?;
    Ok(())
}

/// Number of purchase records for a user (optionally for one item).
pub fn purchase_count(conn: &Connection, user_id: i64, item: Option<&str>) -> Result<i64> {
    match item {
        Some(item) => conn.query_row(
            "SELECT COUNT(*) FROM purchases WHERE user_id = ?1 AND item = ?2",
            params![user_id, item],
            |row| row.get(0),
        ),
        None => conn.query_row(
            "SELECT COUNT(*) FROM purchases WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        ),
    }
}
