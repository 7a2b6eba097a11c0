//! Append-only mood entry storage.
//!
//! Entries are inserted one at a time and removed only in bulk. Every
//! mutation runs in its own transaction together with the re-read of the full
//! entry list; it commits only if that snapshot was read, and the snapshot is
//! published before the connection lock is released, so snapshots arrive in
//! the same order as the writes that produced them.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Transaction};
use std::sync::Arc;
use tokio::sync::watch;

use super::database::Database;
use crate::entry::{Mood, MoodEntry};
use crate::error::DatabaseError;

/// Immutable view of every entry, newest first.
pub type EntrySnapshot = Arc<[MoodEntry]>;

/// Durable collection of mood entries.
#[derive(Clone)]
pub struct EntryStore {
    db: Database,
    tx: Arc<watch::Sender<EntrySnapshot>>,
}

impl EntryStore {
    /// Create a store over `db` and load the initial snapshot.
    ///
    /// # Errors
    /// Returns an error if the existing entries cannot be read.
    pub async fn new(db: Database) -> Result<Self, DatabaseError> {
        let initial = db.call(|conn| select_all(conn)).await?;
        let (tx, _rx) = watch::channel::<EntrySnapshot>(initial.into());
        Ok(Self {
            db,
            tx: Arc::new(tx),
        })
    }

    /// Record a new entry stamped with the current time.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert(&self, mood: Mood, note: &str) -> Result<MoodEntry, DatabaseError> {
        self.insert_at(mood, note, Utc::now()).await
    }

    /// Record a new entry with an explicit timestamp.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_at(
        &self,
        mood: Mood,
        note: &str,
        at: DateTime<Utc>,
    ) -> Result<MoodEntry, DatabaseError> {
        let note = note.to_string();
        let timestamp = at.timestamp_millis();
        let tx = Arc::clone(&self.tx);
        let entry = self
            .db
            .call(move |conn| {
                let txn = conn.transaction()?;
                txn.execute(
                    "INSERT INTO mood_entries (mood, note, timestamp) VALUES (?1, ?2, ?3)",
                    params![i64::from(mood), note, timestamp],
                )?;
                let entry = MoodEntry {
                    id: txn.last_insert_rowid(),
                    mood,
                    note,
                    timestamp,
                };
                commit_and_publish(txn, &tx)?;
                Ok(entry)
            })
            .await?;
        tracing::debug!(id = entry.id, mood = %entry.mood, "recorded mood entry");
        Ok(entry)
    }

    /// All entries ordered by timestamp, newest first.
    ///
    /// Entries sharing a timestamp are ordered by id, newest first.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_all(&self) -> Result<Vec<MoodEntry>, DatabaseError> {
        self.db.call(|conn| select_all(conn)).await
    }

    /// Number of stored entries.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count(&self) -> Result<usize, DatabaseError> {
        self.db
            .call(|conn| {
                let n: i64 = conn.query_row("SELECT COUNT(*) FROM mood_entries", [], |row| {
                    row.get(0)
                })?;
                Ok(n as usize)
            })
            .await
    }

    /// Remove every entry. Returns how many rows were deleted.
    ///
    /// # Errors
    /// Returns an error if the delete fails; in that case no entry is removed.
    pub async fn delete_all(&self) -> Result<usize, DatabaseError> {
        let tx = Arc::clone(&self.tx);
        let deleted = self
            .db
            .call(move |conn| {
                let txn = conn.transaction()?;
                let deleted = txn.execute("DELETE FROM mood_entries", [])?;
                commit_and_publish(txn, &tx)?;
                Ok(deleted)
            })
            .await?;
        tracing::debug!(deleted, "deleted all mood entries");
        Ok(deleted)
    }

    /// Subscribe to entry snapshots.
    ///
    /// The receiver starts with the latest snapshot marked as seen and is
    /// notified after every insert or delete.
    pub fn subscribe(&self) -> watch::Receiver<EntrySnapshot> {
        self.tx.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> EntrySnapshot {
        Arc::clone(&self.tx.borrow())
    }
}

/// Read the post-mutation snapshot, then commit and publish it.
///
/// If the snapshot cannot be read the transaction is dropped, which rolls
/// the mutation back, and nothing is published.
fn commit_and_publish(
    txn: Transaction<'_>,
    tx: &watch::Sender<EntrySnapshot>,
) -> Result<(), DatabaseError> {
    let entries = select_all(&txn)?;
    txn.commit()?;
    tx.send_replace(entries.into());
    Ok(())
}

fn select_all(conn: &Connection) -> Result<Vec<MoodEntry>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, mood, note, timestamp
         FROM mood_entries
         ORDER BY timestamp DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i64>(3)?,
        ))
    })?;

    let mut entries = Vec::new();
    for row in rows {
        let (id, mood, note, timestamp) = row?;
        let mood = Mood::new(mood).map_err(|e| {
            DatabaseError::QueryFailed(format!("corrupt mood_entries row {id}: {e}"))
        })?;
        entries.push(MoodEntry {
            id,
            mood,
            note,
            timestamp,
        });
    }
    Ok(entries)
}
