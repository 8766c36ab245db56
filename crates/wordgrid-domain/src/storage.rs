//! Store keys and the text encoding of structured values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;
use wordgrid_core::{KeyValueStore, WordGridResult};

pub const ROWS: &str = "rows";
pub const COLS: &str = "cols";
pub const CELL_WIDTH: &str = "cellWidth";
pub const CELL_HEIGHT: &str = "cellHeight";
pub const THEME_MODE: &str = "themeMode";
pub const TODO_LIST: &str = "todoList";
pub const GRID_DATA: &str = "gridData";

/// Decode a JSON value, treating absence and corruption alike as the default
pub fn read_json_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(text) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str::<Option<T>>(&text) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Ignoring malformed value under '{}': {}", key, e);
            T::default()
        }
    }
}

pub fn write_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> WordGridResult<()> {
    let text = serde_json::to_string(value)?;
    store.set(key, text)
}

/// Parse a stored number, falling back to `default` when absent or garbled
pub fn read_number<T: FromStr>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    match store.get(key) {
        Some(text) => text.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring non-numeric value under '{}': {:?}", key, text);
            default
        }),
        None => default,
    }
}

/// Write several keys as one unit. If a write fails, the keys already written
/// get their previous values back before the error is returned.
pub fn write_batch(store: &mut dyn KeyValueStore, writes: &[(&str, String)]) -> WordGridResult<()> {
    let previous: Vec<Option<String>> = writes.iter().map(|(key, _)| store.get(key)).collect();

    for (done, (key, value)) in writes.iter().enumerate() {
        if let Err(e) = store.set(key, value.clone()) {
            for ((key, _), old) in writes[..done].iter().zip(&previous) {
                let restored = match old {
                    Some(old) => store.set(key, old.clone()),
                    None => store.remove(key),
                };
                if let Err(restore_err) = restored {
                    tracing::warn!("Could not restore '{}': {}", key, restore_err);
                }
            }
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridData;
    use wordgrid_persistence::MemoryStore;

    #[test]
    fn test_missing_json_is_default() {
        let store = MemoryStore::new();
        let todos: Vec<String> = read_json_or_default(&store, TODO_LIST);
        assert!(todos.is_empty());
    }

    #[test]
    fn test_malformed_json_is_default() {
        let store: MemoryStore = [(TODO_LIST, "[\"unterminated"), (GRID_DATA, "42")]
            .into_iter()
            .collect();
        let todos: Vec<String> = read_json_or_default(&store, TODO_LIST);
        let grid: GridData = read_json_or_default(&store, GRID_DATA);
        assert!(todos.is_empty());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_json_null_is_default() {
        let store: MemoryStore = [(TODO_LIST, "null")].into_iter().collect();
        let todos: Vec<String> = read_json_or_default(&store, TODO_LIST);
        assert!(todos.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = MemoryStore::new();
        write_json(&mut store, TODO_LIST, &["💡a", "💡b"]).unwrap();
        assert_eq!(store.get(TODO_LIST).as_deref(), Some(r#"["💡a","💡b"]"#));

        let todos: Vec<String> = read_json_or_default(&store, TODO_LIST);
        assert_eq!(todos, vec!["💡a".to_string(), "💡b".to_string()]);
    }

    /// Rejects every write to one key
    struct FlakyStore {
        inner: MemoryStore,
        failing_key: &'static str,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: String) -> WordGridResult<()> {
            if key == self.failing_key {
                return Err(wordgrid_core::WordGridError::Internal("disk full".into()));
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> WordGridResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_write_batch_writes_every_key() {
        let mut store = MemoryStore::new();
        write_batch(&mut store, &[(ROWS, "3".into()), (COLS, "4".into())]).unwrap();
        assert_eq!(store.get(ROWS).as_deref(), Some("3"));
        assert_eq!(store.get(COLS).as_deref(), Some("4"));
    }

    #[test]
    fn test_write_batch_restores_earlier_keys_on_failure() {
        let mut store = FlakyStore {
            inner: [(ROWS, "10")].into_iter().collect(),
            failing_key: CELL_WIDTH,
        };
        let result = write_batch(
            &mut store,
            &[(ROWS, "3".into()), (COLS, "4".into()), (CELL_WIDTH, "30".into())],
        );

        assert!(result.is_err());
        assert_eq!(store.get(ROWS).as_deref(), Some("10"));
        assert_eq!(store.get(COLS), None);
        assert_eq!(store.get(CELL_WIDTH), None);
    }

    #[test]
    fn test_read_number() {
        let store: MemoryStore = [(ROWS, "12"), (COLS, "twelve")].into_iter().collect();
        assert_eq!(read_number(&store, ROWS, 25usize), 12);
        assert_eq!(read_number(&store, COLS, 25usize), 25);
        assert_eq!(read_number(&store, CELL_WIDTH, 25u32), 25);
    }
}
