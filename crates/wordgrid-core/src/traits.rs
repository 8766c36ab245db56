use crate::WordGridResult;

/// Flat, string-valued key-value storage.
///
/// Every call is synchronous and durable by the time it returns. Reads never
/// fail: a backend that cannot produce a value reports it as absent.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: String) -> WordGridResult<()>;

    /// Delete `key` entirely. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> WordGridResult<()>;

    /// Whether a value exists under `key`
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> WordGridResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> WordGridResult<()> {
        (**self).remove(key)
    }
}
