// src/store/memory.rs
use std::collections::HashMap;

use serde_json::Value;

use super::KvStore;
use crate::error::Result;

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, Value>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.map.insert(s!(key), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.map.remove(key);
        Ok(())
    }
}
