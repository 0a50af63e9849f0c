use hashbrown::HashMap;

use crate::error::LexiconError;

/// Insertion-ordered table mapping strings to dense `u32` ids.
///
/// Ids are assigned once, in insertion order, and never reused or
/// renumbered. On disk the table is the sequence of strings in id order.
#[derive(Debug, Clone, Default)]
pub struct IdTable {
    values: Vec<String>,
    ids: HashMap<String, u32>,
}

impl IdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `value`, assigning the next free id if it is new.
    pub fn intern(&mut self, value: &str) -> u32 {
        if let Some(&id) = self.ids.get(value) {
            return id;
        }

        let id = self.values.len() as u32;
        self.values.push(value.to_string());
        self.ids.insert(value.to_string(), id);
        id
    }

    pub fn id(&self, value: &str) -> Option<u32> {
        self.ids.get(value).copied()
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.values.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Strings in id order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Rebuild a table from strings stored in id order.
    ///
    /// Duplicates would make ids ambiguous and are rejected.
    pub fn from_values(values: Vec<String>) -> Result<Self, LexiconError> {
        let mut ids = HashMap::with_capacity(values.len());

        for (id, value) in values.iter().enumerate() {
            if ids.insert(value.clone(), id as u32).is_some() {
                return Err(LexiconError::Corrupt(format!(
                    "duplicate id table entry {value:?}"
                )));
            }
        }

        Ok(Self { values, ids })
    }
}
