//! Ordered key/value views of an entity's current state.
//!
//! A [`Snapshot`] keeps insertion order so terminal output reads the same
//! way every run. Inserting an existing key replaces its value in place,
//! which is what lets a variant layer its own fields over a base snapshot.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Text(text) => write!(f, "{text}"),
            Field::Int(n) => write!(f, "{n}"),
            Field::Float(x) => write!(f, "{x:.2}"),
            Field::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Float(value)
    }
}

impl From<bool> for Field {
    fn from(value: bool) -> Self {
        Field::Bool(value)
    }
}

macro_rules! int_field {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Field {
                fn from(value: $t) -> Self {
                    Field::Int(value as i64)
                }
            }
        )*
    };
}

int_field!(u8, u16, u32, u64, usize, i32, i64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<(String, Field)>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Snapshot::insert`].
    pub fn with(mut self, key: &str, value: impl Into<Field>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Field>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Layers `other` on top of `self`. Keys present in both take `other`'s value.
    pub fn merge(mut self, other: Snapshot) -> Self {
        for (key, value) in other.entries {
            self.insert(&key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
