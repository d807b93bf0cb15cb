use serde::Serialize;
use serde_json::{Map, Value};

/// One-shot key/value context for the next record.
///
/// Keys are kept sorted. Values are anything [`Serialize`]; if one of them
/// fails to serialize, the whole set is dropped from the record it is
/// attached to, and the record itself is still written.
///
/// ```
/// use tintlog::Fields;
///
/// let fields = Fields::new().with("name", "tauqeer").with("retries", 3);
/// assert_eq!(fields.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields {
    map: Map<String, Value>,
    poisoned: bool,
}

impl Fields {
    /// Empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Fields::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds or replaces `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Serialize) {
        match serde_json::to_value(value) {
            Ok(v) => {
                self.map.insert(key.into(), v);
            }
            Err(_) => self.poisoned = true,
        }
    }

    /// Number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` when there is nothing to emit
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The map to attach to a record, or `None` when empty or a value
    /// could not be serialized.
    pub(crate) fn renderable(&self) -> Option<&Map<String, Value>> {
        if self.poisoned || self.map.is_empty() {
            None
        } else {
            Some(&self.map)
        }
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            map,
            poisoned: false,
        }
    }
}

impl<K: Into<String>, V: Serialize> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl<K: Into<String>, V: Serialize, const N: usize> From<[(K, V); N]> for Fields {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
