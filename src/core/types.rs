use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type MovieId = u64;

/// Open attribute set of a movie (title, year, genres, ...).
pub type MovieData = serde_json::Map<String, Value>;

/// Reserved key; a record's id is owned by the store.
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(flatten)]
    pub fields: MovieData,
}

impl Movie {
    /// Build a record from caller data. A caller-supplied `id` key is discarded.
    pub fn new(id: MovieId, mut fields: MovieData) -> Self {
        fields.remove(ID_FIELD);
        Self { id, fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }

    /// Overwrite the fields present in `patch`; everything else keeps its value.
    pub fn merge(&mut self, patch: MovieData) {
        for (key, value) in patch {
            if key == ID_FIELD {
                continue;
            }
            self.fields.insert(key, value);
        }
    }

    /// Returns a copy of the fields with `id` included, as rendered to callers.
    pub fn to_json(&self) -> Value {
        let mut object = MovieData::new();
        object.insert(ID_FIELD.to_string(), Value::from(self.id));
        object.extend(self.fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        Value::Object(object)
    }
}

/// Result of a successful delete, echoing the removed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub id: MovieId,
}
