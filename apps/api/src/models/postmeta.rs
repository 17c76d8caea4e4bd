use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the WordPress `postmeta` table: `(record_id, field_key, raw_value)`.
/// Both key and value columns are nullable in the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PostmetaRow {
    pub post_id: u64,
    pub meta_key: Option<String>,
    pub meta_value: Option<String>,
}

impl PostmetaRow {
    #[cfg(test)]
    pub fn new(post_id: u64, meta_key: &str, meta_value: &str) -> Self {
        Self {
            post_id,
            meta_key: Some(meta_key.to_string()),
            meta_value: Some(meta_value.to_string()),
        }
    }

    /// Key and value, or `None` when either is NULL or the value is empty.
    /// Such rows carry nothing and are skipped before classification.
    pub fn field(&self) -> Option<(&str, &str)> {
        let key = self.meta_key.as_deref()?;
        let value = self.meta_value.as_deref().filter(|v| !v.is_empty())?;
        Some((key, value))
    }
}
