//! Document records for the off-chain mirror.
//!
//! The backing store is schemaless: a document is an arbitrary JSON object.
//! Rather than trusting that shape implicitly, every record is validated at
//! the read boundary — required fields must be present with the right type,
//! optional fields get explicit defaults, and anything malformed surfaces as
//! a `Validation` error instead of a silent zero or panic.

use crate::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Characters Firestore-style stores reject in document IDs.
const FORBIDDEN_ID_CHARS: [char; 6] = ['/', '.', '#', '$', '[', ']'];

/// Replaces characters that are invalid in document IDs with underscores.
///
/// Wallet addresses are embedded in like-document IDs, so they pass through
/// this before use as a key.
pub fn sanitize_wallet(wallet: &str) -> String {
    wallet
        .chars()
        .map(|c| if FORBIDDEN_ID_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// The deterministic like-document ID for a (sound, wallet) pair.
///
/// One ID per pair is what makes the duplicate-like check a unique-key insert.
pub fn like_doc_id(sound_id: &str, wallet: &str) -> String {
    format!("{}_{}", sound_id, sanitize_wallet(wallet))
}

/// A sound entry in the mirror store.
///
/// Unlike the on-chain model, a creator may own any number of sounds here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundRecord {
    pub id: String,
    pub title: String,
    /// Display color; empty when the document never carried one.
    #[serde(default)]
    pub color: String,
    pub creator_wallet: String,
    pub file_url: String,
    /// Optional discovery category.
    #[serde(default)]
    pub category_id: Option<String>,
    /// Current like count; defaults to zero for documents written before the
    /// field existed.
    #[serde(default)]
    pub likes: u64,
    pub created_at: Option<DateTime<Utc>>,
}

impl SoundRecord {
    /// Validates a loose document into a record.
    pub fn from_doc(id: &str, doc: &Value) -> Result<Self> {
        let obj = doc
            .as_object()
            .ok_or_else(|| ClientError::Validation(format!("sound {id}: not an object")))?;

        let title = required_str(obj, id, "title")?;
        let creator_wallet = required_str(obj, id, "creatorWallet")?;
        let file_url = required_str(obj, id, "fileUrl")?;
        let color = optional_str(obj, "color").unwrap_or_default();
        let category_id = optional_str(obj, "categoryId");
        let likes = match obj.get("likes") {
            None | Some(Value::Null) => 0,
            Some(v) => v.as_u64().ok_or_else(|| {
                ClientError::Validation(format!("sound {id}: likes is not a non-negative integer"))
            })?,
        };
        let created_at = optional_timestamp(obj, id, "createdAt")?;

        Ok(Self {
            id: id.to_string(),
            title,
            color,
            creator_wallet,
            file_url,
            category_id,
            likes,
            created_at,
        })
    }
}

/// A like record, one per (sound, wallet) pair.
///
/// The creation timestamp drives the daily quota window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRecord {
    pub button_id: String,
    pub user_wallet: String,
    pub created_at: DateTime<Utc>,
}

impl LikeRecord {
    pub fn from_doc(id: &str, doc: &Value) -> Result<Self> {
        let obj = doc
            .as_object()
            .ok_or_else(|| ClientError::Validation(format!("like {id}: not an object")))?;

        let button_id = required_str(obj, id, "buttonId")?;
        let user_wallet = required_str(obj, id, "userWallet")?;
        let created_at = optional_timestamp(obj, id, "createdAt")?.ok_or_else(|| {
            ClientError::Validation(format!("like {id}: missing createdAt"))
        })?;

        Ok(Self {
            button_id,
            user_wallet,
            created_at,
        })
    }
}

fn required_str(
    obj: &serde_json::Map<String, Value>,
    id: &str,
    field: &str,
) -> Result<String> {
    match obj.get(field).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ClientError::Validation(format!(
            "document {id}: missing or empty field {field}"
        ))),
    }
}

fn optional_str(obj: &serde_json::Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn optional_timestamp(
    obj: &serde_json::Map<String, Value>,
    id: &str,
    field: &str,
) -> Result<Option<DateTime<Utc>>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => s
            .parse::<DateTime<Utc>>()
            .map(Some)
            .map_err(|e| ClientError::Validation(format!("document {id}: bad {field}: {e}"))),
        Some(_) => Err(ClientError::Validation(format!(
            "document {id}: {field} is not a timestamp string"
        ))),
    }
}
