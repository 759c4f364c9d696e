//! In-memory mirror of the sound/like document store.
//!
//! This is the off-chain side of the protocol: many sounds per creator,
//! unlike supported, and the daily bolt quota enforced before a like is
//! admitted. Duplicate-like protection works the same way as on-chain — the
//! like-document ID is deterministic per (sound, wallet), so a second like is
//! a unique-key collision, and concurrent attempts resolve with exactly one
//! winner.
//!
//! All mutations go through one interior lock; the quota count is recomputed
//! from the live like log on every observation and never cached.

use crate::docs::{like_doc_id, sanitize_wallet, LikeRecord, SoundRecord};
use crate::error::{ClientError, Result};
use crate::quota::{BoltStatus, DayBoundary, MAX_BOLTS_PER_DAY};
use crate::watch::{Broadcaster, ChangeEvent, Subscription, WatchFilter};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

/// Metadata for a new sound entry.
#[derive(Debug, Clone)]
pub struct NewSound {
    pub title: String,
    pub color: String,
    pub file_url: String,
    pub creator_wallet: String,
    pub category_id: Option<String>,
}

#[derive(Default)]
struct Inner {
    sounds: HashMap<String, SoundRecord>,
    /// Keyed by the deterministic like-document ID.
    likes: BTreeMap<String, LikeRecord>,
    next_sound_seq: u64,
}

/// The mirror store.
pub struct SoundMirror {
    inner: Mutex<Inner>,
    broadcaster: Broadcaster,
    day_boundary: DayBoundary,
}

impl Default for SoundMirror {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundMirror {
    /// A mirror with the default UTC day boundary.
    pub fn new() -> Self {
        Self::with_day_boundary(DayBoundary::Utc)
    }

    pub fn with_day_boundary(day_boundary: DayBoundary) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            broadcaster: Broadcaster::new(),
            day_boundary,
        }
    }

    /// Registers a change listener; see [`crate::watch`].
    pub fn subscribe(&self, filter: WatchFilter) -> Subscription {
        self.broadcaster.subscribe(filter)
    }

    /// Adds a sound entry. Creators may add any number of sounds.
    pub fn add_sound(&self, sound: NewSound, now: DateTime<Utc>) -> Result<SoundRecord> {
        if sound.title.is_empty() {
            return Err(ClientError::Validation("title must not be empty".into()));
        }
        if sound.file_url.is_empty() {
            return Err(ClientError::Validation("file URL must not be empty".into()));
        }
        if sound.creator_wallet.is_empty() {
            return Err(ClientError::Validation(
                "creator wallet must not be empty".into(),
            ));
        }

        let mut inner = self.lock();
        inner.next_sound_seq += 1;
        let id = format!("snd-{}", inner.next_sound_seq);
        let record = SoundRecord {
            id: id.clone(),
            title: sound.title,
            color: sound.color,
            creator_wallet: sound.creator_wallet,
            file_url: sound.file_url,
            category_id: sound.category_id,
            likes: 0,
            created_at: Some(now),
        };
        inner.sounds.insert(id.clone(), record.clone());
        drop(inner);

        tracing::info!(sound_id = %id, "sound added");
        self.broadcaster
            .publish(&ChangeEvent::SoundAdded { sound_id: id });
        Ok(record)
    }

    /// Ingests a loose document, validating it at the read boundary.
    pub fn insert_sound_doc(&self, id: &str, doc: &Value) -> Result<SoundRecord> {
        let record = SoundRecord::from_doc(id, doc)?;
        let mut inner = self.lock();
        if inner.sounds.contains_key(id) {
            return Err(ClientError::AlreadyExists(format!("sound {id}")));
        }
        inner.sounds.insert(id.to_string(), record.clone());
        drop(inner);

        self.broadcaster.publish(&ChangeEvent::SoundAdded {
            sound_id: id.to_string(),
        });
        Ok(record)
    }

    pub fn get_sound(&self, sound_id: &str) -> Result<SoundRecord> {
        self.lock()
            .sounds
            .get(sound_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("sound {sound_id}")))
    }

    /// All sounds, newest first, optionally limited to one category.
    pub fn sounds(&self, category_id: Option<&str>) -> Vec<SoundRecord> {
        let inner = self.lock();
        let mut sounds: Vec<SoundRecord> = inner
            .sounds
            .values()
            .filter(|s| category_id.is_none_or(|c| s.category_id.as_deref() == Some(c)))
            .cloned()
            .collect();
        sounds.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        sounds
    }

    /// Likes a sound, spending one bolt.
    ///
    /// The quota is checked before the like is admitted, so the sixth like of
    /// the day is rejected without touching the store. Returns the wallet's
    /// bolt status after the like.
    pub fn like(&self, sound_id: &str, wallet: &str, now: DateTime<Utc>) -> Result<BoltStatus> {
        validate_like_inputs(sound_id, wallet)?;
        let wallet = sanitize_wallet(wallet);
        let doc_id = like_doc_id(sound_id, &wallet);

        let likes = {
            let mut inner = self.lock();
            if !inner.sounds.contains_key(sound_id) {
                return Err(ClientError::NotFound(format!("sound {sound_id}")));
            }

            let used = count_likes_since(&inner, &wallet, self.day_boundary.start_of_day(now));
            if used >= MAX_BOLTS_PER_DAY {
                tracing::warn!(%wallet, "like rejected, daily quota exhausted");
                return Err(ClientError::QuotaExhausted);
            }

            // Unique-key insert on the deterministic ID: the duplicate-like
            // check and the admission are one atomic step under the lock.
            if inner.likes.contains_key(&doc_id) {
                return Err(ClientError::AlreadyExists(format!("like {doc_id}")));
            }
            inner.likes.insert(
                doc_id,
                LikeRecord {
                    button_id: sound_id.to_string(),
                    user_wallet: wallet.clone(),
                    created_at: now,
                },
            );

            let sound = inner
                .sounds
                .get_mut(sound_id)
                .ok_or_else(|| ClientError::NotFound(format!("sound {sound_id}")))?;
            sound.likes += 1;
            sound.likes
        };

        tracing::info!(sound_id, %wallet, likes, "sound liked");
        self.broadcaster.publish(&ChangeEvent::LikeAdded {
            sound_id: sound_id.to_string(),
            wallet: wallet.clone(),
        });
        self.broadcaster.publish(&ChangeEvent::LikeCountChanged {
            sound_id: sound_id.to_string(),
            likes,
        });
        self.bolt_status(&wallet, now)
    }

    /// Removes a like. The bolt is credited back immediately: the like record
    /// disappears from the day's count.
    pub fn unlike(&self, sound_id: &str, wallet: &str) -> Result<()> {
        validate_like_inputs(sound_id, wallet)?;
        let wallet = sanitize_wallet(wallet);
        let doc_id = like_doc_id(sound_id, &wallet);

        let likes = {
            let mut inner = self.lock();
            if inner.likes.remove(&doc_id).is_none() {
                return Err(ClientError::NotFound(format!("like {doc_id}")));
            }
            let sound = inner
                .sounds
                .get_mut(sound_id)
                .ok_or_else(|| ClientError::NotFound(format!("sound {sound_id}")))?;
            sound.likes = sound.likes.saturating_sub(1);
            sound.likes
        };

        tracing::info!(sound_id, %wallet, likes, "sound unliked");
        self.broadcaster.publish(&ChangeEvent::LikeRemoved {
            sound_id: sound_id.to_string(),
            wallet,
        });
        self.broadcaster.publish(&ChangeEvent::LikeCountChanged {
            sound_id: sound_id.to_string(),
            likes,
        });
        Ok(())
    }

    /// The wallet's bolt usage for the day containing `now`.
    ///
    /// Recomputed from the like log on every call; crossing the day boundary
    /// restores the full quota with no stored state.
    pub fn bolt_status(&self, wallet: &str, now: DateTime<Utc>) -> Result<BoltStatus> {
        if wallet.is_empty() {
            return Err(ClientError::Validation("wallet must not be empty".into()));
        }
        let wallet = sanitize_wallet(wallet);
        let inner = self.lock();
        let used = count_likes_since(&inner, &wallet, self.day_boundary.start_of_day(now));
        Ok(BoltStatus::from_used(used))
    }

    /// Whether the wallet has liked the sound.
    pub fn has_liked(&self, sound_id: &str, wallet: &str) -> bool {
        let doc_id = like_doc_id(sound_id, &sanitize_wallet(wallet));
        self.lock().likes.contains_key(&doc_id)
    }

    /// Every like record for the wallet, oldest first.
    pub fn user_likes(&self, wallet: &str) -> Vec<LikeRecord> {
        let wallet = sanitize_wallet(wallet);
        let mut likes: Vec<LikeRecord> = self
            .lock()
            .likes
            .values()
            .filter(|l| l.user_wallet == wallet)
            .cloned()
            .collect();
        likes.sort_by_key(|l| l.created_at);
        likes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("mirror store poisoned")
    }
}

fn validate_like_inputs(sound_id: &str, wallet: &str) -> Result<()> {
    if sound_id.is_empty() {
        return Err(ClientError::Validation("sound id must not be empty".into()));
    }
    if wallet.is_empty() {
        return Err(ClientError::Validation("wallet must not be empty".into()));
    }
    Ok(())
}

fn count_likes_since(inner: &Inner, wallet: &str, since: DateTime<Utc>) -> u32 {
    inner
        .likes
        .values()
        .filter(|l| l.user_wallet == wallet && l.created_at >= since)
        .count() as u32
}
