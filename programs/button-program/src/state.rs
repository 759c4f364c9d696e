use crate::constants::{MAX_COLOR_LEN, MAX_SOUND_URI_LEN, MAX_TITLE_LEN};
use anchor_lang::prelude::*;

/// A creator's sound button.
///
/// Seeded with `"button"` and the creator's key, so each creator owns at most
/// one button. The creator field is set once at creation and never changes;
/// the like counter is the only field mutated afterwards.
#[account]
#[derive(InitSpace)]
pub struct Button {
    /// Display title shown on the button
    #[max_len(MAX_TITLE_LEN)]
    pub title: String,
    /// Display color of the button
    #[max_len(MAX_COLOR_LEN)]
    pub color: String,
    /// The account that created the button, immutable after creation
    pub creator: Pubkey,
    /// URI of the sound played when the button is pressed
    #[max_len(MAX_SOUND_URI_LEN)]
    pub sound_uri: String,
    /// Number of like accounts created against this button
    pub number_of_likes: u64,
    /// PDA bump seed for account derivation
    pub bump: u8,
}

/// Marker account recording that a user has liked a button.
///
/// Seeded with `"like"`, the button key, and the user key. The account's
/// existence is the "has liked" flag; attempting to like twice fails at
/// account creation because the derived address is already initialized.
#[account]
#[derive(InitSpace)]
pub struct Like {
    /// PDA bump seed for account derivation
    pub bump: u8,
}
