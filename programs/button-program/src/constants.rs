/// PDA seeds used throughout the program for account derivation
pub mod seeds {
    /// Seed for button accounts, paired with the creator's key
    pub const BUTTON: &[u8] = b"button";

    /// Seed for like accounts, paired with the button and user keys
    pub const LIKE: &[u8] = b"like";
}

/// Maximum encoded length of a button title in bytes
pub const MAX_TITLE_LEN: usize = 25;

/// Maximum encoded length of a button color in bytes
pub const MAX_COLOR_LEN: usize = 20;

/// Maximum encoded length of a sound URI in bytes
pub const MAX_SOUND_URI_LEN: usize = 150;

/// Fixed fee transferred from the creator to the admin wallet on
/// button creation (0.002 SOL)
pub const CREATE_BUTTON_FEE_LAMPORTS: u64 = 2_000_000;
