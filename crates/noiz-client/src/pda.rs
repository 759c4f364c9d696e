//! Deterministic address derivation for buttons and likes.
//!
//! These mirror the seeds the on-chain program uses; any client that derives
//! different addresses from the same identities is broken at the protocol
//! level, so both functions delegate to the same seed constants the program
//! compiles against.

use anchor_lang::solana_program::pubkey::Pubkey;
use button_program::constants::seeds;

/// Derives the button address for a creator.
///
/// Pure and deterministic: the same creator always yields the same address
/// under the program's namespace, which is what limits each creator to a
/// single button.
pub fn derive_button_address(creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::BUTTON, creator.as_ref()], &button_program::ID)
}

/// Derives the like address for a (button, user) pair.
///
/// At most one like account can exist per pair; the address collision on a
/// second attempt is the double-like guard.
pub fn derive_like_address(button: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::LIKE, button.as_ref(), user.as_ref()],
        &button_program::ID,
    )
}
