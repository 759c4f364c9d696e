use anchor_lang::prelude::*;
use instructions::*;

// Program ID declaration
declare_id!("4gp48UbcjNvWP9iqVL5WJ2Aj1g3jy1zLanjRvRx9JHXS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

/// The main program module for the Noiz button protocol.
///
/// Buttons are per-creator sound entries addressed by a PDA derived from the
/// creator's key, so each creator owns exactly one button. Likes are marker
/// accounts addressed by a PDA derived from the button and user keys; the
/// deterministic address makes "at most one like per (button, user)" a
/// storage-layer guarantee rather than an application check — concurrent like
/// attempts for the same pair resolve with exactly one success.
///
/// Core functionalities:
/// - Creating a button with bounded metadata and a fixed creation fee paid to
///   an admin wallet (`create_button`).
/// - One-shot liking with a checked counter increment (`like_button`).
///
/// # Security
/// - Both the creator (on creation) and the user (on like) must sign.
/// - PDA derivation ties every account to its seeds; a mismatched creator or
///   user cannot address someone else's button or like.
/// - Events are emitted for both mutations for off-chain traceability.
#[program]
pub mod button_program {
    use super::*;

    /// Creates a button and transfers the creation fee to the admin wallet.
    ///
    /// Delegates to `create_button::create_button`.
    /// Emits a `ButtonCreated` event upon success.
    ///
    /// # Arguments
    /// - `ctx`: Context for `CreateButton`.
    /// - `title`: Display title of the button.
    /// - `color`: Display color of the button.
    /// - `sound_uri`: URI of the sound played when the button is pressed.
    pub fn create_button(
        ctx: Context<CreateButton>,
        title: String,
        color: String,
        sound_uri: String,
    ) -> Result<()> {
        create_button::create_button(ctx, title, color, sound_uri)
    }

    /// Likes a button and increments its like counter.
    ///
    /// Delegates to `like_button::like_button`.
    /// Emits a `ButtonLiked` event upon success.
    ///
    /// # Arguments
    /// - `ctx`: Context for `LikeButton`.
    pub fn like_button(ctx: Context<LikeButton>) -> Result<()> {
        like_button::like_button(ctx)
    }
}
