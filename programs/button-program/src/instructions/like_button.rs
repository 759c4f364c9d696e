use crate::constants::seeds;
use crate::error::ButtonProgramError;
use crate::events::ButtonLiked;
use crate::state::{Button, Like};
use anchor_lang::prelude::*;

/// Account structure for liking a button.
///
/// The like PDA is derived from the button and user keys, so there is at most
/// one like account per (button, user) pair. A second like attempt by the same
/// user fails when the runtime refuses to re-initialize the derived address;
/// that collision is the double-like guard.
///
/// # Preconditions
/// - The `button` account must exist.
/// - The `like` account must not exist prior to execution.
#[derive(Accounts)]
pub struct LikeButton<'info> {
    /// Funds the like account's rent.
    #[account(mut)]
    pub fee_payer: Signer<'info>,

    /// The button being liked, re-derived from the creator's key.
    #[account(
        mut,
        seeds = [seeds::BUTTON, creator.key().as_ref()],
        bump = button.bump
    )]
    pub button: Account<'info, Button>,

    /// The like marker account; its existence records the like.
    #[account(
        init,
        payer = fee_payer,
        space = 8 + Like::INIT_SPACE,
        seeds = [seeds::LIKE, button.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub like: Account<'info, Like>,

    /// The user liking the button.
    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: Only used as a seed to re-derive the button address.
    pub creator: UncheckedAccount<'info>,

    /// Solana System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Likes a button: creates the like marker and increments the button's counter.
///
/// There is no reverse instruction; on-chain likes are one-shot.
///
/// # Arguments
/// - `ctx`: Context for `LikeButton`.
///
/// # Errors
/// - Fails if the like PDA is already initialized (the user already liked).
/// - Fails if the button does not exist.
/// - `Overflow` if the like counter would wrap.
pub fn like_button(ctx: Context<LikeButton>) -> Result<()> {
    let like = &mut ctx.accounts.like;
    like.bump = ctx.bumps.like;

    let button = &mut ctx.accounts.button;
    button.number_of_likes = button
        .number_of_likes
        .checked_add(1)
        .ok_or(ButtonProgramError::Overflow)?;

    emit!(ButtonLiked {
        button: button.key(),
        user: ctx.accounts.user.key(),
        number_of_likes: button.number_of_likes,
    });

    Ok(())
}
