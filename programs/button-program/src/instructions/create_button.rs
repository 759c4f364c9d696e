use crate::constants::{
    seeds, CREATE_BUTTON_FEE_LAMPORTS, MAX_COLOR_LEN, MAX_SOUND_URI_LEN, MAX_TITLE_LEN,
};
use crate::error::ButtonProgramError;
use crate::events::ButtonCreated;
use crate::state::Button;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Account structure for creating a button.
///
/// The button PDA is derived from the creator's key alone, so a second
/// creation attempt by the same creator fails at initialization.
///
/// # Preconditions
/// - The `button` account must not exist prior to execution.
/// - The creator must hold at least `CREATE_BUTTON_FEE_LAMPORTS`.
#[derive(Accounts)]
pub struct CreateButton<'info> {
    /// Funds the button account's rent.
    #[account(mut)]
    pub fee_payer: Signer<'info>,

    /// The button account, initialized with the provided metadata.
    ///
    /// # Note
    /// - Space is `8 + Button::INIT_SPACE` bytes, where 8 bytes are for the discriminator.
    /// - Seeded with `"button"` and the creator's key.
    #[account(
        init,
        payer = fee_payer,
        space = 8 + Button::INIT_SPACE,
        seeds = [seeds::BUTTON, creator.key().as_ref()],
        bump
    )]
    pub button: Account<'info, Button>,

    /// The creator of the button; pays the creation fee.
    #[account(mut)]
    pub creator: Signer<'info>,

    /// CHECK: Receives the creation fee, no data is read or written.
    #[account(mut)]
    pub admin_wallet: UncheckedAccount<'info>,

    /// Solana System program for account creation and the fee transfer.
    pub system_program: Program<'info, System>,
}

/// Creates a button and transfers the fixed creation fee to the admin wallet.
///
/// Validates the metadata string bounds, initializes the button with a zero
/// like counter, and moves `CREATE_BUTTON_FEE_LAMPORTS` from the creator to
/// the admin wallet. The instruction is atomic: if the fee cannot be paid or
/// any bound is exceeded, no state is left behind.
///
/// # Arguments
/// - `ctx`: Context for `CreateButton`.
/// - `title`: Display title, at most `MAX_TITLE_LEN` bytes.
/// - `color`: Display color, at most `MAX_COLOR_LEN` bytes.
/// - `sound_uri`: Sound URI, at most `MAX_SOUND_URI_LEN` bytes.
///
/// # Errors
/// - `InvalidInput` if any string exceeds its bound.
/// - `InsufficientFunds` if the creator cannot cover the fee.
/// - Fails if the button PDA is already initialized (duplicate creation).
pub fn create_button(
    ctx: Context<CreateButton>,
    title: String,
    color: String,
    sound_uri: String,
) -> Result<()> {
    require!(title.len() <= MAX_TITLE_LEN, ButtonProgramError::InvalidInput);
    require!(color.len() <= MAX_COLOR_LEN, ButtonProgramError::InvalidInput);
    require!(
        sound_uri.len() <= MAX_SOUND_URI_LEN,
        ButtonProgramError::InvalidInput
    );

    let button = &mut ctx.accounts.button;
    button.title = title;
    button.color = color;
    button.creator = ctx.accounts.creator.key();
    button.sound_uri = sound_uri;
    button.number_of_likes = 0;
    button.bump = ctx.bumps.button;

    require!(
        ctx.accounts.creator.lamports() >= CREATE_BUTTON_FEE_LAMPORTS,
        ButtonProgramError::InsufficientFunds
    );

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.admin_wallet.to_account_info(),
            },
        ),
        CREATE_BUTTON_FEE_LAMPORTS,
    )?;

    emit!(ButtonCreated {
        button: ctx.accounts.button.key(),
        creator: ctx.accounts.creator.key(),
        admin_wallet: ctx.accounts.admin_wallet.key(),
        fee_lamports: CREATE_BUTTON_FEE_LAMPORTS,
    });

    Ok(())
}
