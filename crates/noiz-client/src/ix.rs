//! Instruction builders for the button program.
//!
//! `create_button` validates its inputs before building anything, so malformed
//! metadata is rejected client-side instead of burning a transaction fee on a
//! guaranteed on-chain failure.

use crate::error::{ClientError, Result};
use crate::pda::{derive_button_address, derive_like_address};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_lang::{system_program, InstructionData, ToAccountMetas};
use button_program::constants::{MAX_COLOR_LEN, MAX_SOUND_URI_LEN, MAX_TITLE_LEN};

/// Metadata for a new button.
#[derive(Debug, Clone)]
pub struct CreateButtonArgs {
    pub title: String,
    pub color: String,
    pub sound_uri: String,
}

impl CreateButtonArgs {
    fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(ClientError::Validation("title must not be empty".into()));
        }
        if self.title.len() > MAX_TITLE_LEN {
            return Err(ClientError::Validation(format!(
                "title exceeds {MAX_TITLE_LEN} bytes"
            )));
        }
        if self.color.len() > MAX_COLOR_LEN {
            return Err(ClientError::Validation(format!(
                "color exceeds {MAX_COLOR_LEN} bytes"
            )));
        }
        if self.sound_uri.is_empty() {
            return Err(ClientError::Validation("sound URI must not be empty".into()));
        }
        if self.sound_uri.len() > MAX_SOUND_URI_LEN {
            return Err(ClientError::Validation(format!(
                "sound URI exceeds {MAX_SOUND_URI_LEN} bytes"
            )));
        }
        Ok(())
    }
}

/// Builds a `create_button` instruction.
///
/// The button address is derived from the creator; both the fee payer and the
/// creator must sign the resulting transaction.
pub fn create_button(
    fee_payer: &Pubkey,
    creator: &Pubkey,
    admin_wallet: &Pubkey,
    args: &CreateButtonArgs,
) -> Result<Instruction> {
    args.validate()?;
    let (button, _) = derive_button_address(creator);
    let accounts = button_program::accounts::CreateButton {
        fee_payer: *fee_payer,
        button,
        creator: *creator,
        admin_wallet: *admin_wallet,
        system_program: system_program::ID,
    };
    let data = button_program::instruction::CreateButton {
        title: args.title.clone(),
        color: args.color.clone(),
        sound_uri: args.sound_uri.clone(),
    };
    Ok(Instruction {
        program_id: button_program::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    })
}

/// Builds a `like_button` instruction.
///
/// The button address is re-derived from the target button's creator and the
/// like address from the (button, user) pair. Both the fee payer and the user
/// must sign the resulting transaction.
pub fn like_button(fee_payer: &Pubkey, user: &Pubkey, creator: &Pubkey) -> Instruction {
    let (button, _) = derive_button_address(creator);
    let (like, _) = derive_like_address(&button, user);
    let accounts = button_program::accounts::LikeButton {
        fee_payer: *fee_payer,
        button,
        like,
        user: *user,
        creator: *creator,
        system_program: system_program::ID,
    };
    let data = button_program::instruction::LikeButton {};
    Instruction {
        program_id: button_program::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}
