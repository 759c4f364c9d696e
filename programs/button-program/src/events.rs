use anchor_lang::prelude::*;

#[event]
pub struct ButtonCreated {
    pub button: Pubkey,
    pub creator: Pubkey,
    pub admin_wallet: Pubkey,
    pub fee_lamports: u64,
}

#[event]
pub struct ButtonLiked {
    pub button: Pubkey,
    pub user: Pubkey,
    pub number_of_likes: u64,
}
