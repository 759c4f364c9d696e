use anchor_lang::prelude::*;

#[error_code]
pub enum ButtonProgramError {
    #[msg("The creator does not have enough funds to cover the creation fee")]
    InsufficientFunds,
    #[msg("The user has already liked this button")]
    AlreadyLiked,
    #[msg("Invalid input parameters")]
    InvalidInput,
    #[msg("Arithmetic overflow")]
    Overflow,
}
