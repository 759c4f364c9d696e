#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use button_program::constants::seeds;
use button_program::state::Button;
use solana_program_test::{processor, BanksClient, ProgramTest};
use solana_sdk::{
    account::Account,
    entrypoint::{ProcessInstruction, ProgramResult},
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
    system_program,
    transaction::Transaction,
};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------
pub const INITIAL_LAMPORTS: u64 = 1_000_000_000;
pub const CREATE_BUTTON_FEE_LAMPORTS: u64 = button_program::constants::CREATE_BUTTON_FEE_LAMPORTS;

// ---------------------------------------------------------------------------
// Program entry adapter
// ---------------------------------------------------------------------------

// Type alias for the Anchor entry function pointer, converted into a
// ProcessInstruction function pointer for the test runtime.
pub type ProgramEntry = for<'info> fn(
    program_id: &Pubkey,
    accounts: &'info [anchor_lang::prelude::AccountInfo<'info>],
    instruction_data: &[u8],
) -> ProgramResult;

// Converts the Anchor entry function into a ProcessInstruction function
// pointer. The signatures differ only in lifetime placement.
#[macro_export]
macro_rules! convert_entry {
    ($entry:expr) => {
        unsafe { core::mem::transmute::<ProgramEntry, ProcessInstruction>($entry) }
    };
}

// ---------------------------------------------------------------------------
// PDA derivation helpers
// ---------------------------------------------------------------------------
pub fn find_button_pda(creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[seeds::BUTTON, creator.as_ref()], &button_program::ID)
}

pub fn find_like_pda(button: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[seeds::LIKE, button.as_ref(), user.as_ref()],
        &button_program::ID,
    )
}

// ---------------------------------------------------------------------------
// Instruction builders
// ---------------------------------------------------------------------------
pub fn build_create_button_ix(
    fee_payer: &Pubkey,
    creator: &Pubkey,
    admin_wallet: &Pubkey,
    title: &str,
    color: &str,
    sound_uri: &str,
) -> Instruction {
    let (button, _) = find_button_pda(creator);
    let accounts = button_program::accounts::CreateButton {
        fee_payer: *fee_payer,
        button,
        creator: *creator,
        admin_wallet: *admin_wallet,
        system_program: system_program::ID,
    };
    let data = button_program::instruction::CreateButton {
        title: title.to_string(),
        color: color.to_string(),
        sound_uri: sound_uri.to_string(),
    };
    Instruction {
        program_id: button_program::ID,
        accounts: accounts.to_account_metas(None),
        data: data.data(),
    }
}

pub fn build_like_button_ix(fee_payer: &Pubkey, user: &Pubkey, creator: &Pubkey) -> Instruction {
    let (button, _) = find_button_pda(creator);
    let (like, _) = find_like_pda(&button, user);
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

// ---------------------------------------------------------------------------
// Test environment setup
// ---------------------------------------------------------------------------
pub struct TestEnv {
    pub banks: BanksClient,
    pub payer: Keypair,
    pub blockhash: Hash,
}

/// Builds a ProgramTest with the button program registered in-process.
pub fn get_program_test() -> ProgramTest {
    ProgramTest::new(
        "button_program",
        button_program::ID,
        processor!(convert_entry!(button_program::entry)),
    )
}

/// Adds a funded system-owned wallet to the test genesis.
pub fn add_wallet(program_test: &mut ProgramTest, lamports: u64) -> Keypair {
    let wallet = Keypair::new();
    program_test.add_account(
        wallet.pubkey(),
        Account {
            lamports,
            data: vec![],
            owner: system_program::ID,
            executable: false,
            rent_epoch: 0,
        },
    );
    wallet
}

pub async fn send_tx(
    env: &mut TestEnv,
    ixs: &[Instruction],
    payer: &Pubkey,
    signers: &[&Keypair],
) -> Result<(), solana_program_test::BanksClientError> {
    let tx = Transaction::new_signed_with_payer(ixs, Some(payer), signers, env.blockhash);
    env.banks.process_transaction(tx).await
}

pub async fn read_button(env: &mut TestEnv, button: &Pubkey) -> Button {
    let account = env
        .banks
        .get_account(*button)
        .await
        .expect("rpc failure")
        .expect("button account not found");
    Button::try_deserialize(&mut account.data.as_slice()).expect("button deserialization failed")
}

pub async fn get_balance(env: &mut TestEnv, pubkey: &Pubkey) -> u64 {
    env.banks.get_balance(*pubkey).await.expect("rpc failure")
}

pub async fn account_exists(env: &mut TestEnv, pubkey: &Pubkey) -> bool {
    env.banks
        .get_account(*pubkey)
        .await
        .expect("rpc failure")
        .is_some()
}
