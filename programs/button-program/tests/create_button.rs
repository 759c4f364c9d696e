mod common;

use common::*;
use solana_program_test::tokio;
use solana_sdk::{pubkey::Pubkey, signer::Signer};

async fn start_env(program_test: solana_program_test::ProgramTest) -> TestEnv {
    let (banks, payer, blockhash) = program_test.start().await;
    TestEnv {
        banks,
        payer,
        blockhash,
    }
}

#[tokio::test]
async fn test_create_button_succeeds() {
    let mut program_test = get_program_test();
    let fee_payer = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let creator = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let admin_wallet = Pubkey::new_unique();
    let mut env = start_env(program_test).await;

    let ix = build_create_button_ix(
        &fee_payer.pubkey(),
        &creator.pubkey(),
        &admin_wallet,
        "airhorn",
        "#ff0044",
        "https://sounds.example/airhorn.mp3",
    );
    let result = send_tx(&mut env, &[ix], &fee_payer.pubkey(), &[&fee_payer, &creator]).await;
    assert!(result.is_ok(), "create_button should succeed: {:?}", result.err());

    let (button_pda, bump) = find_button_pda(&creator.pubkey());
    let button = read_button(&mut env, &button_pda).await;
    assert_eq!(button.title, "airhorn");
    assert_eq!(button.color, "#ff0044");
    assert_eq!(button.creator, creator.pubkey());
    assert_eq!(button.sound_uri, "https://sounds.example/airhorn.mp3");
    assert_eq!(button.number_of_likes, 0, "new button has no likes");
    assert_eq!(button.bump, bump, "stored bump matches derivation");
}

#[tokio::test]
async fn test_create_button_pays_fee_to_admin_wallet() {
    let mut program_test = get_program_test();
    let fee_payer = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let creator = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let admin_wallet = Pubkey::new_unique();
    let mut env = start_env(program_test).await;

    let ix = build_create_button_ix(
        &fee_payer.pubkey(),
        &creator.pubkey(),
        &admin_wallet,
        "drum",
        "blue",
        "ipfs://drum",
    );
    send_tx(&mut env, &[ix], &fee_payer.pubkey(), &[&fee_payer, &creator])
        .await
        .expect("create_button failed");

    assert_eq!(
        get_balance(&mut env, &admin_wallet).await,
        CREATE_BUTTON_FEE_LAMPORTS,
        "admin wallet receives the fixed fee"
    );
    assert_eq!(
        get_balance(&mut env, &creator.pubkey()).await,
        INITIAL_LAMPORTS - CREATE_BUTTON_FEE_LAMPORTS,
        "fee is debited from the creator"
    );
}

#[tokio::test]
async fn test_create_button_twice_fails_and_keeps_first_state() {
    let mut program_test = get_program_test();
    let fee_payer = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let second_payer = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let creator = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let admin_wallet = Pubkey::new_unique();
    let mut env = start_env(program_test).await;

    let ix = build_create_button_ix(
        &fee_payer.pubkey(),
        &creator.pubkey(),
        &admin_wallet,
        "first",
        "red",
        "ipfs://first",
    );
    send_tx(&mut env, &[ix], &fee_payer.pubkey(), &[&fee_payer, &creator])
        .await
        .expect("first create_button failed");

    // Same creator, different payer and metadata: the derived address is
    // already initialized, so the second attempt must fail wholesale.
    let ix = build_create_button_ix(
        &second_payer.pubkey(),
        &creator.pubkey(),
        &admin_wallet,
        "second",
        "green",
        "ipfs://second",
    );
    let result = send_tx(
        &mut env,
        &[ix],
        &second_payer.pubkey(),
        &[&second_payer, &creator],
    )
    .await;
    assert!(result.is_err(), "duplicate create_button should fail");

    let (button_pda, _) = find_button_pda(&creator.pubkey());
    let button = read_button(&mut env, &button_pda).await;
    assert_eq!(button.title, "first", "state equals the first creation only");
    assert_eq!(
        get_balance(&mut env, &admin_wallet).await,
        CREATE_BUTTON_FEE_LAMPORTS,
        "fee is collected exactly once"
    );
}

#[tokio::test]
async fn test_create_button_rejects_over_long_title() {
    let mut program_test = get_program_test();
    let fee_payer = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let creator = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let admin_wallet = Pubkey::new_unique();
    let mut env = start_env(program_test).await;

    let long_title = "x".repeat(26);
    let ix = build_create_button_ix(
        &fee_payer.pubkey(),
        &creator.pubkey(),
        &admin_wallet,
        &long_title,
        "red",
        "ipfs://x",
    );
    let result = send_tx(&mut env, &[ix], &fee_payer.pubkey(), &[&fee_payer, &creator]).await;
    assert!(result.is_err(), "26-byte title should be rejected");

    let (button_pda, _) = find_button_pda(&creator.pubkey());
    assert!(
        !account_exists(&mut env, &button_pda).await,
        "no button account is left behind"
    );
}

#[tokio::test]
async fn test_create_button_rejects_over_long_sound_uri() {
    let mut program_test = get_program_test();
    let fee_payer = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let creator = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    let admin_wallet = Pubkey::new_unique();
    let mut env = start_env(program_test).await;

    let long_uri = "u".repeat(151);
    let ix = build_create_button_ix(
        &fee_payer.pubkey(),
        &creator.pubkey(),
        &admin_wallet,
        "ok",
        "red",
        &long_uri,
    );
    let result = send_tx(&mut env, &[ix], &fee_payer.pubkey(), &[&fee_payer, &creator]).await;
    assert!(result.is_err(), "151-byte sound URI should be rejected");
}

#[tokio::test]
async fn test_create_button_fails_when_creator_cannot_cover_fee() {
    let mut program_test = get_program_test();
    let fee_payer = add_wallet(&mut program_test, INITIAL_LAMPORTS);
    // Below the 2_000_000 lamport creation fee.
    let creator = add_wallet(&mut program_test, 1_000_000);
    let admin_wallet = Pubkey::new_unique();
    let mut env = start_env(program_test).await;

    let ix = build_create_button_ix(
        &fee_payer.pubkey(),
        &creator.pubkey(),
        &admin_wallet,
        "broke",
        "gray",
        "ipfs://broke",
    );
    let result = send_tx(&mut env, &[ix], &fee_payer.pubkey(), &[&fee_payer, &creator]).await;
    assert!(result.is_err(), "underfunded creator should be rejected");

    assert_eq!(
        get_balance(&mut env, &admin_wallet).await,
        0,
        "no partial fee transfer"
    );
    let (button_pda, _) = find_button_pda(&creator.pubkey());
    assert!(
        !account_exists(&mut env, &button_pda).await,
        "no button account is left behind"
    );
}
