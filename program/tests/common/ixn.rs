use solana_program_test::BanksClient;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

use pinocchio_marketplace::{
    client::{self, InitializeArgs, ListArgs, WithdrawFeesArgs},
    state::{Listing, Marketplace},
};

use super::fixtures::{edition_address, metadata_address, metadata_program_id, token_program_id};
use super::program_id;

// ---------- Addresses ----------
pub fn marketplace_address(name: &str) -> Pubkey {
    Pubkey::find_program_address(&[b"marketplace", name.as_bytes()], &program_id()).0
}

pub fn treasury_address(marketplace: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"treasury", marketplace.as_ref()], &program_id()).0
}

pub fn rewards_mint_address(marketplace: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"rewards", marketplace.as_ref()], &program_id()).0
}

pub fn listing_address(marketplace: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[marketplace.as_ref(), mint.as_ref()], &program_id()).0
}

pub fn vault_address(listing: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[b"vault", listing.as_ref()], &program_id()).0
}

// ---------- Instructions ----------
pub fn initialize(admin: &Pubkey, name: &str, fee_bps: u16) -> Instruction {
    let marketplace = marketplace_address(name);
    let args = InitializeArgs {
        fee_bps,
        name: name.to_string(),
    };
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(marketplace, false),
            AccountMeta::new(treasury_address(&marketplace), false),
            AccountMeta::new(rewards_mint_address(&marketplace), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: client::initialize_data(&args).unwrap(),
    }
}

pub fn list(
    maker: &Pubkey,
    marketplace: &Pubkey,
    mint: &Pubkey,
    maker_token_account: &Pubkey,
    collection_mint: &Pubkey,
    price: u64,
) -> Instruction {
    let listing = listing_address(marketplace, mint);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*maker, true),
            AccountMeta::new_readonly(*marketplace, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*maker_token_account, false),
            AccountMeta::new(vault_address(&listing), false),
            AccountMeta::new(listing, false),
            AccountMeta::new_readonly(*collection_mint, false),
            AccountMeta::new_readonly(metadata_address(mint), false),
            AccountMeta::new_readonly(edition_address(mint), false),
            AccountMeta::new_readonly(metadata_program_id(), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: client::list_data(&ListArgs { price }).unwrap(),
    }
}

pub fn delist(
    maker: &Pubkey,
    marketplace: &Pubkey,
    mint: &Pubkey,
    maker_token_account: &Pubkey,
) -> Instruction {
    let listing = listing_address(marketplace, mint);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*maker, true),
            AccountMeta::new_readonly(*marketplace, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*maker_token_account, false),
            AccountMeta::new(vault_address(&listing), false),
            AccountMeta::new(listing, false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: client::delist_data(),
    }
}

pub fn purchase(
    buyer: &Pubkey,
    maker: &Pubkey,
    marketplace: &Pubkey,
    mint: &Pubkey,
    buyer_token_account: &Pubkey,
) -> Instruction {
    let listing = listing_address(marketplace, mint);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*buyer, true),
            AccountMeta::new(*maker, false),
            AccountMeta::new_readonly(*marketplace, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(*buyer_token_account, false),
            AccountMeta::new(vault_address(&listing), false),
            AccountMeta::new(listing, false),
            AccountMeta::new(treasury_address(marketplace), false),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(token_program_id(), false),
        ],
        data: client::purchase_data(),
    }
}

pub fn withdraw_fees(admin: &Pubkey, marketplace: &Pubkey, lamports: u64) -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new_readonly(*marketplace, false),
            AccountMeta::new(treasury_address(marketplace), false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: client::withdraw_fees_data(&WithdrawFeesArgs { lamports }).unwrap(),
    }
}

/// System program transfer, laid out by hand: `[2u32 LE][lamports u64 LE]`.
pub fn transfer(from: &Pubkey, to: &Pubkey, lamports: u64) -> Instruction {
    let mut data = 2u32.to_le_bytes().to_vec();
    data.extend_from_slice(&lamports.to_le_bytes());
    Instruction {
        program_id: system_program::id(),
        accounts: vec![AccountMeta::new(*from, true), AccountMeta::new(*to, false)],
        data,
    }
}

// ---------- State helpers ----------
pub async fn get_marketplace(banks_client: &mut BanksClient, key: &Pubkey) -> Marketplace {
    let account = banks_client.get_account(*key).await.unwrap().unwrap();
    assert_eq!(account.owner, program_id());
    *Marketplace::load(&account.data).unwrap()
}

pub async fn get_listing(banks_client: &mut BanksClient, key: &Pubkey) -> Option<Listing> {
    let account = banks_client.get_account(*key).await.unwrap()?;
    Listing::load(&account.data).ok().copied()
}

pub async fn get_token_amount(banks_client: &mut BanksClient, key: &Pubkey) -> Option<u64> {
    let account = banks_client.get_account(*key).await.unwrap()?;
    Some(super::fixtures::token_amount(&account.data))
}
