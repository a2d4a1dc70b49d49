//! Accounts the marketplace reads but does not create, written straight into
//! genesis: SPL mints and token accounts, Metaplex metadata and editions.

use solana_program_test::ProgramTest;
use solana_sdk::{account::Account, pubkey::Pubkey, rent::Rent, signature::Keypair, signer::Signer};

use pinocchio_marketplace::helpers::TOKEN_METADATA_PROGRAM_ID;

pub const MINT_LEN: usize = 82;
pub const TOKEN_ACCOUNT_LEN: usize = 165;
pub const METADATA_LEN: usize = 679;
pub const EDITION_LEN: usize = 282;

pub fn token_program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_token::ID)
}

pub fn metadata_program_id() -> Pubkey {
    Pubkey::new_from_array(TOKEN_METADATA_PROGRAM_ID)
}

pub fn metadata_address(mint: &Pubkey) -> Pubkey {
    let program = metadata_program_id();
    Pubkey::find_program_address(&[b"metadata", program.as_ref(), mint.as_ref()], &program).0
}

pub fn edition_address(mint: &Pubkey) -> Pubkey {
    let program = metadata_program_id();
    Pubkey::find_program_address(
        &[b"metadata", program.as_ref(), mint.as_ref(), b"edition"],
        &program,
    )
    .0
}

fn coption_key(buf: &mut Vec<u8>, key: Option<&Pubkey>) {
    match key {
        Some(key) => {
            buf.extend_from_slice(&1u32.to_le_bytes());
            buf.extend_from_slice(key.as_ref());
        }
        None => buf.extend_from_slice(&[0u8; 36]),
    }
}

pub fn mint_data(authority: &Pubkey, supply: u64, decimals: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(MINT_LEN);
    coption_key(&mut buf, Some(authority));
    buf.extend_from_slice(&supply.to_le_bytes());
    buf.push(decimals);
    buf.push(1); // is_initialized
    coption_key(&mut buf, None);
    assert_eq!(buf.len(), MINT_LEN);
    buf
}

pub fn token_account_data(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(TOKEN_ACCOUNT_LEN);
    buf.extend_from_slice(mint.as_ref());
    buf.extend_from_slice(owner.as_ref());
    buf.extend_from_slice(&amount.to_le_bytes());
    coption_key(&mut buf, None); // delegate
    buf.push(1); // AccountState::Initialized
    buf.extend_from_slice(&[0u8; 12]); // is_native
    buf.extend_from_slice(&0u64.to_le_bytes()); // delegated_amount
    coption_key(&mut buf, None); // close_authority
    assert_eq!(buf.len(), TOKEN_ACCOUNT_LEN);
    buf
}

pub fn metadata_data(mint: &Pubkey, collection: Option<(bool, &Pubkey)>) -> Vec<u8> {
    fn push_str(buf: &mut Vec<u8>, s: &str) {
        buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
        buf.extend_from_slice(s.as_bytes());
    }

    let mut buf = vec![4u8]; // Key::MetadataV1
    buf.extend_from_slice(Pubkey::new_unique().as_ref());
    buf.extend_from_slice(mint.as_ref());
    push_str(&mut buf, "Marketplace Test NFT");
    push_str(&mut buf, "MTN");
    push_str(&mut buf, "https://example.com/nft.json");
    buf.extend_from_slice(&500u16.to_le_bytes());
    buf.push(0); // no creators
    buf.extend_from_slice(&[0, 1]); // primary_sale_happened, is_mutable
    buf.extend_from_slice(&[1, 255]); // edition_nonce
    buf.extend_from_slice(&[1, 0]); // TokenStandard::NonFungible
    match collection {
        Some((verified, key)) => {
            buf.push(1);
            buf.push(verified as u8);
            buf.extend_from_slice(key.as_ref());
        }
        None => buf.push(0),
    }
    buf.resize(METADATA_LEN, 0);
    buf
}

pub fn master_edition_data() -> Vec<u8> {
    let mut buf = vec![6u8]; // Key::MasterEditionV2
    buf.extend_from_slice(&0u64.to_le_bytes()); // supply
    buf.extend_from_slice(&[1]);
    buf.extend_from_slice(&0u64.to_le_bytes()); // max_supply = Some(0)
    buf.resize(EDITION_LEN, 0);
    buf
}

pub fn add_owned_account(pt: &mut ProgramTest, key: Pubkey, owner: Pubkey, data: Vec<u8>) {
    let lamports = Rent::default().minimum_balance(data.len());
    pt.add_account(
        key,
        Account {
            lamports,
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        },
    );
}

/// An NFT sitting in its owner's token account, with metadata pointing at
/// `collection_mint`.
pub struct NftFixture {
    pub mint: Pubkey,
    pub collection_mint: Pubkey,
    pub owner_token_account: Pubkey,
}

pub struct NftOptions {
    pub decimals: u8,
    pub verified: bool,
    pub with_collection: bool,
}

impl Default for NftOptions {
    fn default() -> Self {
        Self {
            decimals: 0,
            verified: true,
            with_collection: true,
        }
    }
}

pub fn add_nft(pt: &mut ProgramTest, owner: &Pubkey, options: NftOptions) -> NftFixture {
    let mint = Keypair::new().pubkey();
    let collection_mint = Keypair::new().pubkey();
    let owner_token_account = Keypair::new().pubkey();
    let edition = edition_address(&mint);

    add_owned_account(pt, mint, token_program_id(), mint_data(&edition, 1, options.decimals));
    add_owned_account(
        pt,
        collection_mint,
        token_program_id(),
        mint_data(&Pubkey::new_unique(), 1, 0),
    );
    add_owned_account(
        pt,
        owner_token_account,
        token_program_id(),
        token_account_data(&mint, owner, 1),
    );

    let collection = options
        .with_collection
        .then_some((options.verified, &collection_mint));
    add_owned_account(
        pt,
        metadata_address(&mint),
        metadata_program_id(),
        metadata_data(&mint, collection),
    );
    add_owned_account(pt, edition, metadata_program_id(), master_edition_data());

    NftFixture {
        mint,
        collection_mint,
        owner_token_account,
    }
}

/// An empty token account for `mint`, e.g. where a buyer receives the NFT.
pub fn add_token_account(pt: &mut ProgramTest, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    let key = Keypair::new().pubkey();
    add_owned_account(pt, key, token_program_id(), token_account_data(mint, owner, 0));
    key
}

pub fn token_amount(data: &[u8]) -> u64 {
    u64::from_le_bytes(data[64..72].try_into().unwrap())
}
