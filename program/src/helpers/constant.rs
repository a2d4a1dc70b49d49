use pinocchio::pubkey::Pubkey;

pub const MARKETPLACE_SEED: &[u8] = b"marketplace";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const REWARDS_SEED: &[u8] = b"rewards";
pub const VAULT_SEED: &[u8] = b"vault";
pub const METADATA_SEED: &[u8] = b"metadata";
pub const EDITION_SEED: &[u8] = b"edition";

/// A PDA seed may not exceed 32 bytes, so neither may a marketplace name.
pub const MAX_NAME_LEN: usize = 32;

/// Fees are expressed in basis points of the sale price.
pub const FEE_DENOMINATOR_BPS: u64 = 10_000;

pub const REWARDS_DECIMALS: u8 = 6;

/// Listed tokens are NFTs: exactly one indivisible unit moves per sale.
pub const NFT_AMOUNT: u64 = 1;
pub const NFT_DECIMALS: u8 = 0;

pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    pinocchio_pubkey::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
