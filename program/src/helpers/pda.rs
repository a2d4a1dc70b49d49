//! Program derived addresses used by the marketplace.
//!
//! Every `find_*` function returns the canonical `(address, bump)` pair and
//! every `check_*` function fails with [`MarketplaceError::InvalidSeeds`] when
//! the supplied account is not the expected address.

use pinocchio::{
    account_info::AccountInfo,
    instruction::Seed,
    program_error::ProgramError,
    pubkey::{create_program_address, find_program_address, Pubkey},
};

use crate::error::MarketplaceError;
use crate::helpers::constant::*;
use crate::ID;

pub fn find_marketplace_address(name: &[u8]) -> (Pubkey, u8) {
    find_program_address(&[MARKETPLACE_SEED, name], &ID)
}

pub fn find_treasury_address(marketplace: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[TREASURY_SEED, marketplace.as_ref()], &ID)
}

pub fn find_rewards_mint_address(marketplace: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[REWARDS_SEED, marketplace.as_ref()], &ID)
}

pub fn find_listing_address(marketplace: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[marketplace.as_ref(), mint.as_ref()], &ID)
}

pub fn find_vault_address(listing: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[VAULT_SEED, listing.as_ref()], &ID)
}

pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    find_program_address(
        &[METADATA_SEED, TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

pub fn find_edition_address(mint: &Pubkey) -> (Pubkey, u8) {
    find_program_address(
        &[
            METADATA_SEED,
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            EDITION_SEED,
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
}

#[inline]
pub fn check_address(account_info: &AccountInfo, expected: &Pubkey) -> Result<(), ProgramError> {
    if account_info.key() != expected {
        return Err(MarketplaceError::InvalidSeeds.into());
    }
    Ok(())
}

/// Re-derives an address from stored seeds and bump. Cheaper than a search.
pub fn check_stored_address(
    account_info: &AccountInfo,
    seeds: &[&[u8]],
) -> Result<(), ProgramError> {
    let expected = create_program_address(seeds, &ID)
        .map_err(|_| ProgramError::from(MarketplaceError::InvalidSeeds))?;
    check_address(account_info, &expected)
}

/// Signer seeds for the marketplace PDA (mint authority of the rewards mint).
#[inline]
pub fn marketplace_signer_seeds<'a>(name: &'a [u8], bump: &'a [u8; 1]) -> [Seed<'a>; 3] {
    [
        Seed::from(MARKETPLACE_SEED),
        Seed::from(name),
        Seed::from(&bump[..]),
    ]
}

#[inline]
pub fn treasury_signer_seeds<'a>(marketplace: &'a Pubkey, bump: &'a [u8; 1]) -> [Seed<'a>; 3] {
    [
        Seed::from(TREASURY_SEED),
        Seed::from(marketplace.as_ref()),
        Seed::from(&bump[..]),
    ]
}

#[inline]
pub fn rewards_signer_seeds<'a>(marketplace: &'a Pubkey, bump: &'a [u8; 1]) -> [Seed<'a>; 3] {
    [
        Seed::from(REWARDS_SEED),
        Seed::from(marketplace.as_ref()),
        Seed::from(&bump[..]),
    ]
}

#[inline]
pub fn listing_signer_seeds<'a>(
    marketplace: &'a Pubkey,
    mint: &'a Pubkey,
    bump: &'a [u8; 1],
) -> [Seed<'a>; 3] {
    [
        Seed::from(marketplace.as_ref()),
        Seed::from(mint.as_ref()),
        Seed::from(&bump[..]),
    ]
}

#[inline]
pub fn vault_signer_seeds<'a>(listing: &'a Pubkey, bump: &'a [u8; 1]) -> [Seed<'a>; 3] {
    [
        Seed::from(VAULT_SEED),
        Seed::from(listing.as_ref()),
        Seed::from(&bump[..]),
    ]
}
