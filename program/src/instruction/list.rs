use pinocchio::{
    account_info::AccountInfo, msg, program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::{
    instructions::{InitializeAccount3, TransferChecked},
    state::{Mint, TokenAccount},
};

use crate::error::MarketplaceError;
use crate::helpers::*;
use crate::state::{metadata::check_master_edition, Listing, Marketplace, TokenMetadata};

/// Escrow an NFT in a listing-owned vault and record its asking price.
pub fn process_list(accounts: &[AccountInfo], price: u64) -> ProgramResult {
    let [
        maker,
        marketplace_info,
        maker_mint,
        maker_ata,
        vault,
        listing_info,
        collection_mint,
        metadata_info,
        edition_info,
        metadata_program,
        system_program,
        token_program,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(maker)?;
    check_writable(maker)?;
    check_writable(maker_ata)?;
    check_writable(vault)?;
    check_writable(listing_info)?;
    check_program(metadata_program, &TOKEN_METADATA_PROGRAM_ID)?;
    check_program(system_program, &pinocchio_system::ID)?;
    check_program(token_program, &pinocchio_token::ID)?;

    if price == 0 {
        return Err(MarketplaceError::InvalidPrice.into());
    }

    let marketplace = *Marketplace::from_account_info(marketplace_info)?;
    check_stored_address(
        marketplace_info,
        &[MARKETPLACE_SEED, marketplace.name(), &[marketplace.bump]],
    )?;

    // Borrows end here: the CPIs below need these accounts free.
    {
        let mint = Mint::from_account_info(maker_mint)?;
        if mint.decimals() != NFT_DECIMALS {
            return Err(MarketplaceError::NotAnNft.into());
        }

        let maker_tokens = TokenAccount::from_account_info(maker_ata)?;
        if maker_tokens.mint() != maker_mint.key()
            || maker_tokens.owner() != maker.key()
            || maker_tokens.amount() < NFT_AMOUNT
        {
            return Err(MarketplaceError::InvalidTokenAccount.into());
        }

        // only needs to be a mint
        Mint::from_account_info(collection_mint)?;
    }

    let (metadata_key, _) = find_metadata_address(maker_mint.key());
    check_address(metadata_info, &metadata_key)?;
    let metadata = TokenMetadata::from_account_info(metadata_info)?;
    if metadata.mint != *maker_mint.key() {
        return Err(MarketplaceError::InvalidMetadata.into());
    }
    metadata.check_collection(collection_mint.key())?;

    let (edition_key, _) = find_edition_address(maker_mint.key());
    check_address(edition_info, &edition_key)?;
    check_master_edition(edition_info)?;

    let marketplace_key = *marketplace_info.key();
    let (listing_key, listing_bump) = find_listing_address(&marketplace_key, maker_mint.key());
    check_address(listing_info, &listing_key)?;
    check_uninitialized(listing_info)?;

    let (vault_key, vault_bump) = find_vault_address(&listing_key);
    check_address(vault, &vault_key)?;
    check_uninitialized(vault)?;

    let listing_bump_seed = [listing_bump];
    let seeds = listing_signer_seeds(&marketplace_key, maker_mint.key(), &listing_bump_seed);
    create_pda_account(
        maker,
        listing_info,
        Listing::LEN,
        &crate::ID,
        &seeds,
    )?;

    let vault_bump_seed = [vault_bump];
    let seeds = vault_signer_seeds(&listing_key, &vault_bump_seed);
    create_pda_account(
        maker,
        vault,
        TokenAccount::LEN,
        &pinocchio_token::ID,
        &seeds,
    )?;
    InitializeAccount3 {
        account: vault,
        mint: maker_mint,
        owner: &listing_key,
    }
    .invoke()?;

    TransferChecked {
        from: maker_ata,
        mint: maker_mint,
        to: vault,
        authority: maker,
        amount: NFT_AMOUNT,
        decimals: NFT_DECIMALS,
    }
    .invoke()?;

    Listing::new(
        *maker.key(),
        *maker_mint.key(),
        marketplace_key,
        price,
        listing_bump,
        vault_bump,
    )
    .write(&mut listing_info.try_borrow_mut_data()?)?;

    msg!("NFT listed");
    log!("price: {}", price);
    Ok(())
}
