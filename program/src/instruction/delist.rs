use pinocchio::{
    account_info::AccountInfo, instruction::Signer, msg, program_error::ProgramError,
    ProgramResult,
};
use pinocchio_token::{
    instructions::{CloseAccount, TransferChecked},
    state::TokenAccount,
};

use crate::error::MarketplaceError;
use crate::helpers::*;
use crate::state::{Listing, Marketplace};

/// Give the NFT back to its maker and close the listing.
pub fn process_delist(accounts: &[AccountInfo]) -> ProgramResult {
    let [
        maker,
        marketplace_info,
        maker_mint,
        maker_ata,
        vault,
        listing_info,
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
    check_program(token_program, &pinocchio_token::ID)?;

    // existence only, delisting is allowed under any fee setting
    Marketplace::from_account_info(marketplace_info)?;

    let listing = *Listing::from_account_info(listing_info)?;
    if listing.maker != *maker.key() {
        return Err(MarketplaceError::Unauthorized.into());
    }
    if listing.marketplace != *marketplace_info.key() || listing.mint != *maker_mint.key() {
        return Err(MarketplaceError::ListingMismatch.into());
    }
    check_stored_address(
        vault,
        &[VAULT_SEED, listing_info.key().as_ref(), &[listing.vault_bump]],
    )?;

    {
        let maker_tokens = TokenAccount::from_account_info(maker_ata)?;
        if maker_tokens.mint() != maker_mint.key() || maker_tokens.owner() != maker.key() {
            return Err(MarketplaceError::InvalidTokenAccount.into());
        }
    }

    let bump_seed = [listing.bump];
    let seeds = listing_signer_seeds(&listing.marketplace, &listing.mint, &bump_seed);

    TransferChecked {
        from: vault,
        mint: maker_mint,
        to: maker_ata,
        authority: listing_info,
        amount: NFT_AMOUNT,
        decimals: NFT_DECIMALS,
    }
    .invoke_signed(&[Signer::from(&seeds[..])])?;

    CloseAccount {
        account: vault,
        destination: maker,
        authority: listing_info,
    }
    .invoke_signed(&[Signer::from(&seeds[..])])?;

    close_program_account(listing_info, maker)?;

    msg!("Listing closed");
    Ok(())
}
