use pinocchio::{
    account_info::AccountInfo, instruction::Signer, msg, program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::Transfer;
use pinocchio_token::{
    instructions::{CloseAccount, TransferChecked},
    state::TokenAccount,
};

use crate::error::MarketplaceError;
use crate::helpers::*;
use crate::state::{Listing, Marketplace};

/// Buy a listed NFT.
///
/// The buyer pays `price - fee` to the maker and `fee` to the treasury, then
/// receives the NFT from the vault. Vault and listing rent go back to the
/// maker.
pub fn process_purchase(accounts: &[AccountInfo]) -> ProgramResult {
    let [
        buyer,
        maker,
        marketplace_info,
        maker_mint,
        buyer_ata,
        vault,
        listing_info,
        treasury,
        system_program,
        token_program,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(buyer)?;
    check_writable(buyer)?;
    check_writable(maker)?;
    check_writable(buyer_ata)?;
    check_writable(vault)?;
    check_writable(listing_info)?;
    check_writable(treasury)?;
    check_program(system_program, &pinocchio_system::ID)?;
    check_program(token_program, &pinocchio_token::ID)?;

    let marketplace = *Marketplace::from_account_info(marketplace_info)?;
    check_stored_address(
        treasury,
        &[
            TREASURY_SEED,
            marketplace_info.key().as_ref(),
            &[marketplace.treasury_bump],
        ],
    )?;

    let listing = *Listing::from_account_info(listing_info)?;
    if listing.marketplace != *marketplace_info.key()
        || listing.maker != *maker.key()
        || listing.mint != *maker_mint.key()
    {
        return Err(MarketplaceError::ListingMismatch.into());
    }
    if buyer.key() == maker.key() {
        return Err(MarketplaceError::SelfPurchase.into());
    }
    check_stored_address(
        vault,
        &[VAULT_SEED, listing_info.key().as_ref(), &[listing.vault_bump]],
    )?;

    {
        let buyer_tokens = TokenAccount::from_account_info(buyer_ata)?;
        if buyer_tokens.mint() != maker_mint.key() || buyer_tokens.owner() != buyer.key() {
            return Err(MarketplaceError::InvalidTokenAccount.into());
        }
    }

    let SaleSplit { fee, proceeds } = split_sale_price(listing.price(), marketplace.fee_bps())?;

    if proceeds > 0 {
        Transfer {
            from: buyer,
            to: maker,
            lamports: proceeds,
        }
        .invoke()?;
    }
    if fee > 0 {
        Transfer {
            from: buyer,
            to: treasury,
            lamports: fee,
        }
        .invoke()?;
    }

    let bump_seed = [listing.bump];
    let seeds = listing_signer_seeds(&listing.marketplace, &listing.mint, &bump_seed);

    TransferChecked {
        from: vault,
        mint: maker_mint,
        to: buyer_ata,
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

    msg!("NFT purchased");
    log!("price: {}, fee: {}", listing.price(), fee);
    Ok(())
}
