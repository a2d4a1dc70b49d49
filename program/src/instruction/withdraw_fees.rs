use pinocchio::{
    account_info::AccountInfo, instruction::Signer, msg, program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::Transfer;

use crate::error::MarketplaceError;
use crate::helpers::*;
use crate::state::Marketplace;

/// Move collected fees from the treasury to the admin.
///
/// Accounts (exactly 4):
/// 0. `[writable, signer]` Admin recorded in the marketplace
/// 1. `[]` Marketplace
/// 2. `[writable]` Treasury PDA
/// 3. `[]` System program
pub fn process_withdraw_fees(accounts: &[AccountInfo], lamports: u64) -> ProgramResult {
    let [admin, marketplace_info, treasury, system_program, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(admin)?;
    check_writable(admin)?;
    check_writable(treasury)?;
    check_program(system_program, &pinocchio_system::ID)?;

    let marketplace = *Marketplace::from_account_info(marketplace_info)?;
    if marketplace.admin != *admin.key() {
        return Err(MarketplaceError::Unauthorized.into());
    }

    let bump_seed = [marketplace.treasury_bump];
    let seeds = treasury_signer_seeds(marketplace_info.key(), &bump_seed);
    check_stored_address(
        treasury,
        &[TREASURY_SEED, marketplace_info.key().as_ref(), &bump_seed],
    )?;

    if lamports == 0 {
        return Err(ProgramError::InvalidArgument);
    }
    // The treasury stays rent exempt.
    let available = treasury
        .lamports()
        .saturating_sub(rent_exempt_minimum(0)?);
    if lamports > available {
        return Err(ProgramError::InsufficientFunds);
    }

    Transfer {
        from: treasury,
        to: admin,
        lamports,
    }
    .invoke_signed(&[Signer::from(&seeds[..])])?;

    msg!("Fees withdrawn");
    log!("lamports: {}", lamports);
    Ok(())
}
