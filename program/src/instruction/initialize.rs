use pinocchio::{account_info::AccountInfo, msg, ProgramResult};
use pinocchio::program_error::ProgramError;
use pinocchio_log::log;
use pinocchio_system::instructions::Transfer;
use pinocchio_token::{instructions::InitializeMint2, state::Mint};

use crate::helpers::*;
use crate::instruction::InitializeData;
use crate::state::{marketplace::validate_name, Marketplace};

/// Create a marketplace.
///
/// Accounts:
/// 0. `[writable, signer]` Admin, pays for every account created here
/// 1. `[writable]` Marketplace PDA `["marketplace", name]`
/// 2. `[writable]` Treasury PDA `["treasury", marketplace]`
/// 3. `[writable]` Rewards mint PDA `["rewards", marketplace]`
/// 4. `[]` System program
/// 5. `[]` Token program
pub fn process_initialize(accounts: &[AccountInfo], data: InitializeData) -> ProgramResult {
    let [
        admin,
        marketplace_info,
        treasury_info,
        rewards_mint_info,
        system_program,
        token_program,
        _rest @ ..,
    ] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    check_signer(admin)?;
    check_writable(marketplace_info)?;
    check_writable(treasury_info)?;
    check_writable(rewards_mint_info)?;
    check_program(system_program, &pinocchio_system::ID)?;
    check_program(token_program, &pinocchio_token::ID)?;

    validate_name(data.name)?;
    validate_fee_bps(data.fee_bps)?;

    let (marketplace_key, bump) = find_marketplace_address(data.name);
    check_address(marketplace_info, &marketplace_key)?;
    check_uninitialized(marketplace_info)?;

    let (treasury_key, treasury_bump) = find_treasury_address(&marketplace_key);
    check_address(treasury_info, &treasury_key)?;
    check_owner(treasury_info, &pinocchio_system::ID)?;

    let (rewards_key, rewards_bump) = find_rewards_mint_address(&marketplace_key);
    check_address(rewards_mint_info, &rewards_key)?;
    check_uninitialized(rewards_mint_info)?;

    let record = Marketplace::new(
        *admin.key(),
        data.fee_bps,
        data.name,
        bump,
        treasury_bump,
        rewards_bump,
    )?;

    let bump_seed = [bump];
    let seeds = marketplace_signer_seeds(data.name, &bump_seed);
    create_pda_account(
        admin,
        marketplace_info,
        Marketplace::LEN,
        &crate::ID,
        &seeds,
    )?;

    // Fees smaller than the rent-exempt minimum could not land in an empty
    // treasury, so it is funded up front.
    let reserve = rent_exempt_minimum(0)?;
    let shortfall = reserve.saturating_sub(treasury_info.lamports());
    if shortfall > 0 {
        Transfer {
            from: admin,
            to: treasury_info,
            lamports: shortfall,
        }
        .invoke()?;
    }

    let rewards_bump_seed = [rewards_bump];
    let seeds = rewards_signer_seeds(&marketplace_key, &rewards_bump_seed);
    create_pda_account(
        admin,
        rewards_mint_info,
        Mint::LEN,
        &pinocchio_token::ID,
        &seeds,
    )?;
    InitializeMint2 {
        mint: rewards_mint_info,
        decimals: REWARDS_DECIMALS,
        mint_authority: &marketplace_key,
        freeze_authority: None,
    }
    .invoke()?;

    record.write(&mut marketplace_info.try_borrow_mut_data()?)?;

    msg!("Marketplace initialized");
    log!("fee_bps: {}", data.fee_bps);
    Ok(())
}
