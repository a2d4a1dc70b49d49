use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    pubkey::Pubkey,
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::helpers::rent_exempt_minimum;

/// Allocates a rent-exempt PDA of `space` bytes owned by `owner`.
/// The PDA signs with `seeds`, the payer signs the transaction.
///
/// A PDA that already holds lamports cannot go through `CreateAccount`, so it
/// is topped up to the rent minimum, then allocated and assigned.
pub fn create_pda_account(
    payer: &AccountInfo,
    account: &AccountInfo,
    space: usize,
    owner: &Pubkey,
    seeds: &[Seed],
) -> ProgramResult {
    let required = rent_exempt_minimum(space)?;
    let current = account.lamports();

    if current == 0 {
        return CreateAccount {
            from: payer,
            to: account,
            lamports: required,
            space: space as u64,
            owner,
        }
        .invoke_signed(&[Signer::from(seeds)]);
    }

    let shortfall = required.saturating_sub(current);
    if shortfall > 0 {
        Transfer {
            from: payer,
            to: account,
            lamports: shortfall,
        }
        .invoke()?;
    }

    Allocate {
        account,
        space: space as u64,
    }
    .invoke_signed(&[Signer::from(seeds)])?;

    Assign { account, owner }.invoke_signed(&[Signer::from(seeds)])
}
