use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::Pubkey,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};

#[inline(always)]
pub fn check_signer(account_info: &AccountInfo) -> ProgramResult {
    if !account_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    Ok(())
}

#[inline(always)]
pub fn check_writable(account_info: &AccountInfo) -> ProgramResult {
    if !account_info.is_writable() {
        return Err(ProgramError::InvalidArgument);
    }
    Ok(())
}

#[inline(always)]
pub fn check_owner(account_info: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if !account_info.is_owned_by(owner) {
        return Err(ProgramError::InvalidAccountOwner);
    }
    Ok(())
}

/// Programs passed by the caller must be the ones we CPI into.
#[inline(always)]
pub fn check_program(account_info: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    if account_info.key() != program_id {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Fails unless the account is still a bare system account with no data.
/// Lamports alone do not count: anyone can fund a derived address.
pub fn check_uninitialized(account_info: &AccountInfo) -> ProgramResult {
    if !account_info.data_is_empty() || !account_info.is_owned_by(&pinocchio_system::ID) {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    Ok(())
}

#[inline]
pub fn rent_exempt_minimum(data_len: usize) -> Result<u64, ProgramError> {
    Ok(Rent::get()?.minimum_balance(data_len))
}

// Move lamports between two accounts (checked)
pub fn relocate_lamports(
    source_account_info: &AccountInfo,
    destination_account_info: &AccountInfo,
    lamports: u64,
) -> ProgramResult {
    {
        let mut source_lamports = source_account_info.try_borrow_mut_lamports()?;
        *source_lamports = source_lamports
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;
    }
    {
        let mut destination_lamports = destination_account_info.try_borrow_mut_lamports()?;
        *destination_lamports = destination_lamports
            .checked_add(lamports)
            .ok_or(ProgramError::ArithmeticOverflow)?;
    }
    Ok(())
}

/// Drains a program-owned account into `destination` and wipes its data.
/// The runtime purges the zero-lamport account once the transaction ends.
pub fn close_program_account(
    account_info: &AccountInfo,
    destination_account_info: &AccountInfo,
) -> ProgramResult {
    relocate_lamports(account_info, destination_account_info, account_info.lamports())?;
    account_info.try_borrow_mut_data()?.fill(0);
    Ok(())
}
