use pinocchio::{
    account_info::{AccountInfo, Ref},
    program_error::ProgramError,
    pubkey::Pubkey,
};
use shank::ShankAccount;

use crate::error::MarketplaceError;
use crate::helpers::{check_owner, validate_fee_bps, MAX_NAME_LEN};
use crate::state::AccountDiscriminator;
use crate::ID;

/// Marketplace configuration, stored at PDA `["marketplace", name]`.
///
/// Every field is a byte array so the struct has alignment 1 and can be
/// read in place from account data.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct Marketplace {
    pub discriminator: u8,
    /// Who created the marketplace and may withdraw its fees
    pub admin: Pubkey,
    /// Fee charged on every sale, in basis points (LE u16)
    pub fee_bps: [u8; 2],
    pub bump: u8,
    pub treasury_bump: u8,
    pub rewards_bump: u8,
    pub name_len: u8,
    /// Zero padded, only the first `name_len` bytes are meaningful
    pub name: [u8; 32], // == MAX_NAME_LEN; shank needs a literal length
}

impl Marketplace {
    pub const LEN: usize = core::mem::size_of::<Marketplace>();

    pub fn new(
        admin: Pubkey,
        fee_bps: u16,
        name: &[u8],
        bump: u8,
        treasury_bump: u8,
        rewards_bump: u8,
    ) -> Result<Self, ProgramError> {
        validate_name(name)?;
        validate_fee_bps(fee_bps)?;

        let mut padded = [0u8; MAX_NAME_LEN];
        padded[..name.len()].copy_from_slice(name);

        Ok(Self {
            discriminator: AccountDiscriminator::Marketplace as u8,
            admin,
            fee_bps: fee_bps.to_le_bytes(),
            bump,
            treasury_bump,
            rewards_bump,
            name_len: name.len() as u8,
            name: padded,
        })
    }

    #[inline]
    pub fn fee_bps(&self) -> u16 {
        u16::from_le_bytes(self.fee_bps)
    }

    #[inline]
    pub fn name(&self) -> &[u8] {
        &self.name[..(self.name_len as usize).min(MAX_NAME_LEN)]
    }

    /// Reads an initialized record from raw account data.
    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::Marketplace as u8 {
            return Err(ProgramError::UninitializedAccount);
        }
        // SAFETY: length checked above and `Self` has alignment 1.
        Ok(unsafe { Self::from_bytes_unchecked(data) })
    }

    /// Program-owned, correctly sized and initialized marketplace account.
    pub fn from_account_info(account_info: &AccountInfo) -> Result<Ref<'_, Self>, ProgramError> {
        check_owner(account_info, &ID)?;
        let data = account_info.try_borrow_data()?;
        Self::load(&data)?;
        Ok(Ref::map(data, |data| unsafe { Self::from_bytes_unchecked(data) }))
    }

    /// Writes the record into freshly allocated (zeroed) account data.
    pub fn write(&self, data: &mut [u8]) -> Result<(), ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::Uninitialized as u8 {
            return Err(ProgramError::AccountAlreadyInitialized);
        }
        data.copy_from_slice(self.as_bytes());
        Ok(())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: `Self` is `repr(C)` with no padding (all fields are u8 based).
        unsafe { core::slice::from_raw_parts(self as *const Self as *const u8, Self::LEN) }
    }

    /// # Safety
    ///
    /// `data` must be at least `Self::LEN` bytes long.
    #[inline(always)]
    pub unsafe fn from_bytes_unchecked(data: &[u8]) -> &Self {
        &*(data.as_ptr() as *const Self)
    }
}

pub fn validate_name(name: &[u8]) -> Result<(), ProgramError> {
    if name.is_empty() {
        return Err(MarketplaceError::NameEmpty.into());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(MarketplaceError::NameTooLong.into());
    }
    Ok(())
}
