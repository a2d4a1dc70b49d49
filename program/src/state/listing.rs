use pinocchio::{
    account_info::{AccountInfo, Ref},
    program_error::ProgramError,
    pubkey::Pubkey,
};
use shank::ShankAccount;

use crate::helpers::check_owner;
use crate::state::AccountDiscriminator;
use crate::ID;

/// An NFT offered for sale, stored at PDA `[marketplace, mint]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct Listing {
    pub discriminator: u8,
    pub maker: Pubkey,
    pub mint: Pubkey,
    pub marketplace: Pubkey,
    /// Asking price in lamports (LE u64)
    pub price: [u8; 8],
    pub bump: u8,
    pub vault_bump: u8,
}

impl Listing {
    pub const LEN: usize = core::mem::size_of::<Listing>();

    pub fn new(
        maker: Pubkey,
        mint: Pubkey,
        marketplace: Pubkey,
        price: u64,
        bump: u8,
        vault_bump: u8,
    ) -> Self {
        Self {
            discriminator: AccountDiscriminator::Listing as u8,
            maker,
            mint,
            marketplace,
            price: price.to_le_bytes(),
            bump,
            vault_bump,
        }
    }

    #[inline]
    pub fn price(&self) -> u64 {
        u64::from_le_bytes(self.price)
    }

    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        if data[0] != AccountDiscriminator::Listing as u8 {
            return Err(ProgramError::UninitializedAccount);
        }
        // SAFETY: length checked above and `Self` has alignment 1.
        Ok(unsafe { Self::from_bytes_unchecked(data) })
    }

    pub fn from_account_info(account_info: &AccountInfo) -> Result<Ref<'_, Self>, ProgramError> {
        check_owner(account_info, &ID)?;
        let data = account_info.try_borrow_data()?;
        Self::load(&data)?;
        Ok(Ref::map(data, |data| unsafe { Self::from_bytes_unchecked(data) }))
    }

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
