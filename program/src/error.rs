use pinocchio::program_error::ProgramError;

/// Custom codes start where Anchor programs start theirs so existing clients
/// can keep decoding them.
pub const ERROR_CODE_OFFSET: u32 = 6000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum MarketplaceError {
    NameTooLong,
    NameEmpty,
    InvalidFee,
    InvalidPrice,
    InvalidSeeds,
    NotAnNft,
    InvalidTokenAccount,
    CollectionNotVerified,
    CollectionMismatch,
    InvalidMetadata,
    ListingMismatch,
    Unauthorized,
    SelfPurchase,
    MathOverflow,
}

impl MarketplaceError {
    pub const fn code(self) -> u32 {
        ERROR_CODE_OFFSET + self as u32
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: MarketplaceError) -> ProgramError {
    ProgramError::Custom(err.code())
}

impl From<MarketplaceError> for ProgramError {
    fn from(err: MarketplaceError) -> Self {
        to_program_error(err)
    }
}
