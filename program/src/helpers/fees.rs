use pinocchio::program_error::ProgramError;

use crate::error::MarketplaceError;
use crate::helpers::constant::FEE_DENOMINATOR_BPS;

/// How a sale price is divided between the seller and the marketplace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaleSplit {
    pub fee: u64,
    pub proceeds: u64,
}

#[inline]
pub fn validate_fee_bps(fee_bps: u16) -> Result<(), ProgramError> {
    if u64::from(fee_bps) > FEE_DENOMINATOR_BPS {
        return Err(MarketplaceError::InvalidFee.into());
    }
    Ok(())
}

/// Marketplace fee rounds down, so the seller never receives less than
/// `price - price * fee_bps / 10_000`.
pub fn split_sale_price(price: u64, fee_bps: u16) -> Result<SaleSplit, ProgramError> {
    validate_fee_bps(fee_bps)?;

    let fee = (u128::from(price) * u128::from(fee_bps)) / u128::from(FEE_DENOMINATOR_BPS);
    let fee = u64::try_from(fee).map_err(|_| MarketplaceError::MathOverflow)?;
    let proceeds = price
        .checked_sub(fee)
        .ok_or(MarketplaceError::MathOverflow)?;

    Ok(SaleSplit { fee, proceeds })
}
