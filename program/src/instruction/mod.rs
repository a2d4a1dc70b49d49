use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod delist;
pub mod initialize;
pub mod list;
pub mod purchase;
pub mod withdraw_fees;

pub use delist::*;
pub use initialize::*;
pub use list::*;
pub use purchase::*;
pub use withdraw_fees::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum MarketplaceInstruction {
    /// Create a marketplace, its treasury and its rewards mint.
    #[account(0, writable, signer, name = "admin", desc = "Marketplace admin, pays for the accounts")]
    #[account(1, writable, name = "marketplace", desc = "PDA [\"marketplace\", name]")]
    #[account(2, writable, name = "treasury", desc = "PDA [\"treasury\", marketplace]")]
    #[account(3, writable, name = "rewards_mint", desc = "PDA [\"rewards\", marketplace]")]
    #[account(4, name = "system_program", desc = "System program")]
    #[account(5, name = "token_program", desc = "SPL Token program")]
    Initialize,

    /// Escrow an NFT from a verified collection and offer it for sale.
    #[account(0, writable, signer, name = "maker", desc = "Seller")]
    #[account(1, name = "marketplace", desc = "Marketplace")]
    #[account(2, name = "maker_mint", desc = "NFT mint")]
    #[account(3, writable, name = "maker_ata", desc = "Seller token account holding the NFT")]
    #[account(4, writable, name = "vault", desc = "PDA [\"vault\", listing]")]
    #[account(5, writable, name = "listing", desc = "PDA [marketplace, mint]")]
    #[account(6, name = "collection_mint", desc = "Collection the NFT must belong to")]
    #[account(7, name = "metadata", desc = "Token metadata of the NFT")]
    #[account(8, name = "edition", desc = "Master edition of the NFT")]
    #[account(9, name = "metadata_program", desc = "Token metadata program")]
    #[account(10, name = "system_program", desc = "System program")]
    #[account(11, name = "token_program", desc = "SPL Token program")]
    List,

    /// Cancel a listing and return the NFT to the seller.
    #[account(0, writable, signer, name = "maker", desc = "Seller")]
    #[account(1, name = "marketplace", desc = "Marketplace")]
    #[account(2, name = "maker_mint", desc = "NFT mint")]
    #[account(3, writable, name = "maker_ata", desc = "Seller token account")]
    #[account(4, writable, name = "vault", desc = "Escrow token account")]
    #[account(5, writable, name = "listing", desc = "Listing")]
    #[account(6, name = "token_program", desc = "SPL Token program")]
    Delist,

    /// Buy a listed NFT at its asking price.
    #[account(0, writable, signer, name = "buyer", desc = "Buyer")]
    #[account(1, writable, name = "maker", desc = "Seller, receives proceeds and rent")]
    #[account(2, name = "marketplace", desc = "Marketplace")]
    #[account(3, name = "maker_mint", desc = "NFT mint")]
    #[account(4, writable, name = "buyer_ata", desc = "Buyer token account for the NFT")]
    #[account(5, writable, name = "vault", desc = "Escrow token account")]
    #[account(6, writable, name = "listing", desc = "Listing")]
    #[account(7, writable, name = "treasury", desc = "Marketplace treasury")]
    #[account(8, name = "system_program", desc = "System program")]
    #[account(9, name = "token_program", desc = "SPL Token program")]
    Purchase,

    /// Move collected fees out of the treasury.
    #[account(0, writable, signer, name = "admin", desc = "Marketplace admin")]
    #[account(1, name = "marketplace", desc = "Marketplace")]
    #[account(2, writable, name = "treasury", desc = "Marketplace treasury")]
    #[account(3, name = "system_program", desc = "System program")]
    WithdrawFees,
}

impl TryFrom<&u8> for MarketplaceInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(MarketplaceInstruction::Initialize),
            1 => Ok(MarketplaceInstruction::List),
            2 => Ok(MarketplaceInstruction::Delist),
            3 => Ok(MarketplaceInstruction::Purchase),
            4 => Ok(MarketplaceInstruction::WithdrawFees),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

/// Payload of `Initialize`: `fee_bps: u16`, then the name as a u64 length
/// prefix followed by UTF-8 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitializeData<'a> {
    pub fee_bps: u16,
    pub name: &'a [u8],
}

impl<'a> InitializeData<'a> {
    pub fn parse(payload: &'a [u8]) -> Result<Self, ProgramError> {
        if payload.len() < 10 {
            return Err(ProgramError::InvalidInstructionData);
        }
        let fee_bps = u16::from_le_bytes([payload[0], payload[1]]);
        let name_len = read_u64(&payload[2..10])?;
        let name = &payload[10..];
        if name_len != name.len() as u64 {
            return Err(ProgramError::InvalidInstructionData);
        }
        if core::str::from_utf8(name).is_err() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(Self { fee_bps, name })
    }
}

// Helper for u64 payloads (price, lamports)
pub fn read_u64(data: &[u8]) -> Result<u64, ProgramError> {
    let bytes: [u8; 8] = data
        .try_into()
        .map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok(u64::from_le_bytes(bytes))
}

pub fn expect_empty(data: &[u8]) -> Result<(), ProgramError> {
    if !data.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }
    Ok(())
}
