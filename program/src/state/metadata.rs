//! Read-only view of Metaplex token metadata accounts.
//!
//! Metadata is borsh encoded with variable length strings, so only the prefix
//! up to `collection` is walked and everything else is skipped.

use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::error::MarketplaceError;
use crate::helpers::{check_owner, TOKEN_METADATA_PROGRAM_ID};

pub const KEY_MASTER_EDITION_V1: u8 = 2;
pub const KEY_METADATA_V1: u8 = 4;
pub const KEY_MASTER_EDITION_V2: u8 = 6;

/// Bytes per entry of the optional creators vector: address, verified, share.
const CREATOR_LEN: usize = 32 + 1 + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    pub verified: bool,
    pub key: Pubkey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenMetadata {
    pub update_authority: Pubkey,
    pub mint: Pubkey,
    pub collection: Option<Collection>,
}

impl TokenMetadata {
    pub fn parse(data: &[u8]) -> Result<Self, ProgramError> {
        let mut reader = BorshReader::new(data);

        if reader.read_u8()? != KEY_METADATA_V1 {
            return Err(MarketplaceError::InvalidMetadata.into());
        }
        let update_authority = reader.read_pubkey()?;
        let mint = reader.read_pubkey()?;

        // name, symbol, uri
        for _ in 0..3 {
            let len = reader.read_u32()? as usize;
            reader.skip(len)?;
        }
        // seller_fee_basis_points
        reader.skip(2)?;
        if reader.read_option_tag()? {
            let creators = reader.read_u32()? as usize;
            reader.skip(
                creators
                    .checked_mul(CREATOR_LEN)
                    .ok_or(MarketplaceError::InvalidMetadata)?,
            )?;
        }
        // primary_sale_happened, is_mutable
        reader.skip(2)?;
        // edition_nonce, token_standard
        for _ in 0..2 {
            if reader.read_option_tag()? {
                reader.skip(1)?;
            }
        }

        let collection = if reader.read_option_tag()? {
            let verified = reader.read_bool()?;
            let key = reader.read_pubkey()?;
            Some(Collection { verified, key })
        } else {
            None
        };

        Ok(Self {
            update_authority,
            mint,
            collection,
        })
    }

    pub fn from_account_info(account_info: &AccountInfo) -> Result<Self, ProgramError> {
        check_owner(account_info, &TOKEN_METADATA_PROGRAM_ID)?;
        let data = account_info.try_borrow_data()?;
        Self::parse(&data)
    }

    /// The NFT must belong to `collection_mint` and the collection authority
    /// must have verified it.
    pub fn check_collection(&self, collection_mint: &Pubkey) -> Result<(), ProgramError> {
        match self.collection {
            Some(Collection { key, .. }) if key != *collection_mint => {
                Err(MarketplaceError::CollectionMismatch.into())
            }
            Some(Collection { verified: false, .. }) => {
                Err(MarketplaceError::CollectionNotVerified.into())
            }
            Some(_) => Ok(()),
            None => Err(MarketplaceError::CollectionMismatch.into()),
        }
    }
}

/// Master edition accounts prove the mint is a one-of-one NFT.
pub fn check_master_edition(account_info: &AccountInfo) -> Result<(), ProgramError> {
    check_owner(account_info, &TOKEN_METADATA_PROGRAM_ID)?;
    let data = account_info.try_borrow_data()?;
    match data.first() {
        Some(&KEY_MASTER_EDITION_V1) | Some(&KEY_MASTER_EDITION_V2) => Ok(()),
        _ => Err(MarketplaceError::InvalidMetadata.into()),
    }
}

struct BorshReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> BorshReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ProgramError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(MarketplaceError::InvalidMetadata)?;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or(MarketplaceError::InvalidMetadata)?;
        self.offset = end;
        Ok(bytes)
    }

    fn skip(&mut self, len: usize) -> Result<(), ProgramError> {
        self.take(len).map(|_| ())
    }

    fn read_u8(&mut self) -> Result<u8, ProgramError> {
        Ok(self.take(1)?[0])
    }

    fn read_bool(&mut self) -> Result<bool, ProgramError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(MarketplaceError::InvalidMetadata.into()),
        }
    }

    fn read_option_tag(&mut self) -> Result<bool, ProgramError> {
        self.read_bool()
    }

    fn read_u32(&mut self) -> Result<u32, ProgramError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn read_pubkey(&mut self) -> Result<Pubkey, ProgramError> {
        let mut key = [0u8; 32];
        key.copy_from_slice(self.take(32)?);
        Ok(key)
    }
}
