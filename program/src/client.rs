//! Instruction data encoding for off-chain callers.
//!
//! Payloads use bincode's default layout (little endian, u64 length prefixed
//! strings), which is exactly what the program parses by hand.

use serde::{Deserialize, Serialize};

use crate::instruction::MarketplaceInstruction;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeArgs {
    pub fee_bps: u16,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListArgs {
    pub price: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawFeesArgs {
    pub lamports: u64,
}

fn encode<T: Serialize>(ix: MarketplaceInstruction, args: &T) -> Result<Vec<u8>, bincode::Error> {
    let mut data = vec![ix as u8];
    data.extend(bincode::serialize(args)?);
    Ok(data)
}

pub fn initialize_data(args: &InitializeArgs) -> Result<Vec<u8>, bincode::Error> {
    encode(MarketplaceInstruction::Initialize, args)
}

pub fn list_data(args: &ListArgs) -> Result<Vec<u8>, bincode::Error> {
    encode(MarketplaceInstruction::List, args)
}

pub fn delist_data() -> Vec<u8> {
    vec![MarketplaceInstruction::Delist as u8]
}

pub fn purchase_data() -> Vec<u8> {
    vec![MarketplaceInstruction::Purchase as u8]
}

pub fn withdraw_fees_data(args: &WithdrawFeesArgs) -> Result<Vec<u8>, bincode::Error> {
    encode(MarketplaceInstruction::WithdrawFees, args)
}
