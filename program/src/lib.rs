#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint;

#[cfg(feature = "std")]
pub mod client;

pub mod error;
pub mod helpers;
pub mod instruction;
pub mod state;

pinocchio_pubkey::declare_id!("MktpLcEn9qVxHBbM4bCqD5yF8Rw2ZsTuJg3oAehWXAm");
