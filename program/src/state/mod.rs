pub mod listing;         // Listing
pub mod marketplace;     // Marketplace
pub mod metadata;        // TokenMetadata, Collection (read-only, external)

// Re-export the types so everyone can `use crate::state::{...}`.
pub use listing::Listing;
pub use marketplace::Marketplace;
pub use metadata::{Collection, TokenMetadata};

/// First byte of every account this program owns.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountDiscriminator {
    Uninitialized = 0,
    Marketplace = 1,
    Listing = 2,
}
