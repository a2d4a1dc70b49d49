pub mod constant;
pub mod cpi;
pub mod fees;
pub mod pda;
pub mod utils;

pub use constant::*;
pub use cpi::*;
pub use fees::*;
pub use pda::*;
pub use utils::*;
