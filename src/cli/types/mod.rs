//! Type-safe wrappers for WoT Blitz clans CLI arguments.

pub mod fields;
pub mod ids;
pub mod region;

pub use fields::FieldList;
pub use ids::{join_ids, AccountId, ClanId, IdList};
pub use region::Region;
