//! Domain Entities
//!
//! - `KeyEntry` - One declared key and its raw value
//! - `KeySnapshot` - The ordered entries of one read of the watched document

mod key_entry;
mod snapshot;

pub use key_entry::KeyEntry;
pub use snapshot::KeySnapshot;
