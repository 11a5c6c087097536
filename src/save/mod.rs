//! Persistence: the snapshot record and the checksummed save file.

mod manager;
mod snapshot;

pub use manager::{decode_frame, encode_frame, SaveError, SaveManager};
pub use snapshot::Snapshot;
