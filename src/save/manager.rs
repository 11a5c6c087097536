use super::snapshot::Snapshot;
use crate::core::constants::{SAVE_FILE_NAME, SAVE_VERSION_MAGIC};
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const MAGIC_LEN: usize = 8;
const LENGTH_LEN: usize = 4;
const CHECKSUM_LEN: usize = 32;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save payload is not valid JSON: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    BadMagic { expected: u64, found: u64 },
    #[error("save file is truncated")]
    Truncated,
    #[error("checksum verification failed")]
    ChecksumMismatch,
}

fn checksum(magic: &[u8], length: &[u8], payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(magic);
    hasher.update(length);
    hasher.update(payload);
    hasher.finalize().into()
}

/// Wraps `payload` in the on-disk frame.
///
/// File format:
/// - Version magic (8 bytes, little endian)
/// - Payload length (4 bytes, little endian)
/// - JSON payload (variable length)
/// - SHA256 over the three fields above (32 bytes)
pub fn encode_frame(payload: &[u8]) -> Result<Vec<u8>, SaveError> {
    let length = u32::try_from(payload.len()).map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "save payload exceeds 4 GiB")
    })?;
    let magic = SAVE_VERSION_MAGIC.to_le_bytes();
    let length = length.to_le_bytes();

    let mut frame = Vec::with_capacity(MAGIC_LEN + LENGTH_LEN + payload.len() + CHECKSUM_LEN);
    frame.extend_from_slice(&magic);
    frame.extend_from_slice(&length);
    frame.extend_from_slice(payload);
    frame.extend_from_slice(&checksum(&magic, &length, payload));
    Ok(frame)
}

/// Verifies a frame and returns the payload inside it.
pub fn decode_frame(bytes: &[u8]) -> Result<&[u8], SaveError> {
    if bytes.len() < MAGIC_LEN + LENGTH_LEN {
        return Err(SaveError::Truncated);
    }
    let (magic, rest) = bytes.split_at(MAGIC_LEN);
    let (length, rest) = rest.split_at(LENGTH_LEN);

    let mut magic_bytes = [0u8; MAGIC_LEN];
    magic_bytes.copy_from_slice(magic);
    let found = u64::from_le_bytes(magic_bytes);
    if found != SAVE_VERSION_MAGIC {
        return Err(SaveError::BadMagic {
            expected: SAVE_VERSION_MAGIC,
            found,
        });
    }

    let mut length_bytes = [0u8; LENGTH_LEN];
    length_bytes.copy_from_slice(length);
    let payload_len = u32::from_le_bytes(length_bytes) as usize;
    if rest.len() < payload_len + CHECKSUM_LEN {
        return Err(SaveError::Truncated);
    }

    let (payload, rest) = rest.split_at(payload_len);
    let stored = &rest[..CHECKSUM_LEN];
    if stored != checksum(magic, length, payload).as_slice() {
        return Err(SaveError::ChecksumMismatch);
    }
    Ok(payload)
}

/// Reads and writes the single save slot.
pub struct SaveManager {
    save_dir: PathBuf,
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager in the platform config directory
    /// (via the `directories` crate), creating it if needed.
    pub fn new() -> Result<Self, SaveError> {
        let project_dirs = ProjectDirs::from("", "", "clicker").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;
        Self::new_in(project_dirs.config_dir())
    }

    /// Creates a SaveManager rooted at `dir`.
    pub fn new_in(dir: &Path) -> Result<Self, SaveError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            save_dir: dir.to_path_buf(),
            save_path: dir.join(SAVE_FILE_NAME),
        })
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes `snapshot`, replacing the previous save.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), SaveError> {
        let frame = encode_frame(&snapshot.to_json_vec()?)?;

        // Write beside the real file first so a crash never leaves half a save
        let tmp_path = self.save_path.with_extension("tmp");
        fs::write(&tmp_path, &frame)?;
        fs::rename(&tmp_path, &self.save_path)?;

        info!(path = %self.save_path.display(), bytes = frame.len(), "game saved");
        Ok(())
    }

    /// Loads the save.
    ///
    /// `Ok(None)` means there is nothing usable to restore: no file, or a
    /// payload that is valid JSON but not a snapshot object.
    pub fn load(&self) -> Result<Option<Snapshot>, SaveError> {
        let bytes = match fs::read(&self.save_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let payload = decode_frame(&bytes).map_err(|e| {
            warn!(path = %self.save_path.display(), error = %e, "rejected save file");
            e
        })?;

        let snapshot = Snapshot::from_json_slice(payload)?;
        match &snapshot {
            Some(s) => info!(level = s.level, gold = s.gold, souls = s.souls, "game loaded"),
            None => warn!("save payload is not an object, starting fresh"),
        }
        Ok(snapshot)
    }

    /// Deletes the save. Missing files are not an error.
    pub fn clear(&self) -> Result<(), SaveError> {
        match fs::remove_file(&self.save_path) {
            Ok(()) => {
                info!("save cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
