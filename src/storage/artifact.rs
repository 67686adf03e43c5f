//! Binary artifact files for fitted model state.
//!
//! Artifacts are written as a small framed format: magic bytes, a format
//! version, the payload length, then a bincode-encoded payload. The
//! format is private to drachma; the only contract is round-trip
//! fidelity, which the version and magic checks protect.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DrachmaError, Result};

/// Magic bytes identifying a drachma artifact file.
const MAGIC: &[u8; 4] = b"DRMA";
/// Artifact format version (major, minor).
const VERSION: [u8; 2] = [1, 0];

/// Serialize a fitted artifact to a file.
///
/// The file handle is scoped to this function and closed on every exit
/// path; a write failure surfaces as [`DrachmaError::Persistence`] and
/// leaves no open handle behind. A partially written file fails the
/// magic/version check on load.
pub fn save_artifact<T: Serialize, P: AsRef<Path>>(path: P, artifact: &T) -> Result<()> {
    let path = path.as_ref();

    let payload = bincode::serde::encode_to_vec(artifact, bincode::config::standard())
        .map_err(|e| DrachmaError::persistence(format!("failed to serialize artifact: {e}")))?;

    let file = File::create(path).map_err(|e| {
        DrachmaError::persistence(format!("failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    let write = |writer: &mut BufWriter<File>, bytes: &[u8]| {
        writer.write_all(bytes).map_err(|e| {
            DrachmaError::persistence(format!("failed to write {}: {}", path.display(), e))
        })
    };

    write(&mut writer, MAGIC.as_slice())?;
    write(&mut writer, VERSION.as_slice())?;
    write(&mut writer, &(payload.len() as u64).to_le_bytes())?;
    write(&mut writer, &payload)?;

    writer.flush().map_err(|e| {
        DrachmaError::persistence(format!("failed to flush {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Deserialize a fitted artifact from a file.
///
/// Rejects files with an unknown magic or version, including files
/// truncated by a failed write.
pub fn load_artifact<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        DrachmaError::persistence(format!("failed to open {}: {}", path.display(), e))
    })?;
    let mut reader = BufReader::new(file);

    let read_exact = |reader: &mut BufReader<File>, buf: &mut [u8]| {
        reader.read_exact(buf).map_err(|e| {
            DrachmaError::persistence(format!("failed to read {}: {}", path.display(), e))
        })
    };

    let mut magic = [0u8; 4];
    read_exact(&mut reader, &mut magic)?;
    if &magic != MAGIC {
        return Err(DrachmaError::persistence(format!(
            "{} is not a drachma artifact",
            path.display()
        )));
    }

    let mut version = [0u8; 2];
    read_exact(&mut reader, &mut version)?;
    if version[0] != VERSION[0] {
        return Err(DrachmaError::persistence(format!(
            "unsupported artifact version: {}.{}",
            version[0], version[1]
        )));
    }

    let mut len_bytes = [0u8; 8];
    read_exact(&mut reader, &mut len_bytes)?;
    let payload_len = u64::from_le_bytes(len_bytes) as usize;

    let mut payload = vec![0u8; payload_len];
    read_exact(&mut reader, &mut payload)?;

    let (artifact, _) = bincode::serde::decode_from_slice(&payload, bincode::config::standard())
        .map_err(|e| {
            DrachmaError::persistence(format!("failed to deserialize artifact: {e}"))
        })?;

    Ok(artifact)
}
