//! Content fingerprinting -- SHA-256 digests for files and buffers.

use ring::digest::{Context, SHA256};
use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{IntegrityError, Result};

/// Chunk size for streaming reads. Keeps memory bounded no matter how
/// large the file is.
const CHUNK_SIZE: usize = 32 * 1024;

/// Fingerprint a file's bytes as a lowercase hex SHA-256 digest.
///
/// Identical bytes always yield the identical digest, independent of
/// scan time or machine; that stability is what makes baselines
/// comparable across runs.
///
/// # Errors
///
/// Returns `IntegrityError::Io` if the file cannot be opened or read.
/// Snapshot builders treat that as "unreadable" and skip the file
/// instead of aborting the scan.
pub async fn sha256_file(path: &Path) -> Result<String> {
    let path_str = path.display().to_string();
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| IntegrityError::io(&path_str, e))?;
    digest_reader(file)
        .await
        .map_err(|e| IntegrityError::io(&path_str, e))
}

/// Stream a reader through a SHA-256 context in fixed-size chunks.
async fn digest_reader<R>(mut reader: R) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut context = Context::new(&SHA256);
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut chunk).await? {
            0 => break,
            n => context.update(&chunk[..n]),
        }
    }
    Ok(hex::encode(context.finish()))
}

/// Fingerprint an in-memory buffer.
#[must_use]
pub fn sha256_bytes(data: &[u8]) -> String {
    hex::encode(ring::digest::digest(&SHA256, data))
}
