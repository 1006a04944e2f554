//! fsentry - file integrity checker
//!
//! Fingerprints a directory tree, diffs it against the stored baseline,
//! and reports every new, modified, or deleted file.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    fsentry_cli::run().await
}
