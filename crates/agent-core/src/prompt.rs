//! Instruction prompt helpers.

use std::path::Path;

use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an instruction string.
///
/// Lets deployments tell which instruction revision an agent was registered
/// with without shipping the whole text around.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Load an instruction file, returning None if missing or empty.
pub fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let content = std::fs::read_to_string(path.as_ref()).ok()?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
