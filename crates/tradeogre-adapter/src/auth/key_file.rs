/*
[INPUT]:  Path to a two-line key file (key, then secret)
[OUTPUT]: Credentials read from or written to disk
[POS]:    Auth layer - persistent storage for API key pairs
[UPDATE]: When key file format changes
*/

use std::fs;
use std::path::Path;

use crate::auth::Credentials;
use crate::http::{Result, TradeOgreError};

/// Read credentials from a key file
///
/// Line 1 is the key, line 2 the secret, each trimmed. A missing line reads
/// as an empty string; emptiness is not validated.
pub fn read_key_file(path: impl AsRef<Path>) -> Result<Credentials> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| TradeOgreError::key_file(path, e))?;

    let mut lines = content.lines();
    let key = lines.next().unwrap_or_default().trim().to_string();
    let secret = lines.next().unwrap_or_default().trim().to_string();

    Ok(Credentials::new(key, secret))
}

/// Write credentials in the format [`read_key_file`] expects
///
/// Parent directories are created; on unix the file is made owner-only.
pub fn write_key_file(path: impl AsRef<Path>, credentials: &Credentials) -> Result<()> {
    let path = path.as_ref();
    let (key, secret) = credentials
        .pair()
        .ok_or(TradeOgreError::MissingCredentials)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TradeOgreError::key_file(path, e))?;
    }

    fs::write(path, format!("{key}\n{secret}\n")).map_err(|e| TradeOgreError::key_file(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)
            .map_err(|e| TradeOgreError::key_file(path, e))?
            .permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms).map_err(|e| TradeOgreError::key_file(path, e))?;
    }

    Ok(())
}
