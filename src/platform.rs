use std::path::PathBuf;

pub fn is_windows() -> bool {
    cfg!(target_os = "windows")
}

pub fn is_mac() -> bool {
    cfg!(target_os = "macos")
}

pub fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

/// The current user's home directory, from `USERPROFILE` on Windows and
/// `HOME` elsewhere. Unset or empty variables yield `None`.
pub fn home_dir() -> Option<PathBuf> {
    let var = if is_windows() { "USERPROFILE" } else { "HOME" };
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
