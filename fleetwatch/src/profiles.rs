//! Endpoint profiles: load/save a simple JSON mapping of profile name -> { url }
//! Stored under XDG config dir: $XDG_CONFIG_HOME/fleetwatch/profiles.json
//! (fallback ~/.config/fleetwatch/profiles.json)

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs, io, path::PathBuf};

/// Environment variable naming the API base URL.
pub const API_URL_ENV: &str = "FLEETWATCH_API_URL";

/// Local-development fallback when neither an argument, a profile, nor the
/// environment provides a base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProfileEntry {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileEntry>,
    #[serde(default)]
    pub version: u32,
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("fleetwatch")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fleetwatch")
    }
}

pub fn profiles_path() -> PathBuf {
    config_dir().join("profiles.json")
}

pub fn load_profiles() -> ProfilesFile {
    let path = profiles_path();
    match fs::read_to_string(&path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
        Err(_) => ProfilesFile::default(),
    }
}

pub fn save_profiles(p: &ProfilesFile) -> io::Result<()> {
    let path = profiles_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let data = serde_json::to_vec_pretty(p).map_err(io::Error::other)?;
    fs::write(path, data)
}

pub enum ResolveEndpoint {
    /// Use the provided runtime URL (not persisted).
    Direct(String),
    /// Loaded from an existing profile entry.
    Loaded(String),
    /// Should prompt user to select among profile names.
    PromptSelect(Vec<String>),
    /// Should prompt user to create a new profile (name).
    PromptCreate(String),
    /// Fall back to the environment / local-development default.
    Fallback(String),
}

pub struct EndpointRequest {
    pub profile_name: Option<String>,
    pub url: Option<String>,
}

impl EndpointRequest {
    pub fn resolve(self, pf: &ProfilesFile) -> ResolveEndpoint {
        // Only profile name given -> try load
        if self.url.is_none() {
            if let Some(name) = self.profile_name {
                return match pf.profiles.get(&name) {
                    Some(entry) => ResolveEndpoint::Loaded(entry.url.clone()),
                    None => ResolveEndpoint::PromptCreate(name),
                };
            }
        }
        // Explicit URL wins (maybe saved under a profile by the caller)
        if let Some(u) = self.url {
            return ResolveEndpoint::Direct(u);
        }
        // Nothing on the command line: offer saved profiles, else the
        // environment-supplied URL, else the local-development default
        if !pf.profiles.is_empty() {
            return ResolveEndpoint::PromptSelect(pf.profiles.keys().cloned().collect());
        }
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        ResolveEndpoint::Fallback(url)
    }
}
