use chargemap::{location, shared::Coordinate};
use std::{env, path::PathBuf};

pub const PORT: u32 = 3000;

const LOCATION_VAR: &str = "CHARGEMAP_LOCATION";
const UPLOAD_URL_VAR: &str = "CHARGEMAP_UPLOAD_URL";
const UPLOAD_TOKEN_VAR: &str = "CHARGEMAP_UPLOAD_TOKEN";

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub url: String,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    /// Backs the location provider. None behaves like a denied permission.
    pub location: Option<Coordinate>,
    /// Snapshot uploads are only enabled when both url and token are set.
    pub upload: Option<UploadConfig>,
}

impl Config {
    pub fn new(dataset_path: PathBuf) -> Self {
        Self {
            dataset_path,
            location: None,
            upload: None,
        }
    }

    pub fn with_env(mut self) -> Self {
        self.location = env::var(LOCATION_VAR)
            .ok()
            .and_then(|value| location::parse_coordinate(&value));
        self.upload = match (env::var(UPLOAD_URL_VAR), env::var(UPLOAD_TOKEN_VAR)) {
            (Ok(url), Ok(token)) => Some(UploadConfig { url, token }),
            _ => None,
        };
        self
    }
}
