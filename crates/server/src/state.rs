use crate::config::UploadConfig;
use chargemap::engine::Session;
use tokio::sync::RwLock;

pub struct AppState {
    pub session: RwLock<Session>,
    pub upload: Option<UploadConfig>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(session: Session, upload: Option<UploadConfig>) -> Self {
        Self {
            session: RwLock::new(session),
            upload,
            client: reqwest::Client::new(),
        }
    }
}
