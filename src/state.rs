use crate::client::ApiClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }
}
