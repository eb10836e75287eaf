//! Shared service construction for all platforms.
//!
//! Builds the session store, API client, auth controller and notes manager once
//! per app, backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Native**: a file under the platform data dir via [`store::FileTokenStore`]
//! - **WASM without `web`**: [`store::MemoryTokenStore`] (session lasts one page load)

use api::{AuthController, HttpTransport, NotesManager};
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokenStore = store::MemoryTokenStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStore = store::FileTokenStore;

pub type Auth = AuthController<HttpTransport, PlatformTokenStore>;
pub type Notes = NotesManager<HttpTransport, PlatformTokenStore>;

/// Compile-time override for the backend URL.
const API_URL_ENV: Option<&str> = option_env!("NOTEBOOK_API_URL");

/// Everything the views need to talk to the backend. Cheap to clone.
#[derive(Clone)]
pub struct Services {
    pub auth: Auth,
    pub notes: Notes,
}

/// Create the services from the platform configuration.
pub fn make_services() -> Services {
    make_services_with(load_config())
}

/// Create the services for an explicit configuration.
pub fn make_services_with(config: ClientConfig) -> Services {
    tracing::info!(base_url = %config.api.base_url, "connecting to notes backend");
    let session = store::SessionStore::initialize(make_token_store(&config));
    let client = api::ApiClient::new(HttpTransport::new(), config.api.base_url, session);
    let auth = AuthController::new(client);
    let notes = NotesManager::new(auth.clone());
    Services { auth, notes }
}

fn make_token_store(config: &ClientConfig) -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::with_key(&config.storage.token_key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = config;
        store::MemoryTokenStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("notebook");
        store::FileTokenStore::with_key(base, &config.storage.token_key)
    }
}

/// Platform configuration, with the compile-time URL override applied last.
pub fn load_config() -> ClientConfig {
    let mut config = read_config_file().unwrap_or_default();
    if let Some(url) = API_URL_ENV.filter(|u| !u.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    config
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<ClientConfig> {
    let path = dirs::config_dir()?
        .join("notebook")
        .join(ClientConfig::filename());
    let text = std::fs::read_to_string(&path).ok()?;
    match ClientConfig::from_toml(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> Option<ClientConfig> {
    None
}
