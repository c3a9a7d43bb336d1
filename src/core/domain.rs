use crate::core::library::{LibraryError, LibraryResult};

// Configuration abstracts config options for the books service
#[derive(Debug, PartialEq, Clone)]
pub(crate) struct Configuration {
    pub mongo_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub http_port: u16,
}

impl Configuration {
    pub fn new(mongo_uri: &str) -> Self {
        Configuration {
            mongo_uri: mongo_uri.to_string(),
            database_name: "library".to_string(),
            collection_name: "books".to_string(),
            http_port: 8080,
        }
    }

    // MONGO_URI is required, PORT optional. The process refuses to start
    // without a store address.
    pub fn from_env() -> LibraryResult<Self> {
        let mongo_uri = std::env::var("MONGO_URI")
            .map_err(|_| LibraryError::validation("MONGO_URI not set in environment", None))?;
        let mut config = Configuration::new(mongo_uri.as_str());
        if let Ok(port) = std::env::var("PORT") {
            config.http_port = port.parse()
                .map_err(|_| LibraryError::validation(
                    format!("invalid PORT value {}", port).as_str(), None))?;
        }
        Ok(config)
    }
}
