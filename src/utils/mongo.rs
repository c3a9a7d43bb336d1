use mongodb::options::ClientOptions;
use mongodb::Client;

use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) async fn build_db_client(config: &Configuration) -> LibraryResult<Client> {
    let options = ClientOptions::parse(config.mongo_uri.as_str())
        .await.map_err(LibraryError::from)?;
    Client::with_options(options).map_err(LibraryError::from)
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .json()
        .init();
}

impl From<mongodb::error::Error> for LibraryError {
    fn from(err: mongodb::error::Error) -> Self {
        LibraryError::database(
            format!("mongo database error {}", err).as_str(),
            Some(format!("{:?}", err.kind)))
    }
}

impl From<mongodb::bson::oid::Error> for LibraryError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        LibraryError::validation(
            format!("invalid object id {}", err).as_str(), None)
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::oid::ObjectId;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::utils::mongo::build_db_client;

    #[tokio::test]
    async fn test_should_build_client_from_valid_uri() {
        // connections are lazy, parsing alone never reaches the network
        let config = Configuration::new("mongodb://localhost:27017");
        assert!(build_db_client(&config).await.is_ok());
    }

    #[tokio::test]
    async fn test_should_reject_malformed_uri() {
        let config = Configuration::new("not-a-mongo-uri");
        assert!(build_db_client(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_should_convert_oid_error_to_validation() {
        let err = ObjectId::parse_str("no-es-hex").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Validation { message: _, reason_code: _ }));
    }
}
