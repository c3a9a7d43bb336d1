use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::books::repository::mongo_book_repository::MongoBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::mongo::build_db_client;

pub(crate) async fn create_book_repository(config: &Configuration,
                                           store: RepositoryStore) -> LibraryResult<Box<dyn BookRepository>> {
    match store {
        RepositoryStore::MongoDb => {
            let client = build_db_client(config).await?;
            let collection = client
                .database(config.database_name.as_str())
                .collection::<BookEntity>(config.collection_name.as_str());
            Ok(Box::new(MongoBookRepository::new(collection)))
        }
        RepositoryStore::InMemory => {
            Ok(Box::new(MemoryBookRepository::new()))
        }
    }
}
