use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // all entities in the collection, natural cursor order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;

    // inserts an entity, assigning its identifier; returns the stored copy
    async fn create(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity by its identifier
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // whole-document replace keyed by the entity identifier
    async fn update(&self, entity: &Entity) -> LibraryResult<Entity>;

    // delete by identifier; true when a document was removed
    async fn delete(&self, id: &str) -> LibraryResult<bool>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum RepositoryStore {
    MongoDb,
    InMemory,
}
