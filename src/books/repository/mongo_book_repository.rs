use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Collection;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

#[derive(Debug, Clone)]
pub struct MongoBookRepository {
    collection: Collection<BookEntity>,
}

impl MongoBookRepository {
    pub(crate) fn new(collection: Collection<BookEntity>) -> Self {
        Self {
            collection,
        }
    }

    async fn find_books(&self, filter: mongodb::bson::Document) -> LibraryResult<Vec<BookEntity>> {
        let mut cursor = self.collection
            .find(filter, None)
            .await.map_err(LibraryError::from)?;
        let mut books = Vec::new();
        while let Some(book) = cursor.try_next().await.map_err(LibraryError::from)? {
            books.push(book);
        }
        Ok(books)
    }
}

#[async_trait]
impl Repository<BookEntity> for MongoBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        self.find_books(doc! {}).await
    }

    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        // the identifier is assigned here, never taken from the caller
        let mut book = entity.clone();
        book.id = Some(ObjectId::new());
        self.collection
            .insert_one(&book, None)
            .await.map_err(LibraryError::from)?;
        Ok(book)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let object_id = ObjectId::parse_str(id).map_err(LibraryError::from)?;
        self.collection
            .find_one(doc! { "_id": object_id }, None)
            .await.map_err(LibraryError::from)?
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let object_id = entity.id
            .ok_or_else(|| LibraryError::validation("book id is required for update", None))?;
        // replace-if-exists: a zero-match replace is not an error
        self.collection
            .replace_one(doc! { "_id": object_id }, entity, None)
            .await.map_err(LibraryError::from)?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: &str) -> LibraryResult<bool> {
        let object_id = ObjectId::parse_str(id).map_err(LibraryError::from)?;
        let res = self.collection
            .delete_one(doc! { "_id": object_id }, None)
            .await.map_err(LibraryError::from)?;
        Ok(res.deleted_count > 0)
    }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        self.find_books(doc! { "author": author }).await
    }
}
