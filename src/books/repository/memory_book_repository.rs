use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use parking_lot::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// In-memory stand-in for the MongoDB collection with the same observable
// semantics, including hex-identifier validation. Backs tests and local runs
// without a store instance.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<HashMap<ObjectId, BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().values().cloned().collect())
    }

    async fn create(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut book = entity.clone();
        let object_id = ObjectId::new();
        book.id = Some(object_id);
        self.books.write().insert(object_id, book.clone());
        Ok(book)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let object_id = ObjectId::parse_str(id).map_err(LibraryError::from)?;
        self.books.read().get(&object_id).cloned()
            .ok_or_else(|| LibraryError::not_found(format!("book not found for {}", id).as_str()))
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let object_id = entity.id
            .ok_or_else(|| LibraryError::validation("book id is required for update", None))?;
        // replace-if-exists, matching the store's zero-match behavior
        if let Some(existing) = self.books.write().get_mut(&object_id) {
            *existing = entity.clone();
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: &str) -> LibraryResult<bool> {
        let object_id = ObjectId::parse_str(id).map_err(LibraryError::from)?;
        Ok(self.books.write().remove(&object_id).is_some())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().values()
            .filter(|book| book.author == author)
            .cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("isbn", "test book", "test author");
        let created = books_repo.create(&book).await.expect("should create book");
        let id = created.id.expect("should assign id");

        let loaded = books_repo.get(id.to_hex().as_str()).await.expect("should return book");
        assert_eq!(created, loaded);
        assert_eq!(book.isbn, loaded.isbn);
        assert_eq!(book.title, loaded.title);
        assert_eq!(book.author, loaded.author);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_id() {
        let books_repo = MemoryBookRepository::new();
        let res = books_repo.get("no-es-hex").await;
        assert!(matches!(res, Err(LibraryError::Validation { message: _, reason_code: _ })));

        let res = books_repo.delete("no-es-hex").await;
        assert!(matches!(res, Err(LibraryError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_report_missing_book() {
        let books_repo = MemoryBookRepository::new();
        // well-formed identifier with no matching document
        let res = books_repo.get("64b7f1a2c9e77b2a9c0d4e5f").await;
        assert!(matches!(res, Err(LibraryError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("isbn", "test book", "test author");
        let mut created = books_repo.create(&book).await.expect("should create book");

        created.title = "new title".to_string();
        let updated = books_repo.update(&created).await.expect("should update book");
        assert_eq!("new title", updated.title.as_str());

        let id = created.id.expect("should assign id");
        let loaded = books_repo.get(id.to_hex().as_str()).await.expect("should return book");
        assert_eq!("new title", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_require_id_for_update() {
        let books_repo = MemoryBookRepository::new();
        let res = books_repo.update(&BookEntity::new("isbn", "test book", "test author")).await;
        assert!(matches!(res, Err(LibraryError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_create_delete_books() {
        let books_repo = MemoryBookRepository::new();
        let book = BookEntity::new("isbn", "test book", "test author");
        let created = books_repo.create(&book).await.expect("should create book");
        let id = created.id.expect("should assign id").to_hex();

        let deleted = books_repo.delete(id.as_str()).await.expect("should delete book");
        assert!(deleted);

        // second delete matches nothing and reports false rather than erroring
        let deleted = books_repo.delete(id.as_str()).await.expect("should not error");
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_should_find_all_books() {
        let books_repo = MemoryBookRepository::new();
        assert!(books_repo.find_all().await.expect("should list books").is_empty());

        for i in 0..5 {
            let book = BookEntity::new(format!("isbn_{}", i).as_str(), "test book", "test author");
            let _ = books_repo.create(&book).await.expect("should create book");
        }
        let all = books_repo.find_all().await.expect("should list books");
        assert_eq!(5, all.len());
    }

    #[tokio::test]
    async fn test_should_find_books_by_author() {
        let books_repo = MemoryBookRepository::new();
        let _ = books_repo.create(&BookEntity::new("isbn1", "uno", "Borges")).await.expect("should create book");
        let _ = books_repo.create(&BookEntity::new("isbn2", "dos", "Borges")).await.expect("should create book");
        let _ = books_repo.create(&BookEntity::new("isbn3", "tres", "Cortázar")).await.expect("should create book");

        let res = books_repo.find_by_author("Borges").await.expect("should return books");
        assert_eq!(2, res.len());
        let res = books_repo.find_by_author("nadie").await.expect("should return books");
        assert!(res.is_empty());
    }
}
