pub mod memory_book_repository;
pub mod mongo_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // filtered scan by author, same ordering as find_all; not exposed over
    // HTTP but part of the repository contract
    #[allow(dead_code)]
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>>;
}
