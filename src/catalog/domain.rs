pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// The capability seam the controller depends on; tests substitute an
// implementation backed by the in-memory repository.
#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn get_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn get_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn delete_book_by_id(&self, id: &str) -> LibraryResult<()>;
}
