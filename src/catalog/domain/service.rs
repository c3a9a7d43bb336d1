use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub(crate) struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn get_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn get_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(id).await.map(|b| BookDto::from(&b))
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let created = self.book_repository.create(&BookEntity::try_from(book)?).await?;
        Ok(BookDto::from(&created))
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let updated = self.book_repository.update(&BookEntity::try_from(book)?).await?;
        Ok(BookDto::from(&updated))
    }

    // a zero-match delete is surfaced as not-found instead of silently
    // succeeding; repository errors pass through untouched
    async fn delete_book_by_id(&self, id: &str) -> LibraryResult<()> {
        let deleted = self.book_repository.delete(id).await?;
        if !deleted {
            return Err(LibraryError::not_found("libro no encontrado"));
        }
        Ok(())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.id.map(|object_id| object_id.to_hex()),
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
        }
    }
}

impl TryFrom<&BookDto> for BookEntity {
    type Error = LibraryError;

    fn try_from(other: &BookDto) -> Result<Self, Self::Error> {
        let id = match &other.id {
            Some(hex) => Some(ObjectId::parse_str(hex).map_err(LibraryError::from)?),
            None => None,
        };
        Ok(Self {
            id,
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
        })
    }
}
