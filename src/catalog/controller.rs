use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::books::dto::BookDto;
use crate::core::controller::{json_to_server_error, AppState, ServerError};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BooksEnvelope {
    pub message: String,
    pub books: Vec<BookDto>,
}

impl BooksEnvelope {
    pub fn new(message: &str, books: Vec<BookDto>) -> Self {
        Self {
            message: message.to_string(),
            books,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct BookEnvelope {
    pub message: String,
    pub book: BookDto,
}

impl BookEnvelope {
    pub fn new(message: &str, book: BookDto) -> Self {
        Self {
            message: message.to_string(),
            book,
        }
    }
}

pub(crate) fn books_routes(state: AppState) -> Router {
    Router::new()
        .route("/books", get(get_books).post(create_book))
        .route("/books/:id",
               get(get_book_by_id).put(update_book).delete(delete_book))
        .with_state(state)
}

pub(crate) async fn get_books(
    State(state): State<AppState>) -> Result<Json<BooksEnvelope>, ServerError> {
    let books = state.service.get_books().await.map_err(|err| {
        tracing::error!("failed to fetch books: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Error al obtener libros".to_string())
    })?;
    Ok(Json(BooksEnvelope::new("Libros obtenidos correctamente", books)))
}

pub(crate) async fn create_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<BookDto>), ServerError> {
    let book: BookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let created = state.service.add_book(&book).await.map_err(|err| {
        tracing::error!("failed to insert book: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Error al insertar libro".to_string())
    })?;
    Ok((StatusCode::CREATED, Json(created)))
}

// the read path collapses every failure, malformed identifier included, into
// a plain 404
pub(crate) async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>) -> Result<Json<BookEnvelope>, ServerError> {
    if id.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "ID no proporcionado".to_string()));
    }
    let book = state.service.get_book_by_id(id.as_str()).await.map_err(|err| {
        tracing::warn!("book lookup failed for {}: {}", id, err);
        (StatusCode::NOT_FOUND, "Libro no encontrado".to_string())
    })?;
    Ok(Json(BookEnvelope::new("Libro encontrado", book)))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    json: Json<Value>) -> Result<Json<BookEnvelope>, ServerError> {
    let mut book: BookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let object_id = ObjectId::parse_str(id.as_str())
        .map_err(|_| (StatusCode::BAD_REQUEST, "ID inválido".to_string()))?;
    // the identifier comes from the path; whatever the body carried is
    // discarded
    book.id = Some(object_id.to_hex());
    let updated = state.service.update_book(&book).await.map_err(|err| {
        tracing::error!("failed to update book {}: {}", id, err);
        (StatusCode::INTERNAL_SERVER_ERROR, "Error al actualizar libro".to_string())
    })?;
    Ok(Json(BookEnvelope::new("Libro actualizado correctamente", updated)))
}

pub(crate) async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>) -> Result<StatusCode, ServerError> {
    if id.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "ID no proporcionado".to_string()));
    }
    state.service.delete_book_by_id(id.as_str()).await?;
    Ok(StatusCode::NO_CONTENT)
}
