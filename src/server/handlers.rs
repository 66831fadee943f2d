use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::AppState;
use super::response::MessageBody;
use crate::domain::{Contact, ContactBook, ContactPatch};
use crate::errors::AppError;

/// Runs a store operation on the blocking pool; the stores do plain file I/O.
async fn with_book<F, T>(book: &Arc<ContactBook>, op: F) -> Result<T, AppError>
where
    F: FnOnce(&ContactBook) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let book = Arc::clone(book);
    tokio::task::spawn_blocking(move || op(&book)).await?
}

/// `GET /api/contacts`
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = with_book(&state.book, |book| book.list()).await?;
    Ok(Json(contacts))
}

/// `POST /api/contacts`
///
/// All of `name`, `phone` and `email` must be present.
pub async fn add_contact(
    State(state): State<AppState>,
    payload: Result<Json<Contact>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let Json(contact) = payload?;

    let created = with_book(&state.book, move |book| book.create(contact)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/contacts/search/{name}`
pub async fn search_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Contact>, AppError> {
    let contact = with_book(&state.book, move |book| book.search(&name)).await?;
    Ok(Json(contact))
}

/// `DELETE /api/contacts/{name}`
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    let target = name.clone();
    with_book(&state.book, move |book| book.delete(&target)).await?;

    Ok(Json(MessageBody::new(format!("Contact '{}' deleted.", name))))
}

/// `PUT /api/contacts/{name}`
pub async fn update_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<ContactPatch>, JsonRejection>,
) -> Result<Json<MessageBody>, AppError> {
    let Json(patch) = payload?;

    let target = name.clone();
    with_book(&state.book, move |book| book.update(&target, patch)).await?;

    Ok(Json(MessageBody::new(format!(
        "Contact '{}' updated successfully.",
        name
    ))))
}
