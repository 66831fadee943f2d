//! JSON HTTP API over a [`ContactBook`].
//!
//! | Method   | Path                          | Success              |
//! |----------|-------------------------------|----------------------|
//! | `GET`    | `/api/contacts`               | 200, all contacts    |
//! | `POST`   | `/api/contacts`               | 201, created contact |
//! | `GET`    | `/api/contacts/search/{name}` | 200, first match     |
//! | `PUT`    | `/api/contacts/{name}`        | 200, `{message}`     |
//! | `DELETE` | `/api/contacts/{name}`        | 200, `{message}`     |
//!
//! Name lookups that match nothing answer 404 with `{message}`. Any other
//! failure answers a generic 500.

pub mod handlers;
pub mod response;

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::domain::ContactBook;
use crate::errors::AppError;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub book: Arc<ContactBook>,
}

/// Builds the application router with all contact routes nested under `/api`.
pub fn router(book: Arc<ContactBook>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let contacts = Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts).post(handlers::add_contact),
        )
        .route("/contacts/search/{name}", get(handlers::search_contact))
        .route(
            "/contacts/{name}",
            put(handlers::update_contact).delete(handlers::delete_contact),
        );

    Router::new()
        .nest("/api", contacts)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { book })
}

/// Serves the API on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, book: Arc<ContactBook>) -> Result<(), AppError> {
    tracing::info!(
        addr = %listener.local_addr()?,
        medium = book.medium(),
        "contact book listening"
    );

    axum::serve(listener, router(book)).await?;
    Ok(())
}
