//! HTTP server exposing the catalog as paginated collections

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::{parse_date, CatalogStore};
use crate::error::{Error, Result};
use crate::pagination::{Page, PageQuery, Paginator};
use crate::types::OptionStringExt;

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    store: Arc<CatalogStore>,
}

/// Query parameters for day-scoped, paginated endpoints
#[derive(Debug, Clone, Default, Deserialize)]
struct DayQuery {
    /// Day to look at (YYYY-MM-DD)
    date: Option<String>,
    /// Requested page size
    limit: Option<String>,
    /// Requested page number
    page: Option<String>,
}

impl DayQuery {
    fn paging(&self) -> PageQuery {
        PageQuery {
            limit: self.limit.clone(),
            page: self.page.clone(),
        }
    }

    /// Parsed date; empty strings count as absent
    fn date(&self) -> Result<Option<NaiveDate>> {
        self.date
            .clone()
            .none_if_empty()
            .map(|raw| parse_date(&raw))
            .transpose()
    }
}

/// Build the application router
pub fn app(store: Arc<CatalogStore>) -> Router {
    let state = AppState { store };

    // Allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/meals", get(list_meals))
        .route("/menu", get(get_menu))
        .route("/orders", get(list_orders))
        .route("/orders/summary", get(orders_summary))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(store: Arc<CatalogStore>, port: u16) -> Result<()> {
    let router = app(store);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}

/// List meals, paginated
async fn list_meals(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Response {
    let page = Paginator::new("meals", state.store.meals())
        .with_query(&query)
        .page();
    page_response(page)
}

/// Get the menu for a day, its meals paginated
///
/// A day without a menu answers 200 with a message body; the collection being
/// absent is not a request failure.
async fn get_menu(State(state): State<AppState>, Query(query): Query<DayQuery>) -> Response {
    let date = match query.date() {
        Ok(date) => date.unwrap_or_else(today),
        Err(e) => return error_response(&e),
    };

    let Some(menu) = state.store.menu_for_day(date) else {
        return (
            StatusCode::OK,
            Json(json!({ "message": "No menu is available for this day" })),
        )
            .into_response();
    };

    let page = Paginator::new("meals", &menu.meals)
        .with_query(&query.paging())
        .page();
    match page.into_body() {
        Ok(mut body) => {
            body["date"] = json!(date);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// List orders, paginated; optionally scoped to one day
async fn list_orders(State(state): State<AppState>, Query(query): Query<DayQuery>) -> Response {
    let paging = query.paging();
    match query.date() {
        Ok(Some(date)) => {
            let orders = state.store.orders_for_day(date);
            let page = Paginator::new("orders", &orders).with_query(&paging).page();
            page_response(page)
        }
        Ok(None) => {
            let page = Paginator::new("orders", state.store.orders())
                .with_query(&paging)
                .page();
            page_response(page)
        }
        Err(e) => error_response(&e),
    }
}

/// Cash accounting summary, optionally scoped to one day
async fn orders_summary(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Response {
    match query.date() {
        Ok(date) => (StatusCode::OK, Json(state.store.summary(date))).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Emit a page as a 200 response with the `{ "<itemType>": [...], "metadata": {...} }` body
fn page_response<T: Serialize>(page: Page<'_, T>) -> Response {
    match page.into_body() {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Emit an error as a JSON body at its mapped status
fn error_response(err: &Error) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// Today's date in local time
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
