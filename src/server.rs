//! Local admin server — append entries, preview selections, regenerate.
//!
//! Bound to loopback only; there is no authentication because the surface is
//! only ever reachable by the person running it.

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::{error, info};

use crate::config::SiteConfig;
use crate::publish::publish;
use crate::render::render_page;
use crate::select::select_daily;
use crate::store::{EntryKind, NewEntry, StoreFile};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,
    pub store_file: StoreFile,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        let store_file = StoreFile::new(&config.data_path);
        Self { config, store_file }
    }
}

/// Build the admin router.
pub fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(index))
        .route("/add", get(add_page))
        .route("/add-entry", post(add_entry))
        .route("/api/preview", get(preview))
        .route("/regenerate", post(regenerate))
        .with_state(state)
}

/// Run the admin server on loopback.
pub async fn serve(config: SiteConfig) -> anyhow::Result<()> {
    let port = config.port;
    let app = admin_routes(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!(port, "Admin server listening on http://127.0.0.1:{}", port);
    axum::serve(listener, app).await?;
    Ok(())
}

fn json_error(status: StatusCode, message: impl std::fmt::Display) -> axum::response::Response {
    (
        status,
        Json(serde_json::json!({ "error": message.to_string() })),
    )
        .into_response()
}

// ── Handlers ────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "daily-muse-admin"
    }))
}

/// GET / — today's page, rendered live from the store (no APOD: the admin
/// preview stays offline).
async fn index(State(state): State<AppState>) -> axum::response::Response {
    let store = match state.store_file.load().await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Failed to load store");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, e);
        }
    };
    let selection = select_daily(&store, Utc::now().date_naive(), state.config.quote_count);
    Html(render_page(&selection, None)).into_response()
}

/// GET /add — the entry form.
async fn add_page(State(state): State<AppState>) -> axum::response::Response {
    let store = match state.store_file.load().await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "Failed to load store");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, e);
        }
    };
    Html(add_form_page(store.quotes.len(), store.poems.len())).into_response()
}

#[derive(Debug, Deserialize)]
struct AddEntryForm {
    kind: String,
    text: String,
    author: String,
    #[serde(default)]
    history: String,
    #[serde(default)]
    images: String,
}

/// POST /add-entry — append a new entry and save the store.
async fn add_entry(
    State(state): State<AppState>,
    Form(form): Form<AddEntryForm>,
) -> axum::response::Response {
    let kind: EntryKind = match form.kind.parse() {
        Ok(kind) => kind,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, e),
    };

    let images: Vec<String> = form
        .images
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let mut new = NewEntry::new(kind, form.text, form.author);
    new.history = Some(form.history).filter(|h| !h.trim().is_empty());
    new.images = images;

    let mut store = match state.store_file.load().await {
        Ok(store) => store,
        Err(e) => return json_error(StatusCode::INTERNAL_SERVER_ERROR, e),
    };
    let id = match store.append(new) {
        Ok(id) => id,
        Err(e) => return json_error(StatusCode::BAD_REQUEST, e),
    };
    if let Err(e) = state.store_file.save(&store).await {
        error!(error = %e, "Failed to save store");
        return json_error(StatusCode::INTERNAL_SERVER_ERROR, e);
    }

    info!(%id, kind = %kind, "Entry appended");
    Redirect::to("/add").into_response()
}

#[derive(Debug, Deserialize)]
struct PreviewQuery {
    /// Day to preview, `YYYY-MM-DD`. Defaults to today (UTC).
    date: Option<NaiveDate>,
}

/// GET /api/preview?date=YYYY-MM-DD — the selection for a given day as JSON.
async fn preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> axum::response::Response {
    let store = match state.store_file.load().await {
        Ok(store) => store,
        Err(e) => return json_error(StatusCode::INTERNAL_SERVER_ERROR, e),
    };
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let selection = select_daily(&store, date, state.config.quote_count);
    Json(selection).into_response()
}

/// POST /regenerate — re-run the full publish pipeline (with APOD).
async fn regenerate(State(state): State<AppState>) -> axum::response::Response {
    let date = Utc::now().date_naive();
    match publish(&state.config, date, true).await {
        Ok(()) => Json(serde_json::json!({
            "status": "regenerated",
            "date": date,
            "output": state.config.output_path.display().to_string(),
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "Regenerate failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

// ── Admin form page ─────────────────────────────────────────────────────

fn add_form_page(quote_count: usize, poem_count: usize) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Add Entry — Daily Inspiration</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
               max-width: 680px; margin: 0 auto; padding: 3rem 2rem; line-height: 1.6; }}
        h1 {{ font-weight: 600; }}
        .stats {{ display: flex; gap: 2rem; margin: 1.5rem 0; color: #636e72; }}
        .form-group {{ margin-bottom: 1.25rem; }}
        label {{ display: block; margin-bottom: 0.35rem; font-weight: 500; }}
        input, textarea, select {{ width: 100%; padding: 0.6rem; border: 1px solid #dfe6e9;
               border-radius: 8px; font: inherit; }}
        textarea {{ min-height: 6rem; }}
        button {{ padding: 0.7rem 1.5rem; border: none; border-radius: 8px;
               background: #6c5ce7; color: white; font: inherit; cursor: pointer; }}
        a {{ color: #6c5ce7; }}
    </style>
</head>
<body>
    <p><a href="/">&larr; Back</a></p>
    <h1>Add Entry</h1>
    <div class="stats">
        <span>{quotes} quotes</span>
        <span>{poems} poems</span>
    </div>
    <form method="POST" action="/add-entry">
        <div class="form-group">
            <label for="kind">Type</label>
            <select name="kind" id="kind" required>
                <option value="quote">Quote</option>
                <option value="poem">Poem</option>
            </select>
        </div>
        <div class="form-group">
            <label for="text">Text</label>
            <textarea name="text" id="text" required placeholder="Enter the quote or poem text..."></textarea>
        </div>
        <div class="form-group">
            <label for="author">Author</label>
            <input type="text" name="author" id="author" required placeholder="Author name">
        </div>
        <div class="form-group">
            <label for="history">History / Context (optional)</label>
            <textarea name="history" id="history" placeholder="Background information about this entry..."></textarea>
        </div>
        <div class="form-group">
            <label for="images">Image URLs (optional, comma-separated)</label>
            <input type="text" name="images" id="images" placeholder="https://example.com/image1.jpg">
        </div>
        <button type="submit">Add Entry</button>
    </form>
</body>
</html>
"#,
        quotes = quote_count,
        poems = poem_count,
    )
}
