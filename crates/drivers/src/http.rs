use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::services::ServeDir;
use wedding_gallery_adapters::{render_gallery_page, GalleryPage};
use wedding_gallery_application::{ApplicationError, ApplicationService};
use wedding_gallery_domain::Gallery;

use crate::config::AppConfig;

const QR_DOWNLOAD_NAME: &str = "wedding-google-drive-qr.png";

#[derive(Clone)]
pub struct AppState {
    service: Arc<ApplicationService>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service: ApplicationService, config: AppConfig) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.public_root);
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/gallery") }))
        .route("/gallery", get(gallery_page))
        .route("/gallery/upload-qr.png", get(upload_qr_png))
        .route("/api/gallery", get(gallery_json))
        .fallback_service(assets)
        .with_state(state)
}

pub async fn serve(state: AppState, bind_address: &str) -> Result<(), ApplicationError> {
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(|error| ApplicationError::Io(format!("cannot bind {bind_address}: {error}")))?;
    log::info!(
        "serving gallery on http://{bind_address}/gallery from {}",
        state.config.public_root
    );
    axum::serve(listener, router(state))
        .await
        .map_err(|error| ApplicationError::Io(error.to_string()))
}

struct HttpError(ApplicationError);

impl From<ApplicationError> for HttpError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        log::error!("request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

async fn assemble(state: &AppState) -> Result<Gallery, ApplicationError> {
    state
        .service
        .assemble_gallery(state.config.assemble_command())
        .await
}

async fn gallery_page(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let gallery = assemble(&state).await?;
    let upload = state.service.upload_qr(state.config.upload_command())?;
    log::info!(
        "rendering gallery: {} images, upload widget {}",
        gallery.len(),
        if upload.is_some() { "on" } else { "off" }
    );

    let html = render_gallery_page(&GalleryPage {
        gallery: &gallery,
        upload: upload.as_ref(),
        hashtags: &state.config.hashtags,
        desktop_folder: &state.config.desktop_folder,
        mobile_folder: &state.config.mobile_folder,
    })?;
    Ok(Html(html))
}

async fn gallery_json(State(state): State<AppState>) -> Result<Json<Gallery>, HttpError> {
    Ok(Json(assemble(&state).await?))
}

async fn upload_qr_png(State(state): State<AppState>) -> Result<Response, HttpError> {
    let Some(png) = state.service.upload_qr_png(state.config.upload_command())? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };
    let disposition = format!("attachment; filename=\"{QR_DOWNLOAD_NAME}\"");
    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        png,
    )
        .into_response())
}
