use axum::extract::State;
use axum::response::{Html, Json};
use axum::Form;
use serde::Serialize;
use tracing::info;

use crate::domain::{CredentialSource, Submission, ViewState};

use super::view::render_page;
use super::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub configured: bool,
    pub source: CredentialSource,
    pub model: String,
}

/// Render the form before any submission.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(
        state.container.banner(),
        &Submission::default(),
        &ViewState::Idle,
    ))
}

/// Handle the form's submit button.
pub async fn consult_form(
    State(state): State<AppState>,
    Form(submission): Form<Submission>,
) -> Html<String> {
    info!("Form submission for '{}'", submission.expert);
    let view_state = state.container.submit(&submission).await;
    Html(render_page(state.container.banner(), &submission, &view_state))
}

/// JSON variant of the submit action.
pub async fn consult_api(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Json<ViewState> {
    info!("API submission for '{}'", submission.expert);
    Json(state.container.submit(&submission).await)
}

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let credential = state.container.credential();
    Json(StatusResponse {
        configured: credential.is_configured(),
        source: credential.source(),
        model: state.container.model_name().to_string(),
    })
}
