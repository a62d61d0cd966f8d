//! Page routes: login form target, logout, and the initial page.

use axum::Form;
use axum::extract::State;
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::{debug, info};

use crate::render::render_page;
use crate::state::AppState;
use crate::view::PageView;

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub role: String,
}

/// `GET /`: the pre-login page.
pub async fn index() -> Html<String> {
    Html(render_page(&PageView::initial()))
}

/// `POST /login`: apply the selected role and render the resulting page.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Html<String> {
    let mut view = PageView::initial();
    view.select_role(&form.role, &state.catalog);

    match view.session.role() {
        Some(role) => info!(role = role.as_str(), "demo login"),
        None => debug!(role = %form.role, "login with unrecognized role"),
    }

    Html(render_page(&view))
}

/// `POST /logout`: full reset back to the initial page.
pub async fn logout() -> Redirect {
    debug!("demo logout");
    Redirect::to("/")
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
