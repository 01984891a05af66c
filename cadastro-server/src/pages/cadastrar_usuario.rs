//! Registration form handlers
//!
//! GET renders the empty form; POST validates the submission, persists on
//! success and redirects to the listing, or re-renders the form with field
//! errors and the submitted values otherwise.

use crate::pages::error::Result as PageResult;
use crate::state::AppState;

use cadastro_core::{UsuarioForm, UsuarioFormData};
use cadastro_db::UsuarioRepository;

use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use log::info;
use minijinja::context;

/// GET /cadastrar/
///
/// Render the unbound registration form
pub async fn cadastrar_usuario_form(State(state): State<AppState>) -> PageResult<Html<String>> {
    render_form(&state, &UsuarioForm::empty())
}

/// POST /cadastrar/
///
/// Validate and persist a registration. Success answers 303 to the listing
/// page; validation failure answers 200 with the bound form.
pub async fn cadastrar_usuario(
    State(state): State<AppState>,
    Form(data): Form<UsuarioFormData>,
) -> PageResult<Response> {
    match data.validate() {
        Ok(usuario) => {
            let repo = UsuarioRepository::new(state.pool.clone());
            repo.create(&usuario).await?;

            info!("Usuario {} cadastrado", usuario.id);

            Ok(Redirect::to("/usuarios/").into_response())
        }
        Err(errors) => {
            let form = UsuarioForm::with_errors(data, errors);
            Ok(render_form(&state, &form)?.into_response())
        }
    }
}

fn render_form(state: &AppState, form: &UsuarioForm) -> PageResult<Html<String>> {
    let template = state.templates.get_template("cadastrar_usuario.html")?;
    let html = template.render(context! { form => form })?;

    Ok(Html(html))
}
