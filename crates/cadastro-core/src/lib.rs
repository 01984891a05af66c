pub mod forms;
pub mod models;

pub use forms::usuario_form::{UsuarioForm, UsuarioFormData};
pub use forms::validation_errors::ValidationErrors;
pub use models::usuario::Usuario;
