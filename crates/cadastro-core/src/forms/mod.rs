pub mod usuario_form;
pub mod validation_errors;
