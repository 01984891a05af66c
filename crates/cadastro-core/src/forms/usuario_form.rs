//! Form binding and validation for the Usuario entity.
//!
//! Validity is decided entirely here: the handlers and the persistence layer
//! impose no further constraints.

use crate::{Usuario, ValidationErrors};

use serde::{Deserialize, Serialize};

const NOME_MAX_CHARS: usize = 150;
const EMAIL_MAX_CHARS: usize = 254;
const IDADE_MIN: i32 = 0;
const IDADE_MAX: i32 = 130;

// User-facing form messages, so Portuguese like the rest of the UI.
const MSG_REQUIRED: &str = "Este campo é obrigatório.";
const MSG_INVALID_EMAIL: &str = "Informe um endereço de email válido.";
const MSG_INVALID_INTEGER: &str = "Informe um número inteiro.";

/// Raw key-value data bound from a form submission.
///
/// Every field is a string so that malformed input reaches validation as
/// data instead of failing extraction; missing keys default to empty
/// strings and surface as "required" errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsuarioFormData {
    pub nome: String,
    pub email: String,
    pub idade: String,
}

impl UsuarioFormData {
    /// Validate the submission against the Usuario field constraints.
    ///
    /// Every failing field is reported; the first violated constraint wins
    /// per field. On success the returned Usuario carries the cleaned
    /// values: nome and email trimmed, idade parsed.
    pub fn validate(&self) -> Result<Usuario, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let nome = self.validate_nome(&mut errors);
        let email = self.validate_email(&mut errors);
        let idade = self.validate_idade(&mut errors);

        match (nome, email, idade) {
            (Some(nome), Some(email), Some(idade)) => Ok(Usuario::new(nome, email, idade)),
            _ => Err(errors),
        }
    }

    fn validate_nome(&self, errors: &mut ValidationErrors) -> Option<String> {
        let nome = self.nome.trim();
        if nome.is_empty() {
            errors.add("nome", MSG_REQUIRED);
            return None;
        }
        // chars(), not len(): accented names must count characters, not bytes
        if nome.chars().count() > NOME_MAX_CHARS {
            errors.add(
                "nome",
                format!(
                    "Certifique-se de que o valor tenha no máximo {} caracteres.",
                    NOME_MAX_CHARS
                ),
            );
            return None;
        }
        Some(nome.to_string())
    }

    fn validate_email(&self, errors: &mut ValidationErrors) -> Option<String> {
        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", MSG_REQUIRED);
            return None;
        }
        if email.chars().count() > EMAIL_MAX_CHARS {
            errors.add(
                "email",
                format!(
                    "Certifique-se de que o valor tenha no máximo {} caracteres.",
                    EMAIL_MAX_CHARS
                ),
            );
            return None;
        }
        if !is_valid_email(email) {
            errors.add("email", MSG_INVALID_EMAIL);
            return None;
        }
        Some(email.to_string())
    }

    fn validate_idade(&self, errors: &mut ValidationErrors) -> Option<i32> {
        let idade = self.idade.trim();
        if idade.is_empty() {
            errors.add("idade", MSG_REQUIRED);
            return None;
        }
        match idade.parse::<i32>() {
            Ok(value) if (IDADE_MIN..=IDADE_MAX).contains(&value) => Some(value),
            Ok(_) => {
                errors.add(
                    "idade",
                    format!("Informe uma idade entre {} e {}.", IDADE_MIN, IDADE_MAX),
                );
                None
            }
            Err(_) => {
                errors.add("idade", MSG_INVALID_INTEGER);
                None
            }
        }
    }
}

/// A form as rendered: the submitted values plus any validation errors.
///
/// The registration template reads `form.data.<field>` to re-render what
/// the user typed and `form.errors.<field>` for the messages beside it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UsuarioForm {
    pub data: UsuarioFormData,
    pub errors: ValidationErrors,
}

impl UsuarioForm {
    /// An unbound form: empty values, no errors (initial GET)
    pub fn empty() -> Self {
        Self::default()
    }

    /// A bound form that failed validation, re-rendered with its errors
    pub fn with_errors(data: UsuarioFormData, errors: ValidationErrors) -> Self {
        Self { data, errors }
    }
}

/// Simplified e-mail shape check: exactly one '@', non-empty local part,
/// domain with an interior dot, no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
