#![allow(dead_code)]

use cadastro_core::Usuario;

/// Creates a test Usuario with sensible defaults
pub fn create_test_usuario() -> Usuario {
    Usuario::new("Ana Souza".to_string(), "ana@example.com".to_string(), 28)
}

/// Creates a test Usuario with the given fields
pub fn create_usuario(nome: &str, email: &str, idade: i32) -> Usuario {
    Usuario::new(nome.to_string(), email.to_string(), idade)
}
