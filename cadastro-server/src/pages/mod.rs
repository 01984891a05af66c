pub mod cadastrar_usuario;
pub mod error;
pub mod listar_usuarios;
