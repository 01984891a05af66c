pub mod usuario;
