use crate::templates::build_environment;

use cadastro_core::{Usuario, UsuarioForm, UsuarioFormData};

use minijinja::context;

#[test]
fn test_environment_contains_all_pages() {
    let env = build_environment().unwrap();

    assert!(env.get_template("base.html").is_ok());
    assert!(env.get_template("cadastrar_usuario.html").is_ok());
    assert!(env.get_template("listar_usuarios.html").is_ok());
}

#[test]
fn test_unbound_form_renders_without_errors() {
    let env = build_environment().unwrap();
    let template = env.get_template("cadastrar_usuario.html").unwrap();

    let html = template
        .render(context! { form => UsuarioForm::empty() })
        .unwrap();

    assert!(html.contains("id_nome"));
    assert!(html.contains("id_email"));
    assert!(html.contains("id_idade"));
    assert!(!html.contains("errorlist"));
}

#[test]
fn test_bound_form_renders_messages_and_submitted_values() {
    let env = build_environment().unwrap();
    let template = env.get_template("cadastrar_usuario.html").unwrap();

    let data = UsuarioFormData {
        nome: "Ana Souza".to_string(),
        email: "semarroba".to_string(),
        idade: "28".to_string(),
    };
    let errors = data.validate().unwrap_err();
    let form = UsuarioForm::with_errors(data, errors);

    let html = template.render(context! { form => form }).unwrap();

    assert!(html.contains("Informe um endereço de email válido."));
    assert!(html.contains(r#"value="Ana Souza""#));
    assert!(html.contains(r#"value="semarroba""#));
}

#[test]
fn test_listing_renders_rows() {
    let env = build_environment().unwrap();
    let template = env.get_template("listar_usuarios.html").unwrap();

    let usuarios = vec![
        Usuario::new("Ana Souza".to_string(), "ana@example.com".to_string(), 28),
        Usuario::new("Bruno Lima".to_string(), "bruno@example.com".to_string(), 31),
    ];

    let html = template.render(context! { usuarios => usuarios }).unwrap();

    assert!(html.contains("Ana Souza"));
    assert!(html.contains("bruno@example.com"));
    assert!(!html.contains("Nenhum usuário cadastrado."));
}

#[test]
fn test_listing_escapes_html_in_fields() {
    let env = build_environment().unwrap();
    let template = env.get_template("listar_usuarios.html").unwrap();

    let usuarios = vec![Usuario::new(
        "<script>alert(1)</script>".to_string(),
        "x@example.com".to_string(),
        30,
    )];

    let html = template.render(context! { usuarios => usuarios }).unwrap();

    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>alert"));
}

#[test]
fn test_empty_listing_shows_placeholder() {
    let env = build_environment().unwrap();
    let template = env.get_template("listar_usuarios.html").unwrap();

    let html = template
        .render(context! { usuarios => Vec::<Usuario>::new() })
        .unwrap();

    assert!(html.contains("Nenhum usuário cadastrado."));
}
