use minijinja::Environment;

/// Build the template environment with every page embedded at compile time.
///
/// Templates carry the `.html` extension so minijinja's default auto-escape
/// applies to all interpolated values.
pub fn build_environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();

    env.add_template("base.html", include_str!("../templates/base.html"))?;
    env.add_template(
        "cadastrar_usuario.html",
        include_str!("../templates/cadastrar_usuario.html"),
    )?;
    env.add_template(
        "listar_usuarios.html",
        include_str!("../templates/listar_usuarios.html"),
    )?;

    Ok(env)
}
