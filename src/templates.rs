use include_dir::{include_dir, Dir};
use minijinja::{Environment, Error, Value};
use once_cell::sync::Lazy;

static TEMPLATE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

pub static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();

    let entries = match TEMPLATE_DIR.find("**/*.html") {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(error = %e, "Unable to walk template directory");
            return env;
        }
    };

    for file in entries.filter_map(|entry| entry.as_file()) {
        let Some(name) = file.path().to_str() else {
            continue;
        };
        let contents = String::from_utf8_lossy(file.contents()).to_string();
        if let Err(e) = env.add_template_owned(name.to_string(), contents) {
            handle_template_error(e);
        }
    }

    env
});

/// Render `name`, falling back to a generic error page.
pub fn render(name: &str, ctx: Value) -> String {
    ENV.get_template(name)
        .and_then(|template| template.render(ctx))
        .unwrap_or_else(handle_template_error)
}

pub fn handle_template_error(err: Error) -> String {
    // minijinja's `Debug` carries the template location and the source chain
    tracing::error!(error = ?err, "Could not render template");
    String::from("<h1>Error rendering Template</h1></br> See the server log for more information")
}
