use tera::{Context, Tera};

use crate::error::NotifyError;

pub const AFTERCARE_SUBJECT: &str = "Your aftercare instructions";

const AFTERCARE_TEMPLATE: &str = include_str!("../templates/aftercare.html.tera");

/// First whitespace-delimited token of a display name.
pub fn first_name(full_name: &str) -> Option<&str> {
    full_name.split_whitespace().next()
}

/// The greeting line: personalized when a first name is available,
/// otherwise generic.
pub fn greeting(display_name: Option<&str>) -> String {
    match display_name.and_then(first_name) {
        Some(name) => format!("Hi {name},"),
        None => "Hello,".to_string(),
    }
}

/// Render the aftercare email body. The instructions are fixed; only the
/// greeting varies per recipient.
pub fn render_aftercare(display_name: Option<&str>) -> Result<String, NotifyError> {
    let mut tera = Tera::default();
    tera.add_raw_template("aftercare.html", AFTERCARE_TEMPLATE)
        .map_err(|e| NotifyError::TemplateParse(e.to_string()))?;

    let mut context = Context::new();
    context.insert("greeting", &greeting(display_name));

    let rendered = tera.render("aftercare.html", &context)?;
    Ok(rendered)
}
