use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("SES SendEmail error: {0}")]
    Send(String),
}

impl From<tera::Error> for NotifyError {
    fn from(e: tera::Error) -> Self {
        NotifyError::TemplateRender(e.to_string())
    }
}
