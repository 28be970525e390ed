use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Blocked by the client-side gate. Carries the user-facing prompts.
    #[error("{}", .0.join(" "))]
    Invalid(Vec<&'static str>),

    #[error("signature export failed: {0}")]
    Signature(#[from] inkform_signature::error::SignatureError),

    #[error("server rejected the waiver: {0}")]
    Rejected(String),

    #[error("network error: {0}")]
    Transport(String),
}

impl SubmitError {
    /// What the kiosk shows the user. Validation prompts are actionable;
    /// every other failure collapses to one generic retry message, with
    /// the cause kept in the logs.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(prompts) => prompts.join("\n"),
            _ => "Submission failed. Please try again or see the front desk.".to_string(),
        }
    }
}
