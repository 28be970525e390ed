use serde::Deserialize;
use ureq::Agent;

use crate::error::SubmitError;
use crate::form::WaiverForm;

/// Response body shared by the success and failure shapes of the
/// ingestion endpoint.
#[derive(Debug, Deserialize)]
struct SubmitOutcome {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    waiver_id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Send the form to the ingestion endpoint. Exactly one POST, no retry.
///
/// The form is only borrowed: on any failure the caller still holds every
/// field and the signature, so the user can fix the problem and resend.
pub fn submit(form: &WaiverForm, endpoint: &str) -> Result<String, SubmitError> {
    let prompts = form.validation_prompts();
    if !prompts.is_empty() {
        return Err(SubmitError::Invalid(prompts));
    }

    let payload = form.encode()?;

    // Error statuses still carry a JSON body worth reading.
    let agent: Agent = Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .into();

    let mut response = agent
        .post(endpoint)
        .send_json(&payload)
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let status = response.status();
    let outcome: SubmitOutcome = response
        .body_mut()
        .read_json()
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    if outcome.ok {
        let waiver_id = outcome.waiver_id.unwrap_or_default();
        tracing::info!(%waiver_id, "waiver accepted");
        Ok(waiver_id)
    } else {
        let message = outcome.error.unwrap_or_else(|| format!("status {status}"));
        tracing::warn!(%status, "waiver rejected: {message}");
        Err(SubmitError::Rejected(message))
    }
}
