use aws_sdk_sesv2::Client;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

use crate::error::NotifyError;
use crate::render;

/// Render and send the aftercare email.
pub async fn send_aftercare_email(
    client: &Client,
    sender: &str,
    recipient: &str,
    display_name: Option<&str>,
) -> Result<(), NotifyError> {
    let html = render::render_aftercare(display_name)?;

    let subject = Content::builder()
        .data(render::AFTERCARE_SUBJECT)
        .charset("UTF-8")
        .build()
        .map_err(|e| NotifyError::Send(e.to_string()))?;
    let body = Content::builder()
        .data(html)
        .charset("UTF-8")
        .build()
        .map_err(|e| NotifyError::Send(e.to_string()))?;

    let message = Message::builder()
        .subject(subject)
        .body(Body::builder().html(body).build())
        .build();

    client
        .send_email()
        .from_email_address(sender)
        .destination(Destination::builder().to_addresses(recipient).build())
        .content(EmailContent::builder().simple(message).build())
        .send()
        .await
        .map_err(|e| NotifyError::Send(e.into_service_error().to_string()))?;

    tracing::info!(recipient, "aftercare email sent");
    Ok(())
}
