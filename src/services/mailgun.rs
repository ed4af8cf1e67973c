use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::MailgunSettings;
use crate::models::ApplicationRecord;

/// Errors that can occur when dispatching notification email
#[derive(Debug, Error)]
pub enum MailgunError {
    #[error("Server configuration error: Missing Mailgun credentials.")]
    MissingCredentials,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to send email via Mailgun. Status: {status}")]
    SendFailed { status: u16 },
}

/// A rendered notification email.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl EmailMessage {
    /// Render the new-application notification for a submitted record.
    pub fn new_application(record: &ApplicationRecord, domain: &str, to: &str) -> Self {
        let subject = format!("New Contractor Application: {}", record.name);

        let text = format!(
            "\nA new contractor application has been submitted.\n\n\
             Business Name: {}\n\
             Contact Name: {}\n\
             Phone: {}\n\
             Email: {}\n\
             Service Areas: {}\n\n\
             Services Offered:\n{}\n",
            record.name,
            record.contact_name,
            record.phone,
            record.email,
            record.service_areas.join(", "),
            record.services.join(", "),
        );

        let html = format!(
            r#"<html>
  <body style="font-family: sans-serif; line-height: 1.6;">
    <h2 style="color: #333;">New Contractor Application Received</h2>
    <p>A new application has been submitted through the NEMO Home Pros website.</p>
    <hr>
    <h3 style="color: #555;">Applicant Details:</h3>
    <ul>
      <li><strong>Business Name:</strong> {}</li>
      <li><strong>Contact Name:</strong> {}</li>
      <li><strong>Phone:</strong> {}</li>
      <li><strong>Email:</strong> <a href="mailto:{}">{}</a></li>
      <li><strong>Service Areas:</strong> {}</li>
    </ul>
    <h3 style="color: #555;">Services Offered:</h3>
    <p>{}</p>
    <hr>
    <p style="font-size: 0.9em; color: #888;">This is an automated notification from NEMO Home Pros.</p>
  </body>
</html>"#,
            record.name,
            record.contact_name,
            record.phone,
            record.email,
            record.email,
            record.service_areas.join(", "),
            record.services.join(", "),
        );

        Self {
            from: format!("NEMO Home Pros <noreply@{}>", domain),
            to: to.to_string(),
            subject,
            text,
            html,
        }
    }
}

#[derive(Debug)]
struct Credentials<'a> {
    api_key: &'a str,
    domain: &'a str,
    notification_email: &'a str,
}

/// Mailgun API client.
///
/// Credentials are optional at construction so the service can boot
/// without them; they are checked per send, mirroring the at-most-once
/// notification contract where missing configuration is a request-time
/// failure rather than a startup failure.
pub struct MailgunClient {
    api_base: String,
    api_key: Option<String>,
    domain: Option<String>,
    notification_email: Option<String>,
    client: Client,
}

impl MailgunClient {
    pub fn from_settings(settings: &MailgunSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_base: settings.api_base.clone(),
            api_key: settings.api_key.clone(),
            domain: settings.domain.clone(),
            notification_email: settings.notification_email.clone(),
            client,
        }
    }

    fn credentials(&self) -> Result<Credentials<'_>, MailgunError> {
        match (
            self.api_key.as_deref(),
            self.domain.as_deref(),
            self.notification_email.as_deref(),
        ) {
            (Some(api_key), Some(domain), Some(notification_email))
                if !api_key.is_empty() && !domain.is_empty() && !notification_email.is_empty() =>
            {
                Ok(Credentials {
                    api_key,
                    domain,
                    notification_email,
                })
            }
            _ => Err(MailgunError::MissingCredentials),
        }
    }

    /// Send the new-application notification email.
    ///
    /// Returns the Mailgun response body on success. No retries: a
    /// failure here is terminal for the triggering event.
    pub async fn send_new_application(
        &self,
        record: &ApplicationRecord,
    ) -> Result<Value, MailgunError> {
        let creds = self.credentials()?;
        let message = EmailMessage::new_application(record, creds.domain, creds.notification_email);

        let url = format!(
            "{}/{}/messages",
            self.api_base.trim_end_matches('/'),
            creds.domain
        );

        let params = [
            ("from", message.from.as_str()),
            ("to", message.to.as_str()),
            ("subject", message.subject.as_str()),
            ("text", message.text.as_str()),
            ("html", message.html.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(creds.api_key))
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Mailgun API error: {} - {}", status, body);
            return Err(MailgunError::SendFailed { status });
        }

        Ok(response.json().await?)
    }
}
