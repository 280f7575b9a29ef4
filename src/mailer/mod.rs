/**
 * Mail Transport
 *
 * SMTP mailer built once at startup from the application configuration.
 * The mailer is an optional service: when SMTP credentials are not
 * configured the server runs without it, and every send is best effort.
 * Currently used only for the registration welcome mail.
 */

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::server::config::SmtpConfig;

/// Mailer failure kinds. Logged by callers, never surfaced to clients.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Async SMTP mailer
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl Mailer {
    /// Build a mailer from the SMTP section of the application config.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let sender: Mailbox = format!("Pixshelf <{}>", config.username).parse()?;

        Ok(Self { transport, sender })
    }

    /// Send the registration welcome mail.
    pub async fn send_welcome(&self, name: &str, email: &str) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(email.parse()?)
            .subject("Welcome to Pixshelf")
            .body(format!(
                "Hi {},\n\nYour account has been created. You can now log in and start uploading images.\n",
                name
            ))?;

        self.transport.send(message).await?;
        tracing::info!("Welcome email sent to {}", email);
        Ok(())
    }
}
