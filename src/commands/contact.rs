//! `neonfolio contact`: fill in the form from flags or prompts and send it.

use std::io::IsTerminal;

use dialoguer::Input;
use thiserror::Error;
use tokio::sync::watch;

use neonfolio_runtime::contact::{ContactForm, ContactState};
use neonfolio_utils::{Config, ContactField, ContactFields, SubmitStatus};

use super::theme_context;
use crate::cli::ContactArgs;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no value for --{0} and stdin is not a terminal to ask for one")]
    MissingField(ContactField),

    #[error("failed to read {field}: {source}")]
    Prompt {
        field: ContactField,
        #[source]
        source: std::io::Error,
    },
}

pub async fn run(config: &Config, args: ContactArgs) -> anyhow::Result<()> {
    let fields = gather(args, std::io::stdin().is_terminal(), prompt)?;
    let ctx = theme_context(config);

    let form = ContactForm::simulated(config.contact.clone());
    for field in ContactField::ALL {
        form.set_field(field, fields.get(field));
    }

    let follower = tokio::spawn(follow(form.subscribe()));
    let result = form.submit().await;
    if let Some(notification) = form.take_notification() {
        println!("{}", notification.render(&ctx));
    }
    match result {
        Ok(()) => {
            // wait for the button to come back
            if let Err(e) = follower.await {
                log::warn!("Status follower failed: {}", e);
            }
            Ok(())
        },
        Err(err) => {
            follower.abort();
            form.shutdown();
            Err(err.into())
        },
    }
}

/// Take each field from its flag, asking for the missing ones when possible
fn gather<P>(args: ContactArgs, interactive: bool, mut ask: P) -> Result<ContactFields, CliError>
where
    P: FnMut(ContactField) -> std::io::Result<String>,
{
    let ContactArgs {
        name,
        email,
        subject,
        message,
    } = args;
    let given = [
        (ContactField::Name, name),
        (ContactField::Email, email),
        (ContactField::Subject, subject),
        (ContactField::Message, message),
    ];

    let mut fields = ContactFields::default();
    for (field, value) in given {
        let value = match value {
            Some(value) => value,
            None if interactive => {
                ask(field).map_err(|source| CliError::Prompt { field, source })?
            },
            None => return Err(CliError::MissingField(field)),
        };
        fields.set(field, value);
    }
    Ok(fields)
}

fn prompt(field: ContactField) -> std::io::Result<String> {
    Input::<String>::new()
        .with_prompt(field.label())
        .allow_empty(true)
        .interact_text()
}

/// Print the button label on every status change until the form settles:
/// back to idle after a success, or stuck on an error.
async fn follow(mut rx: watch::Receiver<ContactState>) {
    let mut sent = false;
    while rx.changed().await.is_ok() {
        let status = rx.borrow_and_update().status.clone();
        println!("[ {} ]", status.button_label());
        match status {
            SubmitStatus::Success => sent = true,
            SubmitStatus::Idle if sent => break,
            SubmitStatus::Error(_) => break,
            _ => {},
        }
    }
}
