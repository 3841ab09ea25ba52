use anyhow::{Context, Result};
use async_trait::async_trait;
use dialoguer::{Confirm, Input, console::Term};
use log::warn;

use crate::{
    domains::user_management::{FormField, UserForm},
    infra::Confirmer,
};

/// Run a blocking terminal prompt off the async runtime's worker.
pub async fn blocking<T, F>(prompt: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(prompt)
        .await
        .context("terminal prompt task failed")?
}

/// Asks the operator on stderr before each delete.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerConfirmer;

#[async_trait]
impl Confirmer for DialoguerConfirmer {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        let answer = blocking(move || {
            Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact_on(&Term::stderr())
                .map_err(Into::into)
        })
        .await;
        match answer {
            Ok(answer) => answer,
            Err(err) => {
                // An aborted prompt never deletes.
                warn!("Confirmation prompt failed: {:#}", err);
                false
            }
        }
    }
}

/// Fields to ask for: the failing ones when the form has errors, every
/// field otherwise.
pub fn fields_to_prompt(form: &UserForm) -> Vec<FormField> {
    if form.errors().is_empty() {
        FormField::ALL.to_vec()
    } else {
        form.errors().keys().copied().collect()
    }
}

/// Prompt for `fields`, pre-filled with the form's current values.
pub async fn read_fields(form: &UserForm, fields: Vec<FormField>) -> Result<Vec<(FormField, String)>> {
    let current: Vec<(FormField, String, Option<String>)> = fields
        .into_iter()
        .map(|field| {
            (
                field,
                form.value(field).to_string(),
                form.error(field).map(str::to_string),
            )
        })
        .collect();

    blocking(move || {
        let term = Term::stderr();
        let mut answers = Vec::with_capacity(current.len());
        for (field, value, error) in current {
            if let Some(error) = error {
                term.write_line(&format!("  ! {}", error))?;
            }
            let answer: String = Input::new()
                .with_prompt(field.label())
                .allow_empty(true)
                .with_initial_text(value)
                .interact_text_on(&term)?;
            answers.push((field, answer));
        }
        Ok(answers)
    })
    .await
}

pub async fn ask(prompt: &str, default: bool) -> Result<bool> {
    let prompt = prompt.to_string();
    blocking(move || {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact_on(&Term::stderr())
            .map_err(Into::into)
    })
    .await
}

/// Next command line, or `None` once stdin is closed.
pub async fn read_command_line() -> Result<Option<String>> {
    blocking(|| {
        let answer: std::result::Result<String, dialoguer::Error> = Input::new()
            .with_prompt("roster")
            .allow_empty(true)
            .interact_text_on(&Term::stderr());
        match answer {
            Ok(line) => Ok(Some(line)),
            Err(dialoguer::Error::IO(err))
                if err.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    })
    .await
}
