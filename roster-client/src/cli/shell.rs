use anyhow::Result;
use log::{debug, info};
use roster_model::UserId;

use super::{
    commands::{Command, HELP},
    prompt,
};
use crate::{
    app::Runtime,
    domains::user_management::Message,
    view,
};

/// Interactive loop. Returns when the operator quits or stdin closes.
pub async fn run(runtime: &mut Runtime) -> Result<()> {
    runtime.send(Message::LoadUsers).await?;
    print_screen(runtime);

    loop {
        let Some(line) = prompt::read_command_line().await? else {
            info!("Input closed, leaving");
            return Ok(());
        };
        // Timers that fired while we were waiting for input.
        runtime.drain_timers().await;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };
        debug!("Command: {:?}", command);

        match command {
            Command::Quit => return Ok(()),
            Command::Help => {
                eprintln!("{}", HELP);
                continue;
            }
            Command::List => runtime.send(Message::LoadUsers).await?,
            Command::Page(page) => runtime.send(Message::PageChanged(page)).await?,
            Command::Next => runtime.send(Message::NextPage).await?,
            Command::Prev => runtime.send(Message::PreviousPage).await?,
            Command::Show(user_id) => runtime.send(Message::ViewUser(user_id)).await?,
            Command::Delete(user_id) => runtime.send(Message::DeleteUser(user_id)).await?,
            Command::Health => runtime.send(Message::CheckHealth).await?,
            Command::Dismiss => runtime.send(Message::DismissNotification).await?,
            Command::New => {
                runtime.send(Message::BeginCreate).await?;
                edit_form(runtime).await?;
            }
            Command::Edit(user_id) => {
                if begin_edit(runtime, user_id).await? {
                    edit_form(runtime).await?;
                }
            }
        }
        print_screen(runtime);
    }
}

fn print_screen(runtime: &Runtime) {
    println!("{}", view::render(runtime.state()));
}

/// Open the edit form for `user_id`, fetching the user when it is not on
/// the current page.
async fn begin_edit(runtime: &mut Runtime, user_id: UserId) -> Result<bool> {
    let on_page = runtime
        .state()
        .users
        .iter()
        .find(|user| user.id == user_id)
        .cloned();
    let user = match on_page {
        Some(user) => Some(user),
        None => {
            runtime.send(Message::ViewUser(user_id)).await?;
            runtime
                .state()
                .selected
                .as_ref()
                .filter(|user| user.id == user_id)
                .cloned()
        }
    };
    match user {
        Some(user) => {
            runtime.send(Message::BeginEdit(user)).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Fill and submit the open form until it closes or the operator gives up.
async fn edit_form(runtime: &mut Runtime) -> Result<()> {
    loop {
        let Some(form) = runtime.state().form.clone() else {
            return Ok(());
        };
        eprintln!("{}", view::render_form(&form, false).trim_end());

        let answers = match prompt::read_fields(&form, prompt::fields_to_prompt(&form)).await {
            Ok(answers) => answers,
            Err(err) => {
                eprintln!("Form aborted: {:#}", err);
                runtime.send(Message::CancelForm).await?;
                return Ok(());
            }
        };
        for (field, value) in answers {
            runtime.dispatch(Message::FormFieldChanged(field, value)).await;
        }

        let label = format!("{}?", form.submit_label());
        if !prompt::ask(&label, true).await? {
            runtime.send(Message::CancelForm).await?;
            return Ok(());
        }
        runtime.send(Message::SubmitForm).await?;

        let Some(form) = runtime.state().form.as_ref() else {
            return Ok(());
        };
        if form.errors().is_empty() {
            // Rejected by the backend; the banner says why.
            if let Some(notification) = &runtime.state().notification {
                eprintln!("{}", notification);
            }
            if !prompt::ask("Edit and try again?", true).await? {
                runtime.send(Message::CancelForm).await?;
                return Ok(());
            }
        }
    }
}
