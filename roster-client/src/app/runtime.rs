use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, warn};
use thiserror::Error;
use tokio::{sync::mpsc, task::JoinSet};

use crate::{
    common::Effect,
    domains::user_management::{Message, State, update_user_management},
    infra::{Confirmer, UserAdminService},
};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("background request task failed")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Drives the user management reducer.
///
/// Messages are applied one at a time. Network effects run as tokio tasks
/// whose results come back as messages; dismiss timers post
/// [`Message::NotificationExpired`] on a channel that is drained between
/// commands.
pub struct Runtime {
    state: State,
    service: Arc<dyn UserAdminService>,
    confirmer: Arc<dyn Confirmer>,
    in_flight: JoinSet<Option<Message>>,
    timer_tx: mpsc::UnboundedSender<Message>,
    timer_rx: mpsc::UnboundedReceiver<Message>,
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("state", &self.state)
            .field("in_flight", &self.in_flight.len())
            .finish()
    }
}

impl Runtime {
    pub fn new(
        state: State,
        service: Arc<dyn UserAdminService>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        Self {
            state,
            service,
            confirmer,
            in_flight: JoinSet::new(),
            timer_tx,
            timer_rx,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of requests whose results have not been applied yet.
    pub fn pending_requests(&self) -> usize {
        self.in_flight.len()
    }

    /// Apply `message` and start every effect it produces without waiting
    /// for network results.
    ///
    /// Delete confirmations are asked inline since they block on the
    /// operator anyway.
    pub async fn dispatch(&mut self, message: Message) {
        let mut queue = VecDeque::from([message]);
        while let Some(message) = queue.pop_front() {
            for effect in update_user_management(&mut self.state, message) {
                match effect {
                    Effect::ConfirmDelete { user_id, prompt } => {
                        let answer = if self.confirmer.confirm(&prompt).await {
                            Message::DeleteConfirmed(user_id)
                        } else {
                            Message::DeleteDeclined(user_id)
                        };
                        queue.push_back(answer);
                    }
                    Effect::ScheduleDismiss {
                        notification_id,
                        after,
                    } => self.schedule_dismiss(notification_id, after),
                    request => {
                        let service = Arc::clone(&self.service);
                        self.in_flight.spawn(perform(service, request));
                    }
                }
            }
        }
    }

    /// Wait for every in-flight request, applying results in completion
    /// order, including requests started while applying them.
    pub async fn settle(&mut self) -> Result<(), RuntimeError> {
        while let Some(joined) = self.in_flight.join_next().await {
            match joined {
                Ok(Some(message)) => self.dispatch(message).await,
                Ok(None) => {}
                Err(err) => {
                    error!("[Runtime] Request task failed: {}", err);
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }

    /// Apply timer messages that have already fired. Returns how many were
    /// applied.
    pub async fn drain_timers(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.timer_rx.try_recv() {
            self.dispatch(message).await;
            applied += 1;
        }
        applied
    }

    /// Wait for the next dismiss timer to fire and apply it.
    pub async fn next_timer(&mut self) {
        if let Some(message) = self.timer_rx.recv().await {
            self.dispatch(message).await;
        }
    }

    /// Dispatch, wait for the results, then apply any expired timers.
    pub async fn send(&mut self, message: Message) -> Result<(), RuntimeError> {
        self.dispatch(message).await;
        self.settle().await?;
        self.drain_timers().await;
        Ok(())
    }

    fn schedule_dismiss(&self, notification_id: u64, after: Duration) {
        let tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(after).await;
            if tx.send(Message::NotificationExpired(notification_id)).is_err() {
                debug!("[Runtime] Dropped dismiss timer #{}", notification_id);
            }
        });
    }
}

/// Execute one backend effect and turn the outcome into the message that
/// reports it.
async fn perform(service: Arc<dyn UserAdminService>, effect: Effect) -> Option<Message> {
    let message = match effect {
        Effect::FetchUsers {
            request_id,
            page,
            per_page,
        } => Message::UsersLoaded {
            request_id,
            response: service.list_users(page, per_page).await,
        },
        Effect::FetchUser {
            request_id,
            user_id,
        } => Message::UserFetched {
            request_id,
            user_id,
            response: service.get_user(user_id).await,
        },
        Effect::CreateUser {
            submission_id,
            data,
        } => Message::UserCreated {
            submission_id,
            response: service.create_user(data).await,
        },
        Effect::UpdateUser {
            submission_id,
            user_id,
            data,
        } => Message::UserUpdated {
            submission_id,
            response: service.update_user(user_id, data).await,
        },
        Effect::DeleteUser(user_id) => {
            Message::UserDeleted(user_id, service.delete_user(user_id).await)
        }
        Effect::CheckHealth => Message::HealthChecked(service.health_check().await),
        local @ (Effect::ConfirmDelete { .. } | Effect::ScheduleDismiss { .. }) => {
            warn!("[Runtime] {:?} is not a backend request", local);
            return None;
        }
    };
    Some(message)
}
