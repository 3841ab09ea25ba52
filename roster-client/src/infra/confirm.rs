use async_trait::async_trait;

/// Gate for destructive operations.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every prompt the same way (`--yes`, scripted tests).
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

#[async_trait]
impl Confirmer for AutoConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        log::debug!("[Confirm] '{}' auto-answered {}", prompt, self.0);
        self.0
    }
}
