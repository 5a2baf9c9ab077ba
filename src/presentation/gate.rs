use async_trait::async_trait;

use crate::application::editor::{ConfirmationGate, DeleteDecision};

/// Gate that confirms unconditionally, backing the `--yes` flag.
pub struct AssumeYes;

#[async_trait]
impl ConfirmationGate for AssumeYes {
    async fn confirm(&self, _prompt: &str) -> DeleteDecision {
        DeleteDecision::Confirmed
    }
}

/// Interactive y/N prompt on standard input. Anything but an explicit yes
/// declines.
pub struct StdinGate;

#[async_trait]
impl ConfirmationGate for StdinGate {
    async fn confirm(&self, prompt: &str) -> DeleteDecision {
        let prompt = format!("{prompt} [y/N] ");
        let answer = tokio::task::spawn_blocking(move || {
            use std::io::Write;

            print!("{prompt}");
            std::io::stdout().flush().ok();
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).ok();
            line
        })
        .await
        .unwrap_or_default();

        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => DeleteDecision::Confirmed,
            _ => DeleteDecision::Declined,
        }
    }
}
