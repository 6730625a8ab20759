//! Non-interactive confirmation adapter.

use std::sync::{Arc, Mutex};

use monoseed_core::{application::ports::Confirmation, error::MonoseedResult};

/// Always gives the same answer. Used for `--yes` and in tests.
///
/// Records the prompts it was asked so tests can check whether the
/// question came up at all.
#[derive(Debug, Clone, Default)]
pub struct FixedConfirmation {
    answer: bool,
    asked: Arc<Mutex<Vec<String>>>,
}

impl FixedConfirmation {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Arc::default(),
        }
    }

    pub fn yes() -> Self {
        Self::new(true)
    }

    pub fn no() -> Self {
        Self::new(false)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl Confirmation for FixedConfirmation {
    fn confirm(&self, prompt: &str) -> MonoseedResult<bool> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(prompt.to_string());
        }
        Ok(self.answer)
    }
}
