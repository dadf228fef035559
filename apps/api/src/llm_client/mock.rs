//! Scripted `TextGenerator` for tests. Replays queued outcomes and records every request.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{CompletionRequest, LlmError, TextGenerator};

#[derive(Default)]
pub struct ScriptedGenerator {
    outcomes: Mutex<VecDeque<Result<String, LlmError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Self {
        let generator = Self::default();
        generator.push(Ok(text.to_string()));
        generator
    }

    pub fn failing() -> Self {
        let generator = Self::default();
        generator.push(Err(LlmError::Timeout(Duration::from_secs(8))));
        generator
    }

    pub fn push(&self, outcome: Result<String, LlmError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}
