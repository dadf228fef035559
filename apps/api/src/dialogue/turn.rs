//! Dialogue Turn Processor — one model call per turn, always a well-formed reply.
//!
//! Flow: StartDialogue → (user picks a choice) → ContinueDialogue … →
//!       ContinueDialogue with `is_final` → closing line.
//!
//! Two degradations, kept apart:
//! - the model call fails (network, status, timeout): fallback text, `success=false`
//! - the model answers with something that isn't the JSON envelope: canned
//!   reply built from its text, still `success=true`

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::dialogue::fallback::{
    fallback_message, APOLOGY_MESSAGE, CLOSING_CHOICE, CONTINUE_CHOICES, FALLBACK_MESSAGES,
    FINAL_MESSAGE, START_CHOICES,
};
use crate::dialogue::models::{
    ApplicationContext, ConversationEntry, DialogueReply, Role, TurnOutcome,
};
use crate::dialogue::personality::Personality;
use crate::dialogue::prompts::{system_prompt, TurnKind, START_USER_PROMPT};
use crate::llm_client::{
    parse_json_reply, strip_json_fences, ChatMessage, CompletionRequest, TextGenerator,
};

/// Raw model output longer than this is cut when used as a message.
pub const MAX_RAW_MESSAGE_CHARS: usize = 200;
/// Only the most recent entries of a long history are replayed.
pub const MAX_HISTORY_ENTRIES: usize = 20;

const START_MAX_TOKENS: u32 = 200;
const CONTINUE_MAX_TOKENS: u32 = 200;
const FINAL_MAX_TOKENS: u32 = 80;

/// The JSON object the model is asked to return on structured turns.
/// Missing and `null` fields both decode as empty.
#[derive(Debug, Deserialize)]
struct ReplyEnvelope {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    choices: Option<Vec<String>>,
}

impl ReplyEnvelope {
    fn message(&self) -> &str {
        self.message.as_deref().map(str::trim).unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct DialogueService {
    generator: Arc<dyn TextGenerator>,
    /// Source for the random fallback pick. Only locked outside await points.
    rng: Arc<Mutex<StdRng>>,
}

impl DialogueService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_rng(generator, StdRng::from_entropy())
    }

    /// Uses the given rng for fallback selection, e.g. a seeded one.
    pub fn with_rng(generator: Arc<dyn TextGenerator>, rng: StdRng) -> Self {
        Self {
            generator,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    fn pick_fallback(&self, total_count: i64) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        fallback_message(total_count, &mut *rng)
    }

    /// Opening turn for a freshly submitted application.
    pub async fn start_dialogue(&self, context: &ApplicationContext) -> TurnOutcome {
        let personality = Personality::from_level(context.craziness_level);
        info!(
            "Starting dialogue: total={}, today={}, personality_level={}",
            context.total_count,
            context.today_count,
            personality.level()
        );

        let request = CompletionRequest {
            messages: vec![
                ChatMessage::system(system_prompt(context, personality, TurnKind::Start)),
                ChatMessage::user(START_USER_PROMPT),
            ],
            max_tokens: START_MAX_TOKENS,
            temperature: personality.temperature(),
        };

        match self.generator.complete(request).await {
            Ok(text) => TurnOutcome::success(parse_reply(&text, &START_CHOICES)),
            Err(e) => {
                warn!("Start dialogue call failed, using fallback: {e}");
                let message = self.pick_fallback(context.total_count);
                TurnOutcome::failure(DialogueReply::open(message, Vec::new(), &START_CHOICES), e)
            }
        }
    }

    /// Responds to the user's pick. `is_final` asks for a closing line instead of new choices.
    pub async fn continue_dialogue(
        &self,
        user_choice: &str,
        history: &[ConversationEntry],
        context: &ApplicationContext,
        is_final: bool,
    ) -> TurnOutcome {
        let personality = Personality::from_level(context.craziness_level);
        let turn = if is_final {
            TurnKind::Final
        } else {
            TurnKind::Continue
        };
        info!(
            "Continuing dialogue: history_len={}, final={}",
            history.len(),
            is_final
        );

        let request = CompletionRequest {
            messages: build_transcript(
                system_prompt(context, personality, turn),
                history,
                user_choice,
            ),
            max_tokens: if is_final {
                FINAL_MAX_TOKENS
            } else {
                CONTINUE_MAX_TOKENS
            },
            temperature: personality.temperature(),
        };

        match (self.generator.complete(request).await, is_final) {
            (Ok(text), true) => TurnOutcome::success(parse_closing(&text)),
            (Ok(text), false) => TurnOutcome::success(parse_reply(&text, &CONTINUE_CHOICES)),
            (Err(e), true) => {
                warn!("Final dialogue call failed, using fallback: {e}");
                TurnOutcome::failure(DialogueReply::closing(APOLOGY_MESSAGE), e)
            }
            (Err(e), false) => {
                warn!("Continue dialogue call failed, using fallback: {e}");
                TurnOutcome::failure(
                    DialogueReply::open(APOLOGY_MESSAGE, Vec::new(), &[CLOSING_CHOICE]),
                    e,
                )
            }
        }
    }
}

/// System message, the tail of the history, then the user's latest pick.
fn build_transcript(
    system: String,
    history: &[ConversationEntry],
    user_choice: &str,
) -> Vec<ChatMessage> {
    let recent = &history[history.len().saturating_sub(MAX_HISTORY_ENTRIES)..];

    let mut messages = Vec::with_capacity(recent.len() + 2);
    messages.push(ChatMessage::system(system));
    messages.extend(recent.iter().map(|entry| match entry.role {
        Role::User => ChatMessage::user(entry.content.clone()),
        Role::Assistant => ChatMessage::assistant(entry.content.clone()),
    }));

    // The extension appends the pick to its history before sending.
    let already_sent = recent
        .last()
        .is_some_and(|last| last.role == Role::User && last.content.trim() == user_choice.trim());
    if !already_sent {
        messages.push(ChatMessage::user(user_choice));
    }
    messages
}

/// Decodes the JSON envelope, degrading to the model's raw text plus `fallback` choices.
fn parse_reply(text: &str, fallback: &[&str]) -> DialogueReply {
    let (message, choices) = match parse_json_reply::<ReplyEnvelope>(text) {
        Ok(envelope) => (
            envelope.message().to_string(),
            envelope.choices.unwrap_or_default(),
        ),
        Err(e) => {
            debug!("Model output was not a JSON envelope ({e}), using raw text");
            (raw_message(text), Vec::new())
        }
    };
    if message.is_empty() {
        debug!("Model reply had no usable message");
        return DialogueReply::open(FALLBACK_MESSAGES[0], choices, fallback);
    }
    DialogueReply::open(message, choices, fallback)
}

/// The closing line is free text, but tolerate a model that answers in JSON anyway.
fn parse_closing(text: &str) -> DialogueReply {
    let message = match parse_json_reply::<ReplyEnvelope>(text) {
        Ok(envelope) => envelope.message().to_string(),
        Err(_) => raw_message(text),
    };
    if message.is_empty() {
        DialogueReply::closing(FINAL_MESSAGE)
    } else {
        DialogueReply::closing(message)
    }
}

/// Model text cut to `MAX_RAW_MESSAGE_CHARS`. Empty if nothing is left after trimming.
fn raw_message(text: &str) -> String {
    strip_json_fences(text)
        .trim_matches(|c: char| c == '"' || c.is_whitespace())
        .chars()
        .take(MAX_RAW_MESSAGE_CHARS)
        .collect()
}
