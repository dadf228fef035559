// All LLM prompt text for the dialogue flow.
// Reuses cross-cutting output rules from llm_client::prompts.

use crate::dialogue::models::ApplicationContext;
use crate::dialogue::personality::Personality;
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};

/// System prompt template.
/// Replace: {personality}, {job_context}, {stats_context}, {turn_instruction}
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are Employment-chan, a supportive anime girl character who celebrates job applications with the user.
{job_context}
{stats_context}

{personality}

Keep the core message encouraging and supportive. Messages are 1-2 sentences max.

{turn_instruction}"#;

/// Opening turn: one message plus reply options for the user.
pub const START_INSTRUCTION: &str = r#"Celebrate the application the user just submitted. If a specific company or role is known, you can mention it excitedly.

Return a JSON object with this EXACT schema:
{"message": "your celebration message", "choices": ["reply option 1", "reply option 2", "reply option 3"]}

Rules for choices:
- 2 or 3 short replies the USER could say back to you (under 60 characters each)
- Written from the user's point of view, not yours
- Vary the mood: e.g. grateful, nervous, fired up"#;

/// User turn that kicks off the opening message.
pub const START_USER_PROMPT: &str = "I just submitted a job application!";

/// Middle turns: respond to the user's last line and offer two new replies.
pub const CONTINUE_INSTRUCTION: &str = r#"Respond to what the user just said, staying in character and keeping the conversation about their job hunt.

Return a JSON object with this EXACT schema:
{"message": "your response", "choices": ["reply option 1", "reply option 2"]}

Rules for choices:
- EXACTLY 2 short replies the USER could say next (under 60 characters each)
- One of them MUST offer a graceful way to end the conversation (e.g. "Thanks, I'll get back to applying!")"#;

/// Last turn: a single closing line, no choices.
pub const FINAL_INSTRUCTION: &str = "Wrap up the conversation with ONE short, warm closing sentence \
    that sends the user back to their job hunt with encouragement. Do not ask a question.";

/// Describes the application in one sentence. Four phrasings depending on which fields are known.
pub fn job_context(context: &ApplicationContext) -> String {
    match (context.job_title(), context.company()) {
        (Some(title), Some(company)) => {
            format!("The user just applied for a \"{title}\" position at \"{company}\".")
        }
        (Some(title), None) => format!("The user just applied for a \"{title}\" position."),
        (None, Some(company)) => format!("The user just applied for a job at \"{company}\"."),
        (None, None) => "The user just submitted a job application.".to_string(),
    }
}

pub fn stats_context(context: &ApplicationContext) -> String {
    format!(
        "This is their application #{} total, and #{} today.",
        context.total_count, context.today_count
    )
}

/// Which kind of turn the system prompt is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnKind {
    Start,
    Continue,
    Final,
}

impl TurnKind {
    fn instruction(self) -> String {
        match self {
            TurnKind::Start => format!("{START_INSTRUCTION}\n\n{JSON_ONLY_INSTRUCTION}"),
            TurnKind::Continue => format!("{CONTINUE_INSTRUCTION}\n\n{JSON_ONLY_INSTRUCTION}"),
            TurnKind::Final => format!("{FINAL_INSTRUCTION}\n{PLAIN_TEXT_INSTRUCTION}"),
        }
    }
}

/// Builds the full system message: persona, application context and the turn's output rules.
pub fn system_prompt(
    context: &ApplicationContext,
    personality: Personality,
    turn: TurnKind,
) -> String {
    SYSTEM_PROMPT_TEMPLATE
        .replace("{job_context}", &job_context(context))
        .replace("{stats_context}", &stats_context(context))
        .replace("{personality}", personality.profile())
        .replace("{turn_instruction}", &turn.instruction())
}
