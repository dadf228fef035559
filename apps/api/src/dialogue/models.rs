use serde::{Deserialize, Serialize};

/// Upper bound on reply choices shown to the user.
pub const MAX_CHOICES: usize = 3;

fn one() -> i64 {
    1
}

/// Job-application context supplied by the extension on every request. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationContext {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default = "one")]
    pub today_count: i64,
    #[serde(default = "one")]
    pub total_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub craziness_level: Option<i64>,
}

impl Default for ApplicationContext {
    fn default() -> Self {
        Self {
            job_title: None,
            company: None,
            today_count: 1,
            total_count: 1,
            craziness_level: None,
        }
    }
}

impl ApplicationContext {
    /// Job title, if present and not blank.
    pub fn job_title(&self) -> Option<&str> {
        non_blank(self.job_title.as_deref())
    }

    /// Company, if present and not blank.
    pub fn company(&self) -> Option<&str> {
        non_blank(self.company.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior line of the conversation, replayed verbatim on each continuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: Role,
    pub content: String,
}

/// The reply envelope. `choices` is empty exactly when `is_final` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueReply {
    pub message: String,
    pub choices: Vec<String>,
    pub is_final: bool,
}

impl DialogueReply {
    /// A reply that keeps the conversation going.
    ///
    /// Choices are trimmed, blanks dropped and capped at `MAX_CHOICES`.
    /// If nothing usable is left, `fallback` is used instead.
    pub fn open(message: impl Into<String>, choices: Vec<String>, fallback: &[&str]) -> Self {
        let mut choices: Vec<String> = choices
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .take(MAX_CHOICES)
            .collect();
        if choices.is_empty() {
            choices = fallback
                .iter()
                .take(MAX_CHOICES)
                .map(|c| c.to_string())
                .collect();
        }
        Self {
            message: message.into(),
            choices,
            is_final: false,
        }
    }

    /// The last line of a conversation. Carries no choices.
    pub fn closing(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            choices: Vec::new(),
            is_final: true,
        }
    }
}

/// A reply plus the upstream failure, if the reply is a fallback for one.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub reply: DialogueReply,
    pub error: Option<String>,
}

impl TurnOutcome {
    pub fn success(reply: DialogueReply) -> Self {
        Self { reply, error: None }
    }

    pub fn failure(reply: DialogueReply, error: impl ToString) -> Self {
        Self {
            reply,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults_counts_to_one() {
        let ctx: ApplicationContext = serde_json::from_str(r#"{"jobTitle": "Engineer"}"#).unwrap();
        assert_eq!(ctx.job_title(), Some("Engineer"));
        assert_eq!(ctx.today_count, 1);
        assert_eq!(ctx.total_count, 1);
        assert_eq!(ctx.craziness_level, None);
    }

    #[test]
    fn test_blank_fields_count_as_absent() {
        let ctx: ApplicationContext =
            serde_json::from_str(r#"{"jobTitle": "  ", "company": "", "todayCount": 2, "totalCount": 3}"#)
                .unwrap();
        assert_eq!(ctx.job_title(), None);
        assert_eq!(ctx.company(), None);
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_str::<ConversationEntry>(r#"{"role": "system", "content": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_open_reply_caps_and_cleans_choices() {
        let reply = DialogueReply::open(
            "hi",
            vec![" a ".into(), "".into(), "b".into(), "c".into(), "d".into()],
            &["x"],
        );
        assert_eq!(reply.choices, vec!["a", "b", "c"]);
        assert!(!reply.is_final);
    }

    #[test]
    fn test_open_reply_never_has_empty_choices() {
        let reply = DialogueReply::open("hi", vec!["   ".into()], &["x", "y"]);
        assert_eq!(reply.choices, vec!["x", "y"]);
        assert!(!reply.is_final);
    }

    #[test]
    fn test_closing_reply_has_no_choices() {
        let reply = DialogueReply::closing("bye");
        assert!(reply.is_final);
        assert!(reply.choices.is_empty());
    }

    #[test]
    fn test_reply_serializes_camel_case() {
        let value = serde_json::to_value(DialogueReply::closing("bye")).unwrap();
        assert_eq!(value["isFinal"], true);
        assert!(value.get("is_final").is_none());
    }
}
