use crate::dialogue::turn::DialogueService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data: every request is independent.
#[derive(Clone)]
pub struct AppState {
    pub dialogue: DialogueService,
}
