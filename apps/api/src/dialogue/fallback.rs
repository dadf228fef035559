//! Static replies used whenever the model can't be reached or returns something unusable.

use rand::seq::SliceRandom;
use rand::Rng;

/// Generic cheers used when no milestone applies.
pub const FALLBACK_MESSAGES: [&str; 6] = [
    "Yatta~! You did it! One step closer to your dream job, ne~ (๑>◡<๑)",
    "Sugoi! Keep that momentum going~! Ganbare! ♡",
    "Another application sent! You're unstoppable~ ٩(◕‿◕｡)۶",
    "I'm so proud of you! Every application counts, ne~! ☆",
    "You're doing amazing! The right job is out there waiting for you~!",
    "Fighto! Your dedication will definitely pay off! (ﾉ◕ヮ◕)ﾉ*:・ﾟ✧",
];

/// Reply options for the opening turn.
pub const START_CHOICES: [&str; 3] = [
    "Thank you, Employment-chan! ♡",
    "I'm feeling a bit nervous about this one...",
    "Let's keep the momentum going!",
];

/// Reply options for a middle turn whose output couldn't be parsed.
pub const CONTINUE_CHOICES: [&str; 3] = [
    "Thank you so much! ♡",
    "Tell me more, Employment-chan~",
    "I should get back to applying!",
];

/// Sent when a continuation call fails outright.
pub const APOLOGY_MESSAGE: &str =
    "Gomen ne~! Something went wrong, but I still believe in you! ♡";

/// The single option offered alongside the apology so the user can wrap up.
pub const CLOSING_CHOICE: &str = "Thanks, Employment-chan! See you next time~";

/// Closing line used when the model's final sentence comes back empty.
pub const FINAL_MESSAGE: &str = "Ganbatte ne~! I'll be cheering for you on the next one! ♡";

/// Exact-match milestone messages keyed by total application count.
pub fn milestone_message(total_count: i64) -> Option<&'static str> {
    match total_count {
        1 => Some("Your first application! Sugoi~! This is just the beginning of something great, ne~ (๑>◡<๑) ♡"),
        10 => Some("Yatta~! 10 applications! You're building such amazing momentum! Ganbare! ٩(◕‿◕｡)۶"),
        25 => Some("25 applications?! Sugoi sugoi~! Your persistence is truly inspiring! ☆"),
        50 => Some("50 applications! You're like a job hunting hero~! I'm so proud of you! (ﾉ◕ヮ◕)ﾉ*:・ﾟ✧"),
        100 => Some("100 APPLICATIONS?! SUGOI~! You're absolutely legendary! I believe in you so much! ♡♡♡"),
        _ => None,
    }
}

/// Opening message when the model call failed: the milestone message if one
/// matches, otherwise a uniform pick from `FALLBACK_MESSAGES`.
pub fn fallback_message<R: Rng + ?Sized>(total_count: i64, rng: &mut R) -> &'static str {
    milestone_message(total_count)
        .or_else(|| FALLBACK_MESSAGES.choose(rng).copied())
        .unwrap_or(FALLBACK_MESSAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_milestones_are_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        for total in [1, 10, 25, 50, 100] {
            let expected = milestone_message(total).unwrap();
            assert_eq!(fallback_message(total, &mut rng), expected);
            assert!(!FALLBACK_MESSAGES.contains(&expected));
        }
    }

    #[test]
    fn test_non_milestones_come_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for total in [0, 2, 9, 11, 24, 26, 99, 101, 1000, -1] {
            let message = fallback_message(total, &mut rng);
            assert!(FALLBACK_MESSAGES.contains(&message), "{total}: {message}");
        }
    }

    #[test]
    fn test_pool_selection_covers_every_entry() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<&str> = (0..500).map(|_| fallback_message(3, &mut rng)).collect();
        assert_eq!(seen.len(), FALLBACK_MESSAGES.len());
    }

    #[test]
    fn test_same_seed_same_pick() {
        let a = fallback_message(7, &mut StdRng::seed_from_u64(99));
        let b = fallback_message(7, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_continue_choices_offer_an_exit() {
        assert!(CONTINUE_CHOICES.iter().any(|c| c.contains("get back to applying")));
    }
}
