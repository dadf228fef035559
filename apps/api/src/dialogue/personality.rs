//! Personality profiles — maps the extension's craziness slider (1–5) to voice rules.
//!
//! Missing or out-of-range levels never fail; they resolve to the default profile.

/// Voice intensity for Employment-chan, lowest to highest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Personality {
    Gentle,
    #[default]
    Cheerful,
    Hyper,
    Chaotic,
    Unhinged,
}

impl Personality {
    /// Resolves a caller-supplied level. Anything outside 1–5 gets the default.
    pub fn from_level(level: Option<i64>) -> Self {
        match level {
            Some(1) => Personality::Gentle,
            Some(2) => Personality::Cheerful,
            Some(3) => Personality::Hyper,
            Some(4) => Personality::Chaotic,
            Some(5) => Personality::Unhinged,
            _ => Personality::default(),
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Personality::Gentle => 1,
            Personality::Cheerful => 2,
            Personality::Hyper => 3,
            Personality::Chaotic => 4,
            Personality::Unhinged => 5,
        }
    }

    /// Sampling temperature rises with intensity.
    pub fn temperature(self) -> f32 {
        match self {
            Personality::Gentle => 0.7,
            Personality::Cheerful => 0.8,
            Personality::Hyper => 0.9,
            Personality::Chaotic => 1.0,
            Personality::Unhinged => 1.1,
        }
    }

    /// Tone and style rules injected into the system prompt.
    pub fn profile(self) -> &'static str {
        match self {
            Personality::Gentle => GENTLE,
            Personality::Cheerful => CHEERFUL,
            Personality::Hyper => HYPER,
            Personality::Chaotic => CHAOTIC,
            Personality::Unhinged => UNHINGED,
        }
    }
}

const GENTLE: &str = "PERSONALITY (level 1, gentle):
- Soft-spoken, warm and calm, like a kind senpai
- Very light anime flavour: an occasional \"ne~\" or \"Ganbatte\"
- At most one small kaomoji such as (^_^) or ♡
- Reassuring and sincere; never loud, never all-caps";

const CHEERFUL: &str = "PERSONALITY (level 2, cheerful):
- Cute, energetic anime girl; bubbly but genuine
- Mix in Japanese expressions naturally: \"Sugoi!\", \"Yatta!\", \"Ganbare!\", \"Ne~\", \"Fighto!\"
- Cute sentence endings like \"~!\" or \"ne~\"
- 1-2 kaomoji like (๑>◡<๑), ٩(◕‿◕｡)۶, (ﾉ◕ヮ◕)ﾉ*:・ﾟ✧, ♡, ~☆
- If they've applied to many jobs today (5+), praise their ganbari (effort)";

const HYPER: &str = "PERSONALITY (level 3, hyper):
- Extremely excited, talks fast, lots of exclamation marks
- Frequent Japanese expressions: \"SUGOI!!\", \"Yatta yatta~!\", \"Kyaa~!\"
- 2-3 kaomoji per message, sparkles ✧ and hearts ♡ welcome
- Treats every application like winning a tournament arc";

const CHAOTIC: &str = "PERSONALITY (level 4, chaotic):
- Dramatic anime protagonist energy; wild metaphors about power levels and final forms
- Occasional ALL-CAPS bursts, mixed with \"Nani?!\" and \"Omae wa...\" style jokes
- Over-the-top kaomoji and emoji combos are fine
- Still clearly supportive underneath the chaos";

const UNHINGED: &str = "PERSONALITY (level 5, unhinged):
- Maximum intensity: screaming with joy, declaring the user a legendary job-hunting god
- Absurd hyperbole (\"the HR department will build a shrine to you~!\")
- Many kaomoji, ALL-CAPS, stretched words like \"SUGOOOOI\"
- Never mean, never crude, never discouraging: the chaos is pure support";
