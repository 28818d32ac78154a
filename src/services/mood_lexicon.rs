//! Static mood vocabulary.
//!
//! Keywords are matched as lower-case substrings of the user's text, in table order.
//! Table order matters: genres of earlier entries rank ahead of later ones.

use super::genres::{
    ACTION, ADVENTURE, ANIMATION, COMEDY, CRIME, DOCUMENTARY, DRAMA, FAMILY, FANTASY, HISTORY,
    HORROR, MUSIC, MYSTERY, ROMANCE, SCIENCE_FICTION, THRILLER, WAR,
};

/// Genres a mood points at (most relevant first) and how we describe it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodProfile {
    pub genre_ids: &'static [u32],
    pub vibe: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconEntry {
    pub keyword: &'static str,
    pub profile: MoodProfile,
}

/// Applied when no lexicon keyword matches. The first rule with a trigger
/// present in the text wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRule {
    pub triggers: &'static [&'static str],
    pub profiles: &'static [MoodProfile],
}

const fn profile(genre_ids: &'static [u32], vibe: &'static str) -> MoodProfile {
    MoodProfile { genre_ids, vibe }
}

const fn entry(keyword: &'static str, profile: MoodProfile) -> LexiconEntry {
    LexiconEntry { keyword, profile }
}

const COZY: MoodProfile = profile(&[COMEDY, FAMILY, ANIMATION], "Something warm and comforting");
const REFLECTIVE: MoodProfile = profile(&[DRAMA, MYSTERY], "Thought-provoking cinema");
const FUN: MoodProfile = profile(&[COMEDY, ADVENTURE, ANIMATION], "Pure entertainment");
const FAMILY_FRIENDLY: MoodProfile = profile(&[ANIMATION, FAMILY], "Family-friendly fun");

/// Used when neither a keyword nor a fallback trigger is present
pub const DEFAULT_PROFILE: MoodProfile = profile(&[DRAMA, COMEDY, ACTION], "crowd-pleasers");

pub const MOOD_LEXICON: &[LexiconEntry] = &[
    // Relaxing / comfort
    entry("cozy", COZY),
    entry("relaxed", profile(&[COMEDY, FAMILY, DRAMA], "Easy-watching comfort")),
    entry("tired", profile(&[COMEDY, ANIMATION, FAMILY], "Light entertainment to unwind")),
    entry("exhausted", profile(&[COMEDY, ANIMATION], "No-brainer fun")),
    entry("comfort", profile(&[FAMILY, COMEDY, FANTASY], "Heartwarming stories")),
    entry("nostalgic", profile(&[FAMILY, ADVENTURE, FANTASY], "A trip down memory lane")),
    // Emotional / deep
    entry("sad", profile(&[DRAMA, ROMANCE], "A cathartic emotional journey")),
    entry(
        "cry",
        profile(&[DRAMA, ROMANCE], "A cathartic emotional journey that will move you deeply"),
    ),
    entry("emotional", profile(&[DRAMA, ROMANCE, FAMILY], "Deeply touching stories")),
    entry("reflective", REFLECTIVE),
    entry("melancholy", profile(&[DRAMA, ROMANCE], "Beautifully melancholic")),
    // Exciting / energetic
    entry("excited", profile(&[ACTION, ADVENTURE, SCIENCE_FICTION], "High-energy thrills")),
    entry("adventurous", profile(&[ADVENTURE, ACTION, FANTASY], "Epic adventures await")),
    entry("energetic", profile(&[ACTION, COMEDY, ADVENTURE], "Fast-paced excitement")),
    entry("pumped", profile(&[ACTION, CRIME, THRILLER], "Adrenaline-pumping action")),
    // Scary / thrilling
    entry("scared", profile(&[HORROR, THRILLER], "Spine-tingling scares")),
    entry("spooky", profile(&[HORROR, MYSTERY, THRILLER], "Delightfully creepy")),
    entry("thrilling", profile(&[THRILLER, CRIME, MYSTERY], "Edge-of-your-seat suspense")),
    entry("tense", profile(&[THRILLER, CRIME, DRAMA], "Gripping tension throughout")),
    // Romantic
    entry("romantic", profile(&[ROMANCE, COMEDY, DRAMA], "Love stories that captivate")),
    entry("love", profile(&[ROMANCE, DRAMA], "Tales of passion and love")),
    entry("date", profile(&[ROMANCE, COMEDY], "Perfect for date night")),
    // Intellectual / mind-bending
    entry("curious", profile(&[SCIENCE_FICTION, DOCUMENTARY, MYSTERY], "Curiosity-sparking films")),
    entry("intellectual", profile(&[SCIENCE_FICTION, DRAMA, HISTORY], "Intellectually stimulating")),
    entry("mind", profile(&[SCIENCE_FICTION, THRILLER, MYSTERY], "Mind-bending narratives")),
    entry("philosophical", profile(&[SCIENCE_FICTION, DRAMA], "Philosophically rich")),
    // Fun / social
    entry("fun", FUN),
    entry("funny", profile(&[COMEDY], "Laugh-out-loud comedy")),
    entry("party", profile(&[COMEDY, MUSIC], "Party vibes")),
    entry("friends", profile(&[COMEDY, ADVENTURE, ACTION], "Great with friends")),
    // Inspiring
    entry("motivated", profile(&[DRAMA, HISTORY, WAR], "Stories of triumph")),
    entry("inspired", profile(&[DRAMA, DOCUMENTARY], "Uplifting inspiration")),
    entry("hopeful", profile(&[DRAMA, FAMILY, FANTASY], "Stories full of hope")),
];

pub const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        triggers: &["alone", "solo"],
        profiles: &[REFLECTIVE],
    },
    FallbackRule {
        triggers: &["family", "kids"],
        profiles: &[FUN, FAMILY_FRIENDLY],
    },
    FallbackRule {
        triggers: &["night", "evening"],
        profiles: &[COZY],
    },
];
