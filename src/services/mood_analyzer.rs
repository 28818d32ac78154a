use crate::models::{MoodAnalysis, MoodQuery};

use super::mood_lexicon::{MoodProfile, DEFAULT_PROFILE, FALLBACK_RULES, MOOD_LEXICON};

/// Genres handed to discovery
pub const MAX_GENRES: usize = 3;

/// Vibe phrases quoted in the explanation
const MAX_VIBES: usize = 2;

/// Infers genres from a free-text mood.
///
/// Every lexicon keyword found as a substring contributes its profile, so conflicting
/// moods ("sad but funny") are merged rather than disambiguated. Matching is plain
/// substring search: "mind" also fires inside "remind". Never fails; text without any
/// signal gets the default crowd-pleaser profile.
pub fn analyze(query: &MoodQuery) -> MoodAnalysis {
    let text = query.as_str().to_lowercase();
    let profiles = matched_profiles(&text);

    MoodAnalysis {
        genre_ids: ranked_genres(&profiles),
        explanation: explain(&profiles),
    }
}

fn matched_profiles(text: &str) -> Vec<MoodProfile> {
    let matched: Vec<MoodProfile> = MOOD_LEXICON
        .iter()
        .filter(|entry| text.contains(entry.keyword))
        .map(|entry| entry.profile)
        .collect();

    if !matched.is_empty() {
        return matched;
    }

    FALLBACK_RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|trigger| text.contains(trigger)))
        .map(|rule| rule.profiles.to_vec())
        .unwrap_or_else(|| vec![DEFAULT_PROFILE])
}

/// Flattens profiles in order, keeps first occurrences, caps at `MAX_GENRES`
fn ranked_genres(profiles: &[MoodProfile]) -> Vec<u32> {
    let mut genres = Vec::with_capacity(MAX_GENRES);
    for id in profiles.iter().flat_map(|p| p.genre_ids.iter().copied()) {
        if genres.len() == MAX_GENRES {
            break;
        }
        if !genres.contains(&id) {
            genres.push(id);
        }
    }
    genres
}

fn explain(profiles: &[MoodProfile]) -> String {
    let vibes = profiles
        .iter()
        .take(MAX_VIBES)
        .map(|p| p.vibe)
        .collect::<Vec<_>>()
        .join(" and ")
        .to_lowercase();

    format!(
        "Based on your mood, I've selected {}. These films should hit just the right spot for what you're looking for.",
        vibes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::genres::{
        ACTION, ADVENTURE, ANIMATION, COMEDY, CRIME, DRAMA, FAMILY, HORROR, MYSTERY, ROMANCE,
        SCIENCE_FICTION, THRILLER,
    };
    use std::collections::HashSet;

    fn run(text: &str) -> MoodAnalysis {
        analyze(&MoodQuery::parse(text).unwrap())
    }

    #[test]
    fn test_cry_tonight_uses_lexicon_not_night_fallback() {
        let result = run("I want to cry tonight");
        assert!(result.genre_ids.contains(&DRAMA));
        assert!(result.genre_ids.contains(&ROMANCE));
        assert!(result.explanation.contains("cathartic emotional journey"));
        assert!(!result.explanation.contains("warm and comforting"));
    }

    #[test]
    fn test_no_signal_gives_crowd_pleasers() {
        let result = run("whatever is on");
        assert_eq!(result.genre_ids, vec![DRAMA, COMEDY, ACTION]);
        assert_eq!(
            result.explanation,
            "Based on your mood, I've selected crowd-pleasers. These films should hit just the right spot for what you're looking for."
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(run("SPOOKY season"), run("spooky season"));
    }

    #[test]
    fn test_conflicting_moods_are_merged() {
        // sad: drama, romance; funny (and fun, as a substring): comedy first
        let result = run("sad but funny");
        assert_eq!(result.genre_ids, vec![DRAMA, ROMANCE, COMEDY]);
        assert!(result.explanation.contains("a cathartic emotional journey and pure entertainment"));
    }

    #[test]
    fn test_substring_matching_fires_inside_words() {
        let result = run("please remind me of something");
        assert_eq!(result.genre_ids, vec![SCIENCE_FICTION, THRILLER, MYSTERY]);
    }

    #[test]
    fn test_alone_fallback() {
        let result = run("home alone this weekend");
        assert_eq!(result.genre_ids, vec![DRAMA, MYSTERY]);
        assert!(result.explanation.contains("thought-provoking cinema"));
    }

    #[test]
    fn test_family_fallback_adds_supplemental_profile() {
        let result = run("watching with the kids");
        assert_eq!(result.genre_ids, vec![COMEDY, ADVENTURE, ANIMATION]);
        assert!(result
            .explanation
            .contains("pure entertainment and family-friendly fun"));
    }

    #[test]
    fn test_night_fallback() {
        let result = run("quiet evening in");
        assert_eq!(result.genre_ids, vec![COMEDY, FAMILY, ANIMATION]);
    }

    #[test]
    fn test_fallback_priority_is_ordered() {
        // both "solo" and "night" present: the earlier rule wins
        let result = run("solo night");
        assert_eq!(result.genre_ids, vec![DRAMA, MYSTERY]);
    }

    #[test]
    fn test_explanation_quotes_at_most_two_vibes() {
        let result = run("cozy, tired and nostalgic");
        assert!(result.explanation.contains("something warm and comforting and light entertainment to unwind"));
        assert!(!result.explanation.contains("memory lane"));
    }

    #[test]
    fn test_genres_are_unique_and_capped() {
        let inputs = [
            "cozy tired exhausted comfort nostalgic",
            "excited adventurous energetic pumped",
            "sad",
            "funny",
            "excited scared and thrilling",
        ];
        for text in inputs {
            let result = run(text);
            let unique: HashSet<u32> = result.genre_ids.iter().copied().collect();
            assert!(!result.genre_ids.is_empty());
            assert!(result.genre_ids.len() <= MAX_GENRES);
            assert_eq!(unique.len(), result.genre_ids.len());
        }
    }

    #[test]
    fn test_later_keywords_only_fill_remaining_slots() {
        // excited fills all three slots, scared and thrilling are cut
        let result = run("excited scared and thrilling");
        assert_eq!(result.genre_ids, vec![ACTION, ADVENTURE, SCIENCE_FICTION]);
        assert!(result.explanation.contains("high-energy thrills and spine-tingling scares"));

        // scared leaves one slot; thrilling's duplicate thriller is skipped, crime fills it
        let result = run("scared and thrilling");
        assert_eq!(result.genre_ids, vec![HORROR, THRILLER, CRIME]);
    }

    #[test]
    fn test_single_keyword_keeps_its_primary_genre() {
        for entry in MOOD_LEXICON {
            let result = run(&format!("feeling {} today", entry.keyword));
            assert!(
                result.genre_ids.contains(&entry.profile.genre_ids[0]),
                "keyword {} lost its primary genre",
                entry.keyword
            );
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let query = MoodQuery::parse("romantic date night").unwrap();
        assert_eq!(analyze(&query), analyze(&query));
    }
}
