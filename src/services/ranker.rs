use std::collections::HashSet;

use crate::models::{CandidateItem, RankedRecommendation};

use super::genres::genre_name;

/// Default size of the mood-match answer
pub const DEFAULT_MAX_RESULTS: usize = 6;

/// Vote average at which a title is praised regardless of genre fit
pub const ACCLAIMED_THRESHOLD: f64 = 8.0;

const ACCLAIMED_REASON: &str =
    "A critically acclaimed masterpiece that's perfect for your current mood.";
const GENERIC_REASON: &str = "A highly-rated film that matches your vibe.";

/// Merges candidate pools for the heuristic strategy.
///
/// Pools are concatenated in the order given, so earlier pools win ties. The first
/// occurrence of each id is kept and the result is cut to `max_results`.
pub fn rank(
    pools: Vec<Vec<CandidateItem>>,
    genre_ids: &[u32],
    max_results: usize,
) -> Vec<RankedRecommendation> {
    dedupe_by_id(pools.into_iter().flatten(), |item| item.id, max_results)
        .into_iter()
        .map(|item| {
            let reason = reason_for(&item, genre_ids);
            RankedRecommendation { item, reason }
        })
        .collect()
}

/// Same merge for the generative strategy; reasons come from the model and pass through.
pub fn rank_generated(
    resolved: Vec<(CandidateItem, String)>,
    max_results: usize,
) -> Vec<RankedRecommendation> {
    dedupe_by_id(resolved, |(item, _)| item.id, max_results)
        .into_iter()
        .map(|(item, reason)| RankedRecommendation { item, reason })
        .collect()
}

/// Genre match first, then the acclaim override replaces it when the score qualifies.
pub fn reason_for(item: &CandidateItem, genre_ids: &[u32]) -> String {
    let matched_genre = item
        .genre_ids
        .iter()
        .filter(|id| genre_ids.contains(*id))
        .find_map(|id| genre_name(*id));

    let mut reason = match matched_genre {
        Some(name) => format!(
            "This {} gem fits perfectly with what you're looking for.",
            name.to_lowercase()
        ),
        None => GENERIC_REASON.to_string(),
    };

    if item.vote_average >= ACCLAIMED_THRESHOLD {
        reason = ACCLAIMED_REASON.to_string();
    }

    reason
}

fn dedupe_by_id<T, I, F>(items: I, id_of: F, max_results: usize) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> u64,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(id_of(item)))
        .take(max_results)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::genres::{COMEDY, DRAMA, HORROR, ROMANCE, WESTERN};

    fn candidate(id: u64, title: &str, vote_average: f64, genre_ids: Vec<u32>) -> CandidateItem {
        CandidateItem {
            id,
            title: title.to_string(),
            overview: String::new(),
            poster_path: None,
            vote_average,
            release_date: "2001-01-01".to_string(),
            genre_ids,
        }
    }

    #[test]
    fn test_duplicate_keeps_first_pool_data() {
        let top_rated = vec![candidate(550, "Fight Club (rated pool)", 7.9, vec![DRAMA])];
        let popular = vec![
            candidate(550, "Fight Club (popular pool)", 7.9, vec![DRAMA]),
            candidate(680, "Pulp Fiction", 7.5, vec![DRAMA]),
        ];

        let ranked = rank(vec![top_rated, popular], &[DRAMA], DEFAULT_MAX_RESULTS);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked.iter().filter(|r| r.item.id == 550).count(), 1);
        assert_eq!(ranked[0].item.title, "Fight Club (rated pool)");
        assert_eq!(ranked[1].item.id, 680);
    }

    #[test]
    fn test_truncates_to_max_results_preserving_order() {
        let pool_a: Vec<_> = (1..=4).map(|i| candidate(i, "a", 6.0, vec![])).collect();
        let pool_b: Vec<_> = (3..=9).map(|i| candidate(i, "b", 6.0, vec![])).collect();

        let ranked = rank(vec![pool_a, pool_b], &[DRAMA], 6);
        let ids: Vec<u64> = ranked.iter().map(|r| r.item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_pools() {
        assert!(rank(vec![vec![], vec![]], &[DRAMA], 6).is_empty());
    }

    #[test]
    fn test_acclaim_beats_missing_genre_match() {
        let item = candidate(1, "Seven Samurai", 8.5, vec![WESTERN]);
        assert_eq!(reason_for(&item, &[COMEDY]), ACCLAIMED_REASON);
    }

    #[test]
    fn test_acclaim_beats_genre_match() {
        let item = candidate(1, "Parasite", 8.0, vec![COMEDY]);
        assert_eq!(reason_for(&item, &[COMEDY]), ACCLAIMED_REASON);
    }

    #[test]
    fn test_first_matching_genre_names_the_reason() {
        let item = candidate(1, "Notebook", 7.9, vec![HORROR, ROMANCE, DRAMA]);
        assert_eq!(
            reason_for(&item, &[DRAMA, ROMANCE]),
            "This romance gem fits perfectly with what you're looking for."
        );
    }

    #[test]
    fn test_generic_reason_without_overlap() {
        let item = candidate(1, "Unforgiven", 7.9, vec![WESTERN]);
        assert_eq!(reason_for(&item, &[COMEDY]), GENERIC_REASON);
    }

    #[test]
    fn test_unknown_genre_ids_are_skipped() {
        let item = candidate(1, "Mystery box", 6.0, vec![99999, COMEDY]);
        assert_eq!(
            reason_for(&item, &[99999, COMEDY]),
            "This comedy gem fits perfectly with what you're looking for."
        );
    }

    #[test]
    fn test_generated_reasons_pass_through() {
        let resolved = vec![
            (candidate(27205, "Inception", 8.4, vec![]), "Dreams within dreams.".to_string()),
            (candidate(27205, "Inception", 8.4, vec![]), "Duplicate pick.".to_string()),
            (candidate(157336, "Interstellar", 8.4, vec![]), "Space and time.".to_string()),
        ];

        let ranked = rank_generated(resolved, 6);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].reason, "Dreams within dreams.");
        assert_eq!(ranked[1].item.id, 157336);
    }
}
