pub mod catalog;
pub mod genres;
pub mod mood_analyzer;
pub mod mood_lexicon;
pub mod providers;
pub mod ranker;
pub mod recommendations;

pub use mood_analyzer::analyze;
pub use ranker::{rank, rank_generated};
pub use recommendations::{GenerativeRecommender, HeuristicRecommender, MoodRecommender};
