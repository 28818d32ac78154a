pub mod catalog;
pub mod llm;
pub mod recommendation;
pub mod tmdb;

pub use catalog::{
    CastMember, DetailBundle, ListingCategory, MediaKind, MovieDetails, MovieHighlights,
    Paginated, ShowDetails, Video,
};
pub use recommendation::{
    CandidateItem, GeneratedPicks, MoodAnalysis, MoodMatch, MoodMatchRequest, MoodQuery,
    RankedRecommendation, TitlePick,
};
