//! TMDB movie genre taxonomy.

pub const ACTION: u32 = 28;
pub const ADVENTURE: u32 = 12;
pub const ANIMATION: u32 = 16;
pub const COMEDY: u32 = 35;
pub const CRIME: u32 = 80;
pub const DOCUMENTARY: u32 = 99;
pub const DRAMA: u32 = 18;
pub const FAMILY: u32 = 10751;
pub const FANTASY: u32 = 14;
pub const HISTORY: u32 = 36;
pub const HORROR: u32 = 27;
pub const MUSIC: u32 = 10402;
pub const MYSTERY: u32 = 9648;
pub const ROMANCE: u32 = 10749;
pub const SCIENCE_FICTION: u32 = 878;
pub const TV_MOVIE: u32 = 10770;
pub const THRILLER: u32 = 53;
pub const WAR: u32 = 10752;
pub const WESTERN: u32 = 37;

/// Genre id → display name
pub const GENRE_CATALOG: &[(u32, &str)] = &[
    (ACTION, "Action"),
    (ADVENTURE, "Adventure"),
    (ANIMATION, "Animation"),
    (COMEDY, "Comedy"),
    (CRIME, "Crime"),
    (DOCUMENTARY, "Documentary"),
    (DRAMA, "Drama"),
    (FAMILY, "Family"),
    (FANTASY, "Fantasy"),
    (HISTORY, "History"),
    (HORROR, "Horror"),
    (MUSIC, "Music"),
    (MYSTERY, "Mystery"),
    (ROMANCE, "Romance"),
    (SCIENCE_FICTION, "Science Fiction"),
    (TV_MOVIE, "TV Movie"),
    (THRILLER, "Thriller"),
    (WAR, "War"),
    (WESTERN, "Western"),
];

/// Display name for a genre id, `None` for ids outside the catalog
pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRE_CATALOG
        .iter()
        .find(|(genre_id, _)| *genre_id == id)
        .map(|(_, name)| *name)
}
