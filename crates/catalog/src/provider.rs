use cinefluent_core::{
    Achievement, CommunityPost, LanguageProgress, LeaderboardEntry, Lesson, Movie, QuizQuestion,
    VocabularyItem,
};

use crate::fixtures;

/// Read-only source of the authored catalog.
///
/// Handlers depend on this trait rather than on module-level statics, so
/// tests can substitute a fixture catalog without touching process state.
pub trait Catalog: Send + Sync {
    fn movies(&self) -> &[Movie];
    fn lessons(&self) -> &[Lesson];
    fn vocabulary(&self) -> &[VocabularyItem];
    fn quiz(&self) -> &[QuizQuestion];
    fn achievements(&self) -> &[Achievement];
    fn community_posts(&self) -> &[CommunityPost];
    fn leaderboard(&self) -> &[LeaderboardEntry];
    fn languages(&self) -> &[LanguageProgress];

    /// Linear scan; the catalog is small enough that an index would be noise.
    fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies().iter().find(|movie| movie.id == id)
    }

    fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons().iter().find(|lesson| lesson.id == id)
    }

    /// Lessons authored for a movie. May be empty; callers decide whether
    /// to fall back to placeholder synthesis.
    fn lessons_for_movie(&self, movie_id: &str) -> Vec<Lesson> {
        self.lessons()
            .iter()
            .filter(|lesson| lesson.movie_id == movie_id)
            .cloned()
            .collect()
    }
}

/// The authored demo catalog, built from fixture literals.
pub struct StaticCatalog {
    movies: Vec<Movie>,
    lessons: Vec<Lesson>,
    vocabulary: Vec<VocabularyItem>,
    quiz: Vec<QuizQuestion>,
    achievements: Vec<Achievement>,
    community_posts: Vec<CommunityPost>,
    leaderboard: Vec<LeaderboardEntry>,
    languages: Vec<LanguageProgress>,
}

impl StaticCatalog {
    pub fn demo() -> Self {
        Self {
            movies: fixtures::movies(),
            lessons: fixtures::lessons(),
            vocabulary: fixtures::vocabulary(),
            quiz: fixtures::quiz(),
            achievements: fixtures::achievements(),
            community_posts: fixtures::community_posts(),
            leaderboard: fixtures::leaderboard(),
            languages: fixtures::languages(),
        }
    }
}

impl Catalog for StaticCatalog {
    fn movies(&self) -> &[Movie] {
        &self.movies
    }

    fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    fn vocabulary(&self) -> &[VocabularyItem] {
        &self.vocabulary
    }

    fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    fn community_posts(&self) -> &[CommunityPost] {
        &self.community_posts
    }

    fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }

    fn languages(&self) -> &[LanguageProgress] {
        &self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_the_fixed_counts() {
        let catalog = StaticCatalog::demo();
        assert_eq!(catalog.movies().len(), 8);
        assert_eq!(catalog.lessons().len(), 2);
        assert_eq!(catalog.vocabulary().len(), 4);
        assert_eq!(catalog.quiz().len(), 3);
        assert_eq!(catalog.achievements().len(), 4);
        assert_eq!(catalog.community_posts().len(), 4);
        assert_eq!(catalog.leaderboard().len(), 6);
        assert_eq!(catalog.languages().len(), 3);
    }

    #[test]
    fn movie_lookup_scans_by_id() {
        let catalog = StaticCatalog::demo();
        assert_eq!(catalog.movie("3").map(|m| m.title.as_str()), Some("Ratatouille"));
        assert!(catalog.movie("99").is_none());
    }

    #[test]
    fn authored_lessons_belong_to_movie_one() {
        let catalog = StaticCatalog::demo();
        let lessons = catalog.lessons_for_movie("1");
        assert_eq!(lessons.len(), 2);
        assert!(lessons.iter().all(|lesson| lesson.movie_id == "1"));

        assert!(catalog.lessons_for_movie("5").is_empty());
    }
}
