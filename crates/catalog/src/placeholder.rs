//! Placeholder lessons fabricated at request time.
//!
//! Most movies in the catalog have no authored lessons; instead of an empty
//! list (or a 404), the API hands back stand-in lessons labeled with the
//! requested id and filled from the shared vocabulary/quiz pools.

use cinefluent_core::{Lesson, QuizQuestion, VocabularyItem};

/// Two stand-in lessons for a movie with no authored material.
pub fn lessons_for_movie(
    movie_id: &str,
    vocabulary: &[VocabularyItem],
    quiz: &[QuizQuestion],
) -> Vec<Lesson> {
    vec![
        Lesson {
            id: format!("{movie_id}_lesson_1"),
            movie_id: movie_id.to_string(),
            title: "Introduction Scene".into(),
            subtitle: "Hola, comenzamos nuestra aventura.".into(),
            translation: "Hello, we begin our adventure.".into(),
            audio_url: format!("/audio/{movie_id}_lesson_1.mp3"),
            timestamp: "00:02:15".into(),
            vocabulary: clip(vocabulary, 0, 2),
            quiz: clip(quiz, 0, 1),
            completed: false,
        },
        Lesson {
            id: format!("{movie_id}_lesson_2"),
            movie_id: movie_id.to_string(),
            title: "Character Development".into(),
            subtitle: "Los personajes se conocen mejor.".into(),
            translation: "The characters get to know each other better.".into(),
            audio_url: format!("/audio/{movie_id}_lesson_2.mp3"),
            timestamp: "00:08:30".into(),
            vocabulary: clip(vocabulary, 2, 4),
            quiz: clip(quiz, 1, 3),
            completed: false,
        },
    ]
}

/// A single generic stand-in for a lesson id nothing was authored under.
/// Carries the full vocabulary and quiz pools.
pub fn lesson(lesson_id: &str, vocabulary: &[VocabularyItem], quiz: &[QuizQuestion]) -> Lesson {
    Lesson {
        id: lesson_id.to_string(),
        movie_id: "1".into(),
        title: "Dynamic Lesson".into(),
        subtitle: "Esta es una lección generada dinámicamente.".into(),
        translation: "This is a dynamically generated lesson.".into(),
        audio_url: format!("/audio/{lesson_id}.mp3"),
        timestamp: "00:05:00".into(),
        vocabulary: vocabulary.to_vec(),
        quiz: quiz.to_vec(),
        completed: false,
    }
}

/// Clamped slice clone: out-of-range bounds shrink instead of panicking,
/// so a smaller fixture pool in tests stays usable.
fn clip<T: Clone>(items: &[T], start: usize, end: usize) -> Vec<T> {
    let start = start.min(items.len());
    let end = end.min(items.len());
    items[start..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn synthesized_lessons_are_labeled_with_the_requested_movie() {
        let lessons = lessons_for_movie("7", &fixtures::vocabulary(), &fixtures::quiz());

        assert_eq!(lessons.len(), 2);
        assert!(lessons.iter().all(|lesson| lesson.movie_id == "7"));
        assert_eq!(lessons[0].id, "7_lesson_1");
        assert_eq!(lessons[1].audio_url, "/audio/7_lesson_2.mp3");
    }

    #[test]
    fn synthesized_lessons_split_the_shared_pools() {
        let pool = fixtures::vocabulary();
        let questions = fixtures::quiz();
        let lessons = lessons_for_movie("5", &pool, &questions);

        assert_eq!(lessons[0].vocabulary, pool[..2].to_vec());
        assert_eq!(lessons[1].vocabulary, pool[2..4].to_vec());
        assert_eq!(lessons[0].quiz, questions[..1].to_vec());
        assert_eq!(lessons[1].quiz, questions[1..3].to_vec());
    }

    #[test]
    fn fallback_lesson_echoes_the_requested_id() {
        let stand_in = lesson("does-not-exist", &fixtures::vocabulary(), &fixtures::quiz());

        assert_eq!(stand_in.id, "does-not-exist");
        assert_eq!(stand_in.title, "Dynamic Lesson");
        assert_eq!(stand_in.vocabulary.len(), 4);
        assert_eq!(stand_in.quiz.len(), 3);
        assert!(!stand_in.completed);
    }

    #[test]
    fn clip_tolerates_short_pools() {
        let short = vec![1, 2];
        assert_eq!(clip(&short, 0, 5), vec![1, 2]);
        assert_eq!(clip(&short, 3, 5), Vec::<i32>::new());
    }
}
