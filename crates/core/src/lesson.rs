use serde::{Deserialize, Serialize};

/// One vocabulary entry, always embedded in a [`Lesson`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub word: String,
    pub translation: String,
    pub pronunciation: String,
    pub example: String,
}

/// A quiz question attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    /// multiple-choice, fill-blank, translation. Open string on purpose:
    /// question kinds are authored content, new kinds must not break decoding.
    #[serde(rename = "type")]
    pub kind: String,
    pub question: String,
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

/// A subtitled scene with its vocabulary and quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub movie_id: String,
    pub title: String,
    pub subtitle: String,
    pub translation: String,
    pub audio_url: String,
    /// Position in the movie, "HH:MM:SS".
    pub timestamp: String,
    pub vocabulary: Vec<VocabularyItem>,
    pub quiz: Vec<QuizQuestion>,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_question_type_field_survives_round_trip() {
        let question = QuizQuestion {
            id: "3".into(),
            kind: "fill-blank".into(),
            question: "Complete: 'Mi _____ es grande.'".into(),
            options: None,
            correct_answer: "familia".into(),
            explanation: Some("The correct word is 'familia' (family).".into()),
        };

        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "fill-blank");
        assert_eq!(json["correctAnswer"], "familia");
        // fill-blank questions serialize options as an explicit null
        assert!(json["options"].is_null());

        let back: QuizQuestion = serde_json::from_value(json).unwrap();
        assert_eq!(back, question);
    }

    #[test]
    fn lesson_movie_reference_uses_camel_case() {
        let lesson = Lesson {
            id: "1".into(),
            movie_id: "1".into(),
            title: "Meeting Nemo".into(),
            subtitle: "Hola, soy Nemo.".into(),
            translation: "Hello, I am Nemo.".into(),
            audio_url: "/audio/lesson1.mp3".into(),
            timestamp: "00:03:24".into(),
            vocabulary: vec![],
            quiz: vec![],
            completed: false,
        };

        let json = serde_json::to_value(&lesson).unwrap();
        assert_eq!(json["movieId"], "1");
        assert_eq!(json["audioUrl"], "/audio/lesson1.mp3");
    }
}
