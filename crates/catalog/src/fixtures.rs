//! Authored demo data. These are the only "rows" the service ever has;
//! they are cloned into a [`crate::StaticCatalog`] at startup and stay
//! immutable for the life of the process.

use cinefluent_core::{
    Achievement, AchievementStatus, CommunityPost, LanguageProgress, LeaderboardEntry, Lesson,
    Movie, QuizQuestion, VocabularyItem,
};

pub fn movies() -> Vec<Movie> {
    vec![
        Movie {
            id: "1".into(),
            title: "Finding Nemo".into(),
            language: "Spanish".into(),
            difficulty: "Beginner".into(),
            rating: 4.8,
            duration: "100 min".into(),
            scenes: "12 scenes".into(),
            progress: 35,
            thumbnail: "🐠".into(),
            total_lessons: 12,
            completed_lessons: 4,
        },
        Movie {
            id: "2".into(),
            title: "Toy Story".into(),
            language: "Spanish".into(),
            difficulty: "Beginner".into(),
            rating: 4.9,
            duration: "81 min".into(),
            scenes: "10 scenes".into(),
            progress: 100,
            thumbnail: "🤠".into(),
            total_lessons: 10,
            completed_lessons: 10,
        },
        Movie {
            id: "3".into(),
            title: "Ratatouille".into(),
            language: "French".into(),
            difficulty: "Intermediate".into(),
            rating: 4.7,
            duration: "111 min".into(),
            scenes: "15 scenes".into(),
            progress: 0,
            thumbnail: "🐭".into(),
            total_lessons: 15,
            completed_lessons: 0,
        },
        Movie {
            id: "4".into(),
            title: "The Incredibles".into(),
            language: "Spanish".into(),
            difficulty: "Intermediate".into(),
            rating: 4.6,
            duration: "115 min".into(),
            scenes: "14 scenes".into(),
            progress: 20,
            thumbnail: "💪".into(),
            total_lessons: 14,
            completed_lessons: 3,
        },
        Movie {
            id: "5".into(),
            title: "Monsters, Inc.".into(),
            language: "German".into(),
            difficulty: "Beginner".into(),
            rating: 4.5,
            duration: "92 min".into(),
            scenes: "11 scenes".into(),
            progress: 0,
            thumbnail: "👹".into(),
            total_lessons: 11,
            completed_lessons: 0,
        },
        Movie {
            id: "6".into(),
            title: "Coco".into(),
            language: "Spanish".into(),
            difficulty: "Intermediate".into(),
            rating: 4.9,
            duration: "105 min".into(),
            scenes: "13 scenes".into(),
            progress: 60,
            thumbnail: "💀".into(),
            total_lessons: 13,
            completed_lessons: 8,
        },
        Movie {
            id: "7".into(),
            title: "Frozen".into(),
            language: "French".into(),
            difficulty: "Beginner".into(),
            rating: 4.7,
            duration: "102 min".into(),
            scenes: "12 scenes".into(),
            progress: 0,
            thumbnail: "❄️".into(),
            total_lessons: 12,
            completed_lessons: 0,
        },
        Movie {
            id: "8".into(),
            title: "Moana".into(),
            language: "Spanish".into(),
            difficulty: "Intermediate".into(),
            rating: 4.8,
            duration: "107 min".into(),
            scenes: "14 scenes".into(),
            progress: 45,
            thumbnail: "🌊".into(),
            total_lessons: 14,
            completed_lessons: 6,
        },
    ]
}

/// The shared vocabulary pool. Placeholder lessons embed slices of it.
pub fn vocabulary() -> Vec<VocabularyItem> {
    vec![
        VocabularyItem {
            word: "océano".into(),
            translation: "ocean".into(),
            pronunciation: "/oh-SEH-ah-no/".into(),
            example: "El pez vive en el océano.".into(),
        },
        VocabularyItem {
            word: "familia".into(),
            translation: "family".into(),
            pronunciation: "/fah-MEE-lee-ah/".into(),
            example: "Mi familia es muy grande.".into(),
        },
        VocabularyItem {
            word: "aventura".into(),
            translation: "adventure".into(),
            pronunciation: "/ah-ben-TOO-rah/".into(),
            example: "Esta es una gran aventura.".into(),
        },
        VocabularyItem {
            word: "amistad".into(),
            translation: "friendship".into(),
            pronunciation: "/ah-mees-TAHD/".into(),
            example: "La amistad es muy importante.".into(),
        },
    ]
}

/// The shared quiz pool. Placeholder lessons embed slices of it.
pub fn quiz() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "1".into(),
            kind: "multiple-choice".into(),
            question: "What does 'océano' mean?".into(),
            options: Some(vec![
                "river".into(),
                "ocean".into(),
                "lake".into(),
                "sea".into(),
            ]),
            correct_answer: "ocean".into(),
            explanation: Some("'Océano' means ocean in Spanish.".into()),
        },
        QuizQuestion {
            id: "2".into(),
            kind: "multiple-choice".into(),
            question: "How do you say 'family' in Spanish?".into(),
            options: Some(vec![
                "amigo".into(),
                "familia".into(),
                "casa".into(),
                "comida".into(),
            ]),
            correct_answer: "familia".into(),
            explanation: Some("'Familia' means family in Spanish.".into()),
        },
        QuizQuestion {
            id: "3".into(),
            kind: "fill-blank".into(),
            question: "Complete: 'Mi _____ es grande.'".into(),
            options: None,
            correct_answer: "familia".into(),
            explanation: Some("The correct word is 'familia' (family).".into()),
        },
    ]
}

/// The two authored lessons. Both belong to movie "1"; every other movie
/// gets placeholder lessons at request time.
pub fn lessons() -> Vec<Lesson> {
    let pool = vocabulary();
    let questions = quiz();

    vec![
        Lesson {
            id: "1".into(),
            movie_id: "1".into(),
            title: "Meeting Nemo".into(),
            subtitle: "Hola, soy Nemo. Vivo en el océano con mi familia.".into(),
            translation: "Hello, I am Nemo. I live in the ocean with my family.".into(),
            audio_url: "/audio/lesson1.mp3".into(),
            timestamp: "00:03:24".into(),
            vocabulary: pool[..3].to_vec(),
            quiz: questions[..2].to_vec(),
            completed: false,
        },
        Lesson {
            id: "2".into(),
            movie_id: "1".into(),
            title: "The Great Barrier Reef".into(),
            subtitle: "Este es nuestro hogar, el arrecife de coral.".into(),
            translation: "This is our home, the coral reef.".into(),
            audio_url: "/audio/lesson2.mp3".into(),
            timestamp: "00:05:12".into(),
            vocabulary: vec![
                VocabularyItem {
                    word: "hogar".into(),
                    translation: "home".into(),
                    pronunciation: "/oh-GAHR/".into(),
                    example: "Mi hogar está en el océano.".into(),
                },
                VocabularyItem {
                    word: "arrecife".into(),
                    translation: "reef".into(),
                    pronunciation: "/ah-reh-SEE-feh/".into(),
                    example: "El arrecife es hermoso.".into(),
                },
            ],
            quiz: vec![QuizQuestion {
                id: "4".into(),
                kind: "multiple-choice".into(),
                question: "What does 'hogar' mean?".into(),
                options: Some(vec![
                    "house".into(),
                    "home".into(),
                    "hotel".into(),
                    "hospital".into(),
                ]),
                correct_answer: "home".into(),
                explanation: Some("'Hogar' means home in Spanish.".into()),
            }],
            completed: true,
        },
    ]
}

pub fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "first_movie".into(),
            title: "First Movie".into(),
            description: "Complete your first movie".into(),
            status: AchievementStatus::Earned,
            icon: "🎬".into(),
            color: "primary".into(),
            progress: None,
            earned_date: Some("2 days ago".into()),
        },
        Achievement {
            id: "week_warrior".into(),
            title: "Week Warrior".into(),
            description: "7-day learning streak".into(),
            status: AchievementStatus::Earned,
            icon: "🔥".into(),
            color: "warning".into(),
            progress: None,
            earned_date: Some("1 week ago".into()),
        },
        Achievement {
            id: "vocabulary_master".into(),
            title: "Vocabulary Master".into(),
            description: "Learn 500 new words".into(),
            status: AchievementStatus::InProgress,
            icon: "📚".into(),
            color: "success".into(),
            progress: Some(69),
            earned_date: None,
        },
        Achievement {
            id: "polyglot".into(),
            title: "Polyglot".into(),
            description: "Study 3 different languages".into(),
            status: AchievementStatus::Locked,
            icon: "🌍".into(),
            color: "muted".into(),
            progress: None,
            earned_date: None,
        },
    ]
}

pub fn community_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "1".into(),
            user: "Sarah Chen".into(),
            initials: "SC".into(),
            time: "2m ago".into(),
            content: "Just finished Toy Story in Spanish! The vocabulary was perfect for beginners 🎬"
                .into(),
            likes: 12,
            is_liked: false,
            badge: Some("crown".into()),
            streak: 28,
        },
        CommunityPost {
            id: "2".into(),
            user: "Miguel Rodriguez".into(),
            initials: "MR".into(),
            time: "15m ago".into(),
            content: "Does anyone know where I can watch Finding Nemo with French subtitles?".into(),
            likes: 5,
            is_liked: true,
            badge: Some("medal".into()),
            streak: 21,
        },
        CommunityPost {
            id: "3".into(),
            user: "Emma Thompson".into(),
            initials: "ET".into(),
            time: "1h ago".into(),
            content: "Tip: Use the 'Export to Anki' feature after each lesson. It's been a game changer for retention! 🧠"
                .into(),
            likes: 23,
            is_liked: false,
            badge: Some("award".into()),
            streak: 19,
        },
        CommunityPost {
            id: "4".into(),
            user: "Carlos Rodriguez".into(),
            initials: "CR".into(),
            time: "2h ago".into(),
            content: "Finished my first week on CineFluent! Already learned 50+ new words through movies 🚀"
                .into(),
            likes: 8,
            is_liked: false,
            badge: None,
            streak: 7,
        },
    ]
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            rank: 1,
            name: "Sarah Chen".into(),
            points: 2847,
            streak: 28,
            change: "+5".into(),
            badge: Some("crown".into()),
            avatar: "SC".into(),
            level: "Expert".into(),
            is_current_user: false,
        },
        LeaderboardEntry {
            rank: 2,
            name: "Miguel Rodriguez".into(),
            points: 2651,
            streak: 21,
            change: "+2".into(),
            badge: Some("medal".into()),
            avatar: "MR".into(),
            level: "Advanced".into(),
            is_current_user: false,
        },
        LeaderboardEntry {
            rank: 3,
            name: "Emma Thompson".into(),
            points: 2398,
            streak: 19,
            change: "-1".into(),
            badge: Some("award".into()),
            avatar: "ET".into(),
            level: "Advanced".into(),
            is_current_user: false,
        },
        LeaderboardEntry {
            rank: 4,
            name: "You".into(),
            points: 1847,
            streak: 12,
            change: "+3".into(),
            badge: None,
            avatar: "YU".into(),
            level: "Intermediate".into(),
            is_current_user: true,
        },
        LeaderboardEntry {
            rank: 5,
            name: "Akira Tanaka".into(),
            points: 1654,
            streak: 15,
            change: "0".into(),
            badge: None,
            avatar: "AT".into(),
            level: "Intermediate".into(),
            is_current_user: false,
        },
        LeaderboardEntry {
            rank: 6,
            name: "Maria Garcia".into(),
            points: 1432,
            streak: 9,
            change: "+1".into(),
            badge: None,
            avatar: "MG".into(),
            level: "Beginner".into(),
            is_current_user: false,
        },
    ]
}

pub fn languages() -> Vec<LanguageProgress> {
    vec![
        LanguageProgress {
            name: "Spanish".into(),
            level: "Intermediate B1".into(),
            progress: 65,
            flag: "🇪🇸".into(),
            words_learned: 847,
            next_milestone: "Advanced".into(),
        },
        LanguageProgress {
            name: "French".into(),
            level: "Beginner A2".into(),
            progress: 30,
            flag: "🇫🇷".into(),
            words_learned: 234,
            next_milestone: "Intermediate".into(),
        },
        LanguageProgress {
            name: "German".into(),
            level: "Beginner A1".into(),
            progress: 15,
            flag: "🇩🇪".into(),
            words_learned: 89,
            next_milestone: "A2 Level".into(),
        },
    ]
}
