use cinefluent_core::User;
use uuid::Uuid;

/// A login credential paired with its account record.
struct DemoAccount {
    password: String,
    user: User,
}

/// The closed set of accounts that login accepts.
///
/// Passwords are compared as exact strings. These are published demo
/// credentials standing in for a real user directory; there is nothing to
/// hash and nothing to protect. Registration fabricates a user record but
/// stores nothing, so registered users can never log in afterwards.
pub struct AccountDirectory {
    accounts: Vec<DemoAccount>,
}

impl AccountDirectory {
    pub fn demo() -> Self {
        let accounts = vec![
            DemoAccount {
                password: "demo123".into(),
                user: User {
                    id: "1".into(),
                    email: "demo@cinefluent.com".into(),
                    name: "Demo User".into(),
                    avatar: None,
                    level: "Intermediate B1".into(),
                    streak: 12,
                    total_words: 1247,
                    study_time: "47h 23m".into(),
                    is_active: true,
                },
            },
            DemoAccount {
                password: "test123".into(),
                user: User {
                    id: "2".into(),
                    email: "test@cinefluent.com".into(),
                    name: "Test User".into(),
                    avatar: None,
                    level: "Beginner A1".into(),
                    streak: 5,
                    total_words: 234,
                    study_time: "12h 45m".into(),
                    is_active: true,
                },
            },
            DemoAccount {
                password: "test123".into(),
                user: User {
                    id: "3".into(),
                    email: "sarah@cinefluent.com".into(),
                    name: "Sarah Chen".into(),
                    avatar: None,
                    level: "Expert".into(),
                    streak: 28,
                    total_words: 2847,
                    study_time: "156h 30m".into(),
                    is_active: true,
                },
            },
        ];

        Self { accounts }
    }

    /// Exact-match credential check against the directory.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&User> {
        self.accounts
            .iter()
            .find(|account| account.user.email == email && account.password == password)
            .map(|account| &account.user)
    }

    pub fn email_taken(&self, email: &str) -> bool {
        self.accounts.iter().any(|account| account.user.email == email)
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.accounts
            .iter()
            .find(|account| account.user.id == id)
            .map(|account| &account.user)
    }

    /// Fabricate a record for a freshly registered user: new id, zeroed
    /// progress. The record only exists in the response.
    pub fn register(&self, email: &str, name: &str) -> User {
        User {
            id: Uuid::now_v7().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            avatar: None,
            level: "Beginner A1".into(),
            streak: 0,
            total_words: 0,
            study_time: "0h 0m".into(),
            is_active: true,
        }
    }
}

/// Stand-in record for a subject whose token is valid but who is not in
/// the directory (e.g. someone who just registered).
pub fn placeholder_user(id: &str) -> User {
    User {
        id: id.to_string(),
        email: "user@cinefluent.com".into(),
        name: "Current User".into(),
        avatar: None,
        level: "Intermediate B1".into(),
        streak: 12,
        total_words: 1247,
        study_time: "47h 23m".into(),
        is_active: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_credentials_authenticate() {
        let directory = AccountDirectory::demo();
        let user = directory
            .authenticate("demo@cinefluent.com", "demo123")
            .expect("demo account");
        assert_eq!(user.id, "1");
        assert_eq!(user.streak, 12);
    }

    #[test]
    fn wrong_password_or_unknown_email_is_rejected() {
        let directory = AccountDirectory::demo();
        assert!(directory.authenticate("demo@cinefluent.com", "demo124").is_none());
        assert!(directory.authenticate("nobody@cinefluent.com", "demo123").is_none());
        // Passwords are not interchangeable between accounts.
        assert!(directory.authenticate("demo@cinefluent.com", "test123").is_none());
    }

    #[test]
    fn registration_zeroes_progress_and_mints_a_fresh_id() {
        let directory = AccountDirectory::demo();
        let user = directory.register("new@cinefluent.com", "New User");
        assert_eq!(user.streak, 0);
        assert_eq!(user.total_words, 0);
        assert_eq!(user.study_time, "0h 0m");
        assert!(directory.user_by_id(&user.id).is_none());
    }

    #[test]
    fn directory_emails_count_as_taken() {
        let directory = AccountDirectory::demo();
        assert!(directory.email_taken("sarah@cinefluent.com"));
        assert!(!directory.email_taken("new@cinefluent.com"));
    }
}
