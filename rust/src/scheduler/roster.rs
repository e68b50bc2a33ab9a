//! Round-robin roster.

/// Ordered roster of users; the head is primary on the next rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    users: Vec<String>,
}

impl Roster {
    /// Returns `None` for an empty list.
    pub fn new(users: Vec<String>) -> Option<Self> {
        if users.is_empty() {
            None
        } else {
            Some(Self { users })
        }
    }

    /// Primary for the next rotation.
    pub fn primary(&self) -> &str {
        &self.users[0]
    }

    /// Secondary for the next rotation; the primary again for a one-user roster.
    pub fn secondary(&self) -> &str {
        &self.users[1 % self.users.len()]
    }

    /// The roster after one rotation: the head moves to the tail.
    pub fn advanced(&self) -> Roster {
        let users = self.users[1..]
            .iter()
            .chain(std::iter::once(&self.users[0]))
            .cloned()
            .collect();
        Roster { users }
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn into_users(self) -> Vec<String> {
        self.users
    }
}
