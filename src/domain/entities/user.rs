use std::fmt;

/// The user who invoked a command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub mention: Option<String>,
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            mention: None,
            avatar_url: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Platform-specific mention markup, e.g. `<@1234>` on Discord
    pub fn with_mention(mut self, mention: impl Into<String>) -> Self {
        self.mention = Some(mention.into());
        self
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn display_name(&self) -> String {
        self.username.clone().unwrap_or_else(|| self.id.clone())
    }

    /// What other users see when this user is referenced in a message
    pub fn display_reference(&self) -> String {
        match self.mention {
            Some(ref mention) => mention.clone(),
            None => self.display_name(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reference_prefers_mention() {
        let user = User::new("42").with_username("trader").with_mention("<@42>");
        assert_eq!(user.display_reference(), "<@42>");
        assert_eq!(user.to_string(), "trader");
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let user = User::new("42");
        assert_eq!(user.display_name(), "42");
        assert_eq!(user.display_reference(), "42");
    }
}
