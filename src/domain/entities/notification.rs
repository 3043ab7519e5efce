use serde::Serialize;

/// A labeled field inside a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Platform-neutral rich message; adapters render it natively
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub colour: u32,
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<NotificationField>,
    pub thumbnail: Option<String>,
    pub footer: Option<String>,
}

impl Notification {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_colour(mut self, colour: u32) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Fields render in insertion order
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(NotificationField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn with_thumbnail_opt(mut self, url: Option<String>) -> Self {
        self.thumbnail = url;
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&NotificationField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
