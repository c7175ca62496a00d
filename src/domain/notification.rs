//! Notification request value object

/// A single notification to be shown to the user.
///
/// Immutable once built; retries clone and re-submit the same value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Headline text
    pub summary: String,
    /// Optional body text below the headline
    pub body: Option<String>,
    /// Optional icon name or path
    pub icon: Option<String>,
}

impl NotificationRequest {
    /// Create a request with only a summary
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            body: None,
            icon: None,
        }
    }

    /// Set the body text
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_only() {
        let request = NotificationRequest::new("Hi");
        assert_eq!(request.summary, "Hi");
        assert_eq!(request.body, None);
        assert_eq!(request.icon, None);
    }

    #[test]
    fn builder_sets_all_fields() {
        let request = NotificationRequest::new("Build finished")
            .with_body("0 warnings")
            .with_icon("dialog-information");
        assert_eq!(request.summary, "Build finished");
        assert_eq!(request.body.as_deref(), Some("0 warnings"));
        assert_eq!(request.icon.as_deref(), Some("dialog-information"));
    }
}
