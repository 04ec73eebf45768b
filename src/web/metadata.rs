//! Per-page `<title>` and description.

pub const SITE_NAME: &str = "YoYo Academy";
pub const SITE_DESCRIPTION: &str =
    "Learn yo-yo tricks step by step, from your first sleeper to competition combos.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    /// Page name without the site suffix. `None` for the home page.
    pub page: Option<String>,
    pub description: String,
}

impl PageMetadata {
    pub fn new(page: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
            description: description.into(),
        }
    }

    /// Page with the site-wide description.
    pub fn titled(page: impl Into<String>) -> Self {
        Self::new(page, SITE_DESCRIPTION)
    }

    pub fn home() -> Self {
        Self {
            page: None,
            description: SITE_DESCRIPTION.to_string(),
        }
    }

    /// `"{page} | YoYo Academy"`, or just the site name for the home page.
    pub fn title(&self) -> String {
        match &self.page {
            Some(page) => format!("{page} | {SITE_NAME}"),
            None => SITE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_template() {
        assert_eq!(PageMetadata::titled("Tricks").title(), "Tricks | YoYo Academy");
        assert_eq!(PageMetadata::home().title(), "YoYo Academy");
    }
}
