//! Icon service for managing different icon themes
//!
//! Icons decorate dialog titles, detail lines and the status bar. Three themes
//! are supported: emoji, Unicode symbols, and plain ASCII.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Icons next to contact detail lines
#[derive(Debug, Clone)]
pub struct FieldIcons {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub group: &'static str,
    pub user: &'static str,
    pub image: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub contacts_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub edit: &'static str,
    pub request_in_flight: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub fields: FieldIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            fields: FieldIcons {
                name: "👤",
                phone: "📞",
                email: "📧",
                address: "🏠",
                group: "👥",
                user: "🧑",
                image: "🖼️",
            },
            ui: UiIcons {
                contacts_title: "📇",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
                edit: "✏️",
                request_in_flight: "🔄",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            fields: FieldIcons {
                name: "●",
                phone: "☎",
                email: "✉",
                address: "⌂",
                group: "◆",
                user: "◉",
                image: "▣",
            },
            ui: UiIcons {
                contacts_title: "▶",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
                edit: "✎",
                request_in_flight: "⟳",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            fields: FieldIcons {
                name: "-",
                phone: "-",
                email: "-",
                address: "-",
                group: "-",
                user: "-",
                image: "-",
            },
            ui: UiIcons {
                contacts_title: ">",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
                edit: "*",
                request_in_flight: "...",
            },
        }
    }

    #[must_use]
    pub fn contacts_title(&self) -> &'static str {
        self.icons().ui.contacts_title
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn edit(&self) -> &'static str {
        self.icons().ui.edit
    }

    #[must_use]
    pub fn request_in_flight(&self) -> &'static str {
        self.icons().ui.request_in_flight
    }

    #[must_use]
    pub fn fields(&self) -> FieldIcons {
        self.icons().fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_switching() {
        let mut service = IconService::new(IconTheme::Emoji);
        assert_eq!(service.theme(), IconTheme::Emoji);
        assert_eq!(service.fields().phone, "📞");

        service.set_theme(IconTheme::Ascii);
        assert_eq!(service.theme(), IconTheme::Ascii);
        assert_eq!(service.warning(), "!");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_theme_names_in_config() {
        let theme: IconTheme = serde_json::from_str("\"unicode\"").unwrap();
        assert_eq!(theme, IconTheme::Unicode);
    }
}
