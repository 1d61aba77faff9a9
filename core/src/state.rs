use crate::options::{
    OptionEntry, BACKGROUND_COLOR_OPTIONS, CONTENT_WIDTH_OPTIONS, FONT_COLOR_OPTIONS,
    FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};

/// The five styling parameters of an article page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArticleParam {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleParam {
    pub const ALL: [ArticleParam; 5] = [
        ArticleParam::FontFamily,
        ArticleParam::FontSize,
        ArticleParam::FontColor,
        ArticleParam::BackgroundColor,
        ArticleParam::ContentWidth,
    ];

    /// The static option set this parameter draws its values from.
    pub fn options(self) -> &'static [OptionEntry] {
        match self {
            ArticleParam::FontFamily => FONT_FAMILY_OPTIONS,
            ArticleParam::FontSize => FONT_SIZE_OPTIONS,
            ArticleParam::FontColor => FONT_COLOR_OPTIONS,
            ArticleParam::BackgroundColor => BACKGROUND_COLOR_OPTIONS,
            ArticleParam::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ArticleParam::FontFamily => "font-family",
            ArticleParam::FontSize => "font-size",
            ArticleParam::FontColor => "font-color",
            ArticleParam::BackgroundColor => "bg-color",
            ArticleParam::ContentWidth => "content-width",
        }
    }
}

/// Immutable settings record. Updates go through [`ArticleState::with`],
/// which produces a new record; nothing mutates in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleState {
    pub font_family: OptionEntry,
    pub font_size: OptionEntry,
    pub font_color: OptionEntry,
    pub background_color: OptionEntry,
    pub content_width: OptionEntry,
}

impl ArticleState {
    /// Field-level merge: the named parameter replaced, the rest kept.
    #[must_use]
    pub fn with(self, param: ArticleParam, entry: OptionEntry) -> Self {
        match param {
            ArticleParam::FontFamily => Self {
                font_family: entry,
                ..self
            },
            ArticleParam::FontSize => Self {
                font_size: entry,
                ..self
            },
            ArticleParam::FontColor => Self {
                font_color: entry,
                ..self
            },
            ArticleParam::BackgroundColor => Self {
                background_color: entry,
                ..self
            },
            ArticleParam::ContentWidth => Self {
                content_width: entry,
                ..self
            },
        }
    }

    pub fn get(self, param: ArticleParam) -> OptionEntry {
        match param {
            ArticleParam::FontFamily => self.font_family,
            ArticleParam::FontSize => self.font_size,
            ArticleParam::FontColor => self.font_color,
            ArticleParam::BackgroundColor => self.background_color,
            ArticleParam::ContentWidth => self.content_width,
        }
    }

    /// The CSS custom properties consumed by the article renderer.
    pub fn style_vars(&self) -> [(&'static str, &'static str); 5] {
        [
            ("--font-family", self.font_family.value),
            ("--font-size", self.font_size.value),
            ("--font-color", self.font_color.value),
            ("--container-width", self.content_width.value),
            ("--bg-color", self.background_color.value),
        ]
    }

    /// The projection rendered as an inline `style` attribute.
    pub fn inline_style(&self) -> String {
        let mut style = String::new();
        for (name, value) in self.style_vars() {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(name);
            style.push_str(": ");
            style.push_str(value);
            style.push(';');
        }
        style
    }
}
