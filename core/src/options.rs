use crate::state::ArticleState;

/// One selectable value of a styling parameter: display label, the CSS
/// value projected into the page, and a stable slug for DOM ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    pub title: &'static str,
    pub value: &'static str,
    pub slug: &'static str,
}

pub const FONT_FAMILY_OPTIONS: &[OptionEntry] = &[
    OptionEntry {
        title: "Open Sans",
        value: "'Open Sans', sans-serif",
        slug: "open-sans",
    },
    OptionEntry {
        title: "Ubuntu",
        value: "'Ubuntu', sans-serif",
        slug: "ubuntu",
    },
    OptionEntry {
        title: "Cormorant Garamond",
        value: "'Cormorant Garamond', serif",
        slug: "cormorant-garamond",
    },
    OptionEntry {
        title: "Days One",
        value: "'Days One', sans-serif",
        slug: "days-one",
    },
    OptionEntry {
        title: "Merriweather",
        value: "'Merriweather', serif",
        slug: "merriweather",
    },
];

pub const FONT_SIZE_OPTIONS: &[OptionEntry] = &[
    OptionEntry {
        title: "18px",
        value: "18px",
        slug: "font-size-18",
    },
    OptionEntry {
        title: "24px",
        value: "24px",
        slug: "font-size-24",
    },
    OptionEntry {
        title: "38px",
        value: "38px",
        slug: "font-size-38",
    },
];

// Font and background colors share one palette.
const PALETTE: &[OptionEntry] = &[
    OptionEntry {
        title: "Чёрный",
        value: "#000000",
        slug: "black",
    },
    OptionEntry {
        title: "Белый",
        value: "#FFFFFF",
        slug: "white",
    },
    OptionEntry {
        title: "Серый",
        value: "#C4C4C4",
        slug: "gray",
    },
    OptionEntry {
        title: "Розовый",
        value: "#FD24AF",
        slug: "pink",
    },
    OptionEntry {
        title: "Бирюзовый",
        value: "#38D0C4",
        slug: "turquoise",
    },
    OptionEntry {
        title: "Зелёный",
        value: "#5FD150",
        slug: "green",
    },
    OptionEntry {
        title: "Фиолетовый",
        value: "#604BEE",
        slug: "purple",
    },
];

pub const FONT_COLOR_OPTIONS: &[OptionEntry] = PALETTE;
pub const BACKGROUND_COLOR_OPTIONS: &[OptionEntry] = PALETTE;

pub const CONTENT_WIDTH_OPTIONS: &[OptionEntry] = &[
    OptionEntry {
        title: "Широкий",
        value: "1394px",
        slug: "wide",
    },
    OptionEntry {
        title: "Узкий",
        value: "948px",
        slug: "narrow",
    },
];

/// Reset target. Never mutated; `reset` copies it into both records.
pub const DEFAULT_ARTICLE_STATE: ArticleState = ArticleState {
    font_family: FONT_FAMILY_OPTIONS[0],
    font_size: FONT_SIZE_OPTIONS[0],
    font_color: PALETTE[0],
    background_color: PALETTE[1],
    content_width: CONTENT_WIDTH_OPTIONS[0],
};

pub fn entry_by_value(set: &'static [OptionEntry], value: &str) -> Option<OptionEntry> {
    set.iter().find(|entry| entry.value == value).copied()
}

pub fn entry_by_slug(set: &'static [OptionEntry], slug: &str) -> Option<OptionEntry> {
    let trimmed = slug.trim();
    set.iter()
        .find(|entry| entry.slug.eq_ignore_ascii_case(trimmed))
        .copied()
}
