pub mod options;
pub mod panel;
pub mod state;

pub use options::{
    entry_by_slug, entry_by_value, OptionEntry, BACKGROUND_COLOR_OPTIONS, CONTENT_WIDTH_OPTIONS,
    DEFAULT_ARTICLE_STATE, FONT_COLOR_OPTIONS, FONT_FAMILY_OPTIONS, FONT_SIZE_OPTIONS,
};
pub use panel::{PanelState, Tuner};
pub use state::{ArticleParam, ArticleState};
