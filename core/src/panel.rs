use crate::options::{OptionEntry, DEFAULT_ARTICLE_STATE};
use crate::state::{ArticleParam, ArticleState};

/// Visibility of the settings drawer. One explicit machine instead of a
/// toggle flag and a panel flag kept in sync by convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        matches!(self, PanelState::Open)
    }
}

/// The whole control-panel state: the settings driving the page
/// (`applied`), the settings being edited in the drawer (`draft`), and the
/// drawer's visibility. Every transition returns a new value; the UI layer
/// stores the current one.
///
/// Only `applied` is ever projected into the page. `draft` is re-seeded
/// from `applied` on every Closed -> Open transition, so edits abandoned
/// by a dismissal never survive a reopen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuner {
    applied: ArticleState,
    draft: ArticleState,
    panel: PanelState,
}

impl Tuner {
    pub fn new() -> Self {
        Self {
            applied: DEFAULT_ARTICLE_STATE,
            draft: DEFAULT_ARTICLE_STATE,
            panel: PanelState::Closed,
        }
    }

    pub fn applied(&self) -> ArticleState {
        self.applied
    }

    pub fn draft(&self) -> ArticleState {
        self.draft
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Arrow-control activation. Opening re-seeds the draft from the
    /// applied settings, discarding any unsaved edits.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self.panel {
            PanelState::Closed => Self {
                draft: self.applied,
                panel: PanelState::Open,
                ..self
            },
            PanelState::Open => Self {
                panel: PanelState::Closed,
                ..self
            },
        }
    }

    /// A field edit in the drawer. Touches the draft only.
    #[must_use]
    pub fn change(self, param: ArticleParam, entry: OptionEntry) -> Self {
        Self {
            draft: self.draft.with(param, entry),
            ..self
        }
    }

    /// Form submission: the draft becomes the applied settings and the
    /// drawer closes.
    #[must_use]
    pub fn apply(self) -> Self {
        Self {
            applied: self.draft,
            panel: PanelState::Closed,
            ..self
        }
    }

    /// Form reset: both records return to the defaults and the drawer
    /// closes.
    #[must_use]
    pub fn reset(self) -> Self {
        Self {
            applied: DEFAULT_ARTICLE_STATE,
            draft: DEFAULT_ARTICLE_STATE,
            panel: PanelState::Closed,
        }
    }

    /// Outside press or Escape. Closes without touching either record;
    /// the stale draft is overwritten on the next open.
    #[must_use]
    pub fn dismiss(self) -> Self {
        Self {
            panel: PanelState::Closed,
            ..self
        }
    }
}

impl Default for Tuner {
    fn default() -> Self {
        Self::new()
    }
}
