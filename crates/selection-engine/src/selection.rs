use reference_data::{Asset, Chain};
use tracing::debug;

use crate::entry::{AssetContractRow, Entry};

/// Anything that can be looked up by its identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Entry {
    fn key(&self) -> &str {
        self.id()
    }
}

impl Keyed for Chain {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Asset {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for AssetContractRow {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Current choice of a selectable list.
///
/// `AllSelected` is the explicit "all options" choice and is distinct from
/// `NoSelection`.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    NoSelection,
    AllSelected,
    Selected(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::NoSelection
    }
}

impl<T> Selection<T> {
    pub fn selected(&self) -> Option<&T> {
        match self {
            Selection::Selected(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_selected(self) -> Option<T> {
        match self {
            Selection::Selected(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::AllSelected)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::NoSelection)
    }

    pub fn as_ref(&self) -> Selection<&T> {
        match self {
            Selection::NoSelection => Selection::NoSelection,
            Selection::AllSelected => Selection::AllSelected,
            Selection::Selected(value) => Selection::Selected(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Selection<U> {
        match self {
            Selection::NoSelection => Selection::NoSelection,
            Selection::AllSelected => Selection::AllSelected,
            Selection::Selected(value) => Selection::Selected(f(value)),
        }
    }
}

impl<T: Keyed> Selection<T> {
    /// Key that resolves back to this selection: `""` for all, the entity's
    /// id when selected.
    pub fn key(&self) -> Option<&str> {
        match self {
            Selection::NoSelection => None,
            Selection::AllSelected => Some(""),
            Selection::Selected(value) => Some(value.key()),
        }
    }

    /// Id of the selected entity, ignoring the "all" choice.
    pub fn selected_key(&self) -> Option<&str> {
        self.selected().map(|value| value.key())
    }
}

/// Resolves a selected key against an option list.
///
/// An empty key selects all options. A key that matches no option resolves
/// to `NoSelection`.
pub fn resolve<T: Keyed + Clone>(options: &[T], key: Option<&str>) -> Selection<T> {
    match key {
        None => Selection::NoSelection,
        Some("") => Selection::AllSelected,
        Some(key) => match options.iter().find(|o| o.key() == key) {
            Some(option) => Selection::Selected(option.clone()),
            None => {
                debug!(key, "selected key matches no option");
                Selection::NoSelection
            }
        },
    }
}
