use crate::entry::Entry;
use crate::selection::{resolve, Selection};

const DEFAULT_PLACEHOLDER: &str = "Select Options";
const DEFAULT_ALL_LABEL: &str = "All";

type OnSelect<'a> = Box<dyn FnMut(&Selection<Entry>) + 'a>;

/// Selectable list state behind a dropdown widget.
///
/// The dropdown owns its option list and the selected key; every user
/// selection is resolved to the full entry before it is handed to the
/// `on_select` callback.
pub struct Dropdown<'a> {
    options: Vec<Entry>,
    selected_key: Option<String>,
    placeholder: Option<String>,
    all_label: Option<String>,
    has_all_option: bool,
    on_select: Option<OnSelect<'a>>,
}

impl<'a> Dropdown<'a> {
    pub fn new(options: Vec<Entry>) -> Self {
        Self {
            options,
            selected_key: None,
            placeholder: None,
            all_label: None,
            has_all_option: false,
            on_select: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Adds an "all options" item at the top of the list.
    pub fn with_all_option(mut self, label: impl Into<String>) -> Self {
        self.has_all_option = true;
        self.all_label = Some(label.into());
        self
    }

    pub fn with_default_key(mut self, key: Option<&str>) -> Self {
        self.set_default_key(key);
        self
    }

    pub fn on_select(mut self, callback: impl FnMut(&Selection<Entry>) + 'a) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Replaces the selected key when the parent's default changes. Does not
    /// fire the callback.
    pub fn set_default_key(&mut self, key: Option<&str>) {
        self.selected_key = key.map(str::to_string);
    }

    /// Replaces the option list, e.g. after the chain filter changed.
    pub fn set_options(&mut self, options: Vec<Entry>) {
        self.options = options;
    }

    pub fn options(&self) -> &[Entry] {
        &self.options
    }

    pub fn has_all_option(&self) -> bool {
        self.has_all_option
    }

    pub fn selected(&self) -> Selection<Entry> {
        resolve(&self.options, self.selected_key.as_deref())
    }

    /// Whether the option with `key` is the current one (rendered bold).
    pub fn is_current(&self, key: &str) -> bool {
        self.selected_key.as_deref() == Some(key)
    }

    /// Text shown on the closed dropdown button.
    pub fn label(&self) -> String {
        match self.selected() {
            Selection::Selected(entry) => entry.name().to_string(),
            Selection::AllSelected => self.all_label().to_string(),
            Selection::NoSelection => self
                .placeholder
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        }
    }

    pub fn all_label(&self) -> &str {
        self.all_label.as_deref().unwrap_or(DEFAULT_ALL_LABEL)
    }

    /// User picked the "all options" item.
    pub fn select_all(&mut self) -> Selection<Entry> {
        self.selected_key = Some(String::new());
        self.emit(Selection::AllSelected)
    }

    /// User picked the option with `key`.
    pub fn select(&mut self, key: &str) -> Selection<Entry> {
        self.selected_key = Some(key.to_string());
        let selection = resolve(&self.options, Some(key));
        self.emit(selection)
    }

    fn emit(&mut self, selection: Selection<Entry>) -> Selection<Entry> {
        if let Some(callback) = self.on_select.as_mut() {
            callback(&selection);
        }
        selection
    }
}
