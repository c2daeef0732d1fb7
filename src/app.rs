use ratatui::widgets::ListState;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::constants::constants;
use crate::matcher;
use crate::theme::{THEMES, Theme};

// --- App State ---

/// Which surface has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
  Input,
  Results,
}

pub struct App {
  pub catalog: Catalog,
  /// The query text, mirroring the search input field.
  pub input: String,
  pub cursor_position: usize,
  pub input_scroll: usize,
  pub mode: AppMode,
  pub theme_index: usize,
  /// Dropdown contents as catalog indices, already capped at `max_results`.
  /// `None` means the dropdown is closed (short query, or force-closed after
  /// a selection); `Some(vec![])` means a search ran and found nothing,
  /// which renders the "No movies found" placeholder.
  pub results: Option<Vec<usize>>,
  pub list_state: ListState,
  /// Catalog index of the movie shown in the detail panel. Holding an index
  /// rather than a copy guarantees the panel only ever shows a real catalog
  /// record.
  pub detail: Option<usize>,
  pub should_quit: bool,
}

impl App {
  pub fn new(catalog: Catalog, theme_override: Option<&str>) -> Self {
    let config = Config::load();
    let configured = theme_override.map(str::to_string).or(config.theme_name);
    let theme_index = configured.and_then(|name| THEMES.iter().position(|t| t.name == name)).unwrap_or(0);

    Self {
      catalog,
      input: String::new(),
      cursor_position: 0,
      input_scroll: 0,
      mode: AppMode::Input,
      theme_index,
      results: None,
      list_state: ListState::default(),
      detail: None,
      should_quit: false,
    }
  }

  pub fn theme(&self) -> &'static Theme {
    // Safety: theme_index is always bounded by modular arithmetic in next_theme()
    // and clamped on initialization.
    &THEMES[self.theme_index]
  }

  pub fn next_theme(&mut self) {
    self.theme_index = (self.theme_index + 1) % THEMES.len();
    self.save_config();
  }

  fn save_config(&self) {
    Config { theme_name: Some(self.theme().name.to_string()) }.save();
  }

  /// Whether the query is long enough to search (measured in chars).
  pub fn query_is_searchable(&self) -> bool {
    self.input.chars().count() >= constants().min_query_len
  }

  /// Number of selectable rows in the dropdown.
  pub fn result_count(&self) -> usize {
    self.results.as_ref().map_or(0, Vec::len)
  }

  /// Replace the query text and put the cursor at the end.
  pub fn set_query(&mut self, text: String) {
    self.cursor_position = text.chars().count();
    self.input_scroll = 0;
    self.input = text;
  }

  /// The search-and-list pipeline, run on every edit of the query text.
  ///
  /// A short query closes the dropdown but leaves the detail panel exactly
  /// as it was: the list clears, the detail persists. A searchable query
  /// matches the whole catalog and keeps the first `max_results` hits in
  /// catalog order.
  pub fn on_query_changed(&mut self) {
    if self.query_is_searchable() {
      let matches = matcher::matching_indices(&self.catalog, &self.input);
      let total = matches.len();
      let visible: Vec<usize> = matches.into_iter().take(constants().max_results).collect();
      debug!(query = %self.input, total, shown = visible.len(), "query changed");
      self.list_state.select(if visible.is_empty() { None } else { Some(0) });
      self.results = Some(visible);
    } else {
      self.close_results();
    }
  }

  /// Close the dropdown. Nothing else is touched.
  pub fn close_results(&mut self) {
    self.results = None;
    self.list_state.select(None);
    if self.mode == AppMode::Results {
      self.mode = AppMode::Input;
    }
  }

  /// Selecting a dropdown row: the row's exact title becomes the query, the
  /// search-and-list pipeline re-runs for it, and the dropdown then closes.
  /// The detail panel is not involved; only the primary action fills it.
  pub fn select_result(&mut self) {
    let Some(selected) = self.list_state.selected() else { return };
    let Some(&idx) = self.results.as_ref().and_then(|r| r.get(selected)) else { return };
    let Some(movie) = self.catalog.get(idx) else { return };
    info!(title = %movie.title, "result selected");
    let title = movie.title.clone();
    self.set_query(title);
    self.on_query_changed();
    self.close_results();
  }

  /// First half of the primary action: put the first match for the current
  /// query in the detail panel, or clear the panel when nothing matches.
  /// Recomputes matches from the query rather than reading the dropdown,
  /// and applies no minimum-length rule; even a one-letter query shows
  /// its first match here.
  pub fn show_first_match(&mut self) {
    match matcher::matching_indices(&self.catalog, &self.input).into_iter().next() {
      Some(idx) => {
        if let Some(movie) = self.catalog.get(idx) {
          info!(title = %movie.title, "showing detail");
        }
        self.detail = Some(idx);
      }
      None => {
        debug!(query = %self.input, "no match, clearing detail");
        self.detail = None;
      }
    }
  }

  /// Second half of the primary action: re-run the search-and-list pipeline,
  /// then close the dropdown no matter what the pipeline produced.
  pub fn refresh_and_close_results(&mut self) {
    self.on_query_changed();
    self.close_results();
  }
}
