use ratatui::{
  Frame,
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Modifier, Style, Stylize},
  text::{Line, Span},
  widgets::{Block, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, AppMode};
use crate::catalog::{Catalog, MovieRecord};
use crate::constants::constants;
use crate::theme::Theme;

// --- Helpers ---

/// Compute the display width of the first `n` chars (accounting for double-width CJK).
pub fn display_width(s: &str, n: usize) -> usize {
  use unicode_width::UnicodeWidthChar;
  s.chars().take(n).map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate a string to `max_width` characters, appending "…" if truncated.
fn truncate_str(s: &str, max_width: usize) -> String {
  if s.chars().count() <= max_width {
    s.to_string()
  } else {
    let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", truncated)
  }
}

// --- Fragments ---

/// Build the dropdown rows: one title-only line per visible match, or a
/// single "No movies found" placeholder when the search came up empty.
/// Truncation to the top-N happens before this is called.
pub fn result_lines(catalog: &Catalog, visible: &[usize], theme: &Theme, width: usize) -> Vec<Line<'static>> {
  if visible.is_empty() {
    return vec![Line::from(Span::styled(
      "No movies found",
      Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
    ))];
  }
  visible
    .iter()
    .filter_map(|&idx| catalog.get(idx))
    .map(|movie| Line::from(Span::styled(truncate_str(&movie.title, width), Style::default().fg(theme.fg))))
    .collect()
}

/// One badge span per genre entry, in sequence order. Empty genre list,
/// empty result.
pub fn genre_badges(movie: &MovieRecord, theme: &Theme) -> Vec<Span<'static>> {
  movie
    .genre
    .iter()
    .map(|genre| Span::styled(format!(" {} ", genre), Style::default().fg(theme.key_fg).bg(theme.key_bg)))
    .collect()
}

/// Build the detail-panel fragment for one movie: title, year and running
/// time, description, genre badges, poster reference.
pub fn detail_lines(movie: &MovieRecord, theme: &Theme, width: usize) -> Vec<Line<'static>> {
  let mut lines = vec![
    Line::from(""),
    Line::from(Span::styled(
      truncate_str(&movie.title, width),
      Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    )),
    Line::from(vec![
      Span::styled("● ", Style::default().fg(theme.status)),
      Span::styled(movie.year.to_string(), Style::default().fg(theme.fg)),
      Span::raw("  "),
      Span::styled(movie.running_time.clone(), Style::default().fg(theme.muted)),
    ]),
    Line::from(""),
    Line::from(Span::styled(movie.description.clone(), Style::default().fg(theme.fg))),
    Line::from(""),
  ];

  let badges = genre_badges(movie, theme);
  if !badges.is_empty() {
    let mut spans = Vec::new();
    for (i, badge) in badges.into_iter().enumerate() {
      if i > 0 {
        spans.push(Span::raw(" "));
      }
      spans.push(badge);
    }
    lines.push(Line::from(spans));
    lines.push(Line::from(""));
  }

  lines.push(Line::from(Span::styled(
    truncate_str(&movie.poster, width),
    Style::default().fg(theme.accent).add_modifier(Modifier::UNDERLINED),
  )));
  lines
}

/// The detail fragment for an optional selection. Absence yields an empty
/// fragment, which renders as a bare panel: the explicit "cleared" state.
pub fn detail_fragment(movie: Option<&MovieRecord>, theme: &Theme, width: usize) -> Vec<Line<'static>> {
  movie.map(|m| detail_lines(m, theme, width)).unwrap_or_default()
}

// --- UI Rendering ---

pub fn ui(frame: &mut Frame, app: &mut App) {
  let theme = app.theme();

  frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), frame.area());

  let [header_area, main_area, status_area, input_area, footer_area] = Layout::vertical([
    Constraint::Length(1),
    Constraint::Min(3),
    Constraint::Length(1),
    Constraint::Length(3),
    Constraint::Length(1),
  ])
  .areas(frame.area());

  render_header(frame, theme, header_area);
  render_main(frame, app, main_area);
  render_status(frame, app, status_area);
  render_input(frame, app, input_area);
  render_footer(frame, app, footer_area);
}

fn render_header(frame: &mut Frame, theme: &Theme, area: Rect) {
  let left = Line::from(Span::styled(" ⌕ marquee ", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)));
  frame.render_widget(left, area);

  let version = format!("v{} ", env!("CARGO_PKG_VERSION"));
  let right = Line::from(Span::styled(&version, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(version.len() as u16), width: version.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
  if app.results.is_some() {
    let [list_area, detail_area] =
      Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    render_results(frame, app, list_area);
    render_detail(frame, app, detail_area);
  } else if app.detail.is_some() {
    render_detail(frame, app, area);
  } else {
    render_welcome(frame, app.theme(), area);
  }
}

fn render_welcome(frame: &mut Frame, theme: &Theme, area: Rect) {
  let min_len = constants().min_query_len;
  let text = vec![
    Line::from(""),
    Line::from(Span::styled("⌕  marquee", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))),
    Line::from(""),
    Line::from(Span::styled("Find a movie by title.", Style::default().fg(theme.fg))),
    Line::from(""),
    Line::from(Span::styled(
      format!("Type below; matches appear after {} characters.", min_len),
      Style::default().fg(theme.muted),
    )),
  ];
  let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
    Block::bordered()
      .border_type(ratatui::widgets::BorderType::Rounded)
      .border_style(Style::default().fg(theme.border)),
  );
  frame.render_widget(paragraph, area);
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let visible = app.results.clone().unwrap_or_default();

  // A dropdown, not a full pane: just tall enough for its rows.
  let rows = visible.len().max(1) as u16;
  let [list_area, _] = Layout::vertical([Constraint::Length(rows + 2), Constraint::Min(0)]).areas(area);

  // Inner width: area minus 2 borders minus 2 chars for highlight symbol ("▶ ")
  let inner_w = list_area.width.saturating_sub(4) as usize;

  let items: Vec<ListItem> = result_lines(&app.catalog, &visible, theme, inner_w)
    .into_iter()
    .enumerate()
    .map(|(i, line)| {
      let bg = if i % 2 == 1 { theme.stripe_bg } else { theme.bg };
      ListItem::new(line).bg(bg)
    })
    .collect();

  let list = List::new(items)
    .block(
      Block::bordered()
        .title(" Matches ")
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
        .border_type(ratatui::widgets::BorderType::Rounded)
        .border_style(Style::default().fg(theme.border)),
    )
    .highlight_symbol("▶ ")
    .highlight_style(Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg).add_modifier(Modifier::BOLD));

  frame.render_stateful_widget(list, list_area, &mut app.list_state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let block = Block::bordered()
    .title(" Details ")
    .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(theme.border))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let movie = app.detail.and_then(|idx| app.catalog.get(idx));
  let paragraph = Paragraph::new(detail_fragment(movie, theme, inner_w)).wrap(Wrap { trim: false }).block(block);
  frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let (text, style) = if !app.input.is_empty() && !app.query_is_searchable() {
    (
      format!(" Keep typing: matches appear after {} characters", constants().min_query_len),
      Style::default().fg(theme.muted),
    )
  } else if let Some(ref visible) = app.results {
    if visible.is_empty() {
      (format!(" No matches for '{}'", app.input), Style::default().fg(theme.error))
    } else {
      let noun = if visible.len() == 1 { "match" } else { "matches" };
      (format!(" {} {}", visible.len(), noun), Style::default().fg(theme.status))
    }
  } else {
    (" Ready".to_string(), Style::default().fg(theme.muted))
  };
  frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
  let theme = app.theme();
  let border_color = if app.mode == AppMode::Input { theme.accent } else { theme.border };
  let input_block = Block::bordered()
    .title(" Search movies ")
    .title_style(Style::default().fg(border_color))
    .border_type(ratatui::widgets::BorderType::Rounded)
    .border_style(Style::default().fg(border_color))
    .padding(Padding::horizontal(1));

  let inner_w = area.width.saturating_sub(4) as usize;
  let cursor_col = display_width(&app.input, app.cursor_position);

  if cursor_col < app.input_scroll {
    app.input_scroll = cursor_col;
  } else if cursor_col >= app.input_scroll + inner_w {
    app.input_scroll = cursor_col.saturating_sub(inner_w) + 1;
  }

  let visible: String = app
    .input
    .chars()
    .scan(0usize, |col, c| {
      let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
      let start = *col;
      *col += w;
      Some((start, *col, c))
    })
    .skip_while(|(_, end, _)| *end <= app.input_scroll)
    .take_while(|(start, _, _)| *start < app.input_scroll + inner_w)
    .map(|(_, _, c)| c)
    .collect();

  let paragraph = Paragraph::new(visible).style(Style::default().fg(theme.fg)).block(input_block);
  frame.render_widget(paragraph, area);

  if app.mode == AppMode::Input {
    let cursor_x = area.x + 2 + (cursor_col - app.input_scroll) as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
  }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
  let theme = app.theme();
  let keys: Vec<(&str, &str)> = match app.mode {
    AppMode::Input => {
      let mut k = vec![("Enter", "Details"), ("^t", "Theme")];
      if app.result_count() > 0 {
        k.push(("↓", "Browse"));
      }
      if app.input.is_empty() {
        k.push(("Esc", "Quit"));
      } else {
        k.push(("Esc", "Clear"));
      }
      k
    }
    AppMode::Results => vec![("Enter", "Select"), ("j/k", "Navigate"), ("^t", "Theme"), ("Esc", "Back")],
  };

  let spans: Vec<Span> = keys
    .iter()
    .enumerate()
    .flat_map(|(i, (key, action))| {
      let mut s = vec![
        Span::styled(format!(" {} ", key), Style::default().fg(theme.key_fg).bg(theme.key_bg)),
        Span::styled(format!(" {} ", action), Style::default().fg(theme.muted)),
      ];
      if i < keys.len() - 1 {
        s.push(Span::raw("  "));
      }
      s
    })
    .collect();

  frame.render_widget(Line::from(spans), area);

  let theme_label = format!("{} ", theme.name);
  let right = Line::from(Span::styled(&theme_label, Style::default().fg(theme.muted)));
  let right_area =
    Rect { x: area.x + area.width.saturating_sub(theme_label.len() as u16), width: theme_label.len() as u16, ..area };
  frame.render_widget(right, right_area);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::theme::THEMES;

  fn test_movie(genre: &[&str]) -> MovieRecord {
    MovieRecord {
      title: "The Matrix".to_string(),
      year: 1999,
      running_time: "2h 16min".to_string(),
      description: "A programmer discovers the truth.".to_string(),
      poster: "assets/posters/the-matrix.jpg".to_string(),
      genre: genre.iter().map(|g| g.to_string()).collect(),
    }
  }

  fn test_catalog() -> Catalog {
    Catalog::from_json(
      r#"[
        {"title": "Inception", "year": 2010, "runningTime": "2h 28min",
         "description": "d", "poster": "p.jpg", "genre": []},
        {"title": "The Matrix", "year": 1999, "runningTime": "2h 16min",
         "description": "d", "poster": "p.jpg", "genre": []}
      ]"#,
    )
    .unwrap()
  }

  // --- truncate_str / display_width ---

  #[test]
  fn truncate_str_short_is_untouched() {
    assert_eq!(truncate_str("Inception", 20), "Inception");
  }

  #[test]
  fn truncate_str_long_gets_ellipsis() {
    assert_eq!(truncate_str("The Shawshank Redemption", 10), "The Shaws…");
  }

  #[test]
  fn display_width_counts_wide_chars() {
    assert_eq!(display_width("abc", 3), 3);
    assert_eq!(display_width("日本", 2), 4);
  }

  // --- result_lines ---

  #[test]
  fn result_lines_one_per_match() {
    let catalog = test_catalog();
    let lines = result_lines(&catalog, &[0, 1], &THEMES[0], 40);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].spans[0].content, "Inception");
    assert_eq!(lines[1].spans[0].content, "The Matrix");
  }

  #[test]
  fn result_lines_empty_yields_placeholder() {
    let catalog = test_catalog();
    let lines = result_lines(&catalog, &[], &THEMES[0], 40);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].spans[0].content, "No movies found");
  }

  #[test]
  fn result_lines_preserve_given_order() {
    let catalog = test_catalog();
    let lines = result_lines(&catalog, &[1, 0], &THEMES[0], 40);
    assert_eq!(lines[0].spans[0].content, "The Matrix");
    assert_eq!(lines[1].spans[0].content, "Inception");
  }

  // --- genre_badges / detail_lines ---

  #[test]
  fn one_badge_per_genre_in_order() {
    let movie = test_movie(&["Action", "Sci-Fi"]);
    let badges = genre_badges(&movie, &THEMES[0]);
    assert_eq!(badges.len(), 2);
    assert_eq!(badges[0].content, " Action ");
    assert_eq!(badges[1].content, " Sci-Fi ");
  }

  #[test]
  fn empty_genre_yields_zero_badges() {
    let movie = test_movie(&[]);
    assert!(genre_badges(&movie, &THEMES[0]).is_empty());
  }

  #[test]
  fn detail_lines_contain_core_fields() {
    let movie = test_movie(&["Action"]);
    let lines = detail_lines(&movie, &THEMES[0], 60);
    let text: String = lines.iter().flat_map(|l| l.spans.iter()).map(|s| s.content.as_ref()).collect();
    assert!(text.contains("The Matrix"));
    assert!(text.contains("1999"));
    assert!(text.contains("2h 16min"));
    assert!(text.contains("A programmer discovers the truth."));
    assert!(text.contains("assets/posters/the-matrix.jpg"));
  }

  #[test]
  fn detail_lines_without_genre_have_no_badge_row() {
    let theme = &THEMES[0];
    let with = detail_lines(&test_movie(&["Action"]), theme, 60);
    let without = detail_lines(&test_movie(&[]), theme, 60);
    assert_eq!(with.len(), without.len() + 2);
  }

  #[test]
  fn no_selection_yields_empty_detail_fragment() {
    assert!(detail_fragment(None, &THEMES[0], 60).is_empty());
  }
}
