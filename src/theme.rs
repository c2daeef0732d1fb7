//! Color themes. Cycled at runtime with Ctrl+T; the selection is saved to
//! the preferences file and restored on the next launch.

use ratatui::style::Color;

pub struct Theme {
  pub name: &'static str,
  pub bg: Color,
  pub fg: Color,
  pub muted: Color,
  pub accent: Color,
  pub border: Color,
  pub status: Color,
  pub error: Color,
  pub highlight_fg: Color,
  pub highlight_bg: Color,
  pub stripe_bg: Color,
  pub key_fg: Color,
  pub key_bg: Color,
}

pub static THEMES: [Theme; 3] = [
  Theme {
    name: "velvet",
    bg: Color::Rgb(24, 21, 28),
    fg: Color::Rgb(224, 218, 226),
    muted: Color::Rgb(130, 122, 140),
    accent: Color::Rgb(229, 134, 97),
    border: Color::Rgb(64, 58, 72),
    status: Color::Rgb(142, 192, 124),
    error: Color::Rgb(227, 104, 104),
    highlight_fg: Color::Rgb(24, 21, 28),
    highlight_bg: Color::Rgb(229, 134, 97),
    stripe_bg: Color::Rgb(30, 27, 35),
    key_fg: Color::Rgb(224, 218, 226),
    key_bg: Color::Rgb(54, 48, 62),
  },
  Theme {
    name: "matinee",
    bg: Color::Rgb(248, 245, 240),
    fg: Color::Rgb(52, 48, 46),
    muted: Color::Rgb(142, 134, 128),
    accent: Color::Rgb(186, 86, 54),
    border: Color::Rgb(212, 204, 196),
    status: Color::Rgb(92, 136, 76),
    error: Color::Rgb(180, 60, 60),
    highlight_fg: Color::Rgb(248, 245, 240),
    highlight_bg: Color::Rgb(186, 86, 54),
    stripe_bg: Color::Rgb(240, 236, 229),
    key_fg: Color::Rgb(52, 48, 46),
    key_bg: Color::Rgb(226, 219, 210),
  },
  Theme {
    name: "midnight",
    bg: Color::Rgb(16, 20, 30),
    fg: Color::Rgb(205, 214, 230),
    muted: Color::Rgb(108, 118, 140),
    accent: Color::Rgb(122, 162, 247),
    border: Color::Rgb(48, 56, 78),
    status: Color::Rgb(158, 206, 106),
    error: Color::Rgb(247, 118, 142),
    highlight_fg: Color::Rgb(16, 20, 30),
    highlight_bg: Color::Rgb(122, 162, 247),
    stripe_bg: Color::Rgb(21, 26, 38),
    key_fg: Color::Rgb(205, 214, 230),
    key_bg: Color::Rgb(41, 50, 68),
  },
];
