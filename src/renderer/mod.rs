//! Rendering module
//!
//! The game never touches pixels or fonts. Each frame is turned into a
//! [`Frame`] and replayed as primitive calls on a host [`Surface`], styled by
//! the [`RenderConfig`] the renderer was built with.

pub mod frame;

pub use frame::{Frame, Overlay};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// RGB color
pub type Color = [u8; 3];

pub const WHITE: Color = [255, 255, 255];
pub const BLACK: Color = [0, 0, 0];

/// Where a text position is anchored on the rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Font and color for a text draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Color,
    pub anchor: Anchor,
}

/// Drawing surface implemented by the host
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn text(&mut self, text: &str, pos: Vec2, style: TextStyle);
    /// Show the finished frame
    fn present(&mut self);
}

/// Fonts and colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub foreground: Color,
    pub background: Color,
    pub score_font_size: f32,
    pub title_font_size: f32,
    pub menu_font_size: f32,
    /// Vertical gap between overlay lines
    pub line_spacing: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            foreground: WHITE,
            background: BLACK,
            score_font_size: 30.0,
            title_font_size: 60.0,
            menu_font_size: 30.0,
            line_spacing: 45.0,
        }
    }
}

/// Replays frames onto a surface
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, frame: &Frame) {
        let fg = self.config.foreground;
        surface.clear(self.config.background);

        surface.fill_rect(frame.player, fg);
        surface.fill_rect(frame.ai, fg);
        surface.fill_ellipse(frame.ball, fg);
        surface.line(frame.center_line.0, frame.center_line.1, fg);

        let score_style = TextStyle {
            size: self.config.score_font_size,
            bold: false,
            color: fg,
            anchor: Anchor::TopLeft,
        };
        surface.text(
            &frame.player_score.to_string(),
            frame.player_score_pos,
            score_style,
        );
        surface.text(&frame.ai_score.to_string(), frame.ai_score_pos, score_style);

        if let Some(overlay) = &frame.overlay {
            self.draw_overlay(surface, frame.field, overlay);
        }

        surface.present();
    }

    fn draw_overlay<S: Surface + ?Sized>(&self, surface: &mut S, field: Vec2, overlay: &Overlay) {
        let fg = self.config.foreground;
        let spacing = self.config.line_spacing;
        let center = field * 0.5;

        // Banner alone sits in the middle; with a menu it moves up to make room
        let title_y = if overlay.options.is_empty() {
            center.y
        } else {
            center.y - spacing * 2.0
        };

        surface.text(
            &overlay.title,
            Vec2::new(center.x, title_y),
            TextStyle {
                size: self.config.title_font_size,
                bold: true,
                color: fg,
                anchor: Anchor::Center,
            },
        );

        let menu_style = TextStyle {
            size: self.config.menu_font_size,
            bold: false,
            color: fg,
            anchor: Anchor::Center,
        };
        surface.text(
            &overlay.summary,
            Vec2::new(center.x, title_y + spacing),
            menu_style,
        );
        for (i, option) in overlay.options.iter().enumerate() {
            let y = title_y + spacing * (i as f32 + 2.0);
            surface.text(option, Vec2::new(center.x, y), menu_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{MatchState, Side};

    /// Records draw calls by name
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
        texts: Vec<(String, TextStyle)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _color: Color) {
            self.calls.push("clear".into());
        }
        fn fill_rect(&mut self, _rect: Rect, _color: Color) {
            self.calls.push("rect".into());
        }
        fn fill_ellipse(&mut self, _rect: Rect, _color: Color) {
            self.calls.push("ellipse".into());
        }
        fn line(&mut self, _from: Vec2, _to: Vec2, _color: Color) {
            self.calls.push("line".into());
        }
        fn text(&mut self, text: &str, _pos: Vec2, style: TextStyle) {
            self.calls.push("text".into());
            self.texts.push((text.to_string(), style));
        }
        fn present(&mut self) {
            self.calls.push("present".into());
        }
    }

    #[test]
    fn test_draw_playing_frame() {
        let state = MatchState::new(&Settings::default());
        let mut surface = RecordingSurface::default();
        Renderer::default().draw(&mut surface, &Frame::capture(&state));

        assert_eq!(
            surface.calls,
            ["clear", "rect", "rect", "ellipse", "line", "text", "text", "present"]
        );
        assert_eq!(surface.texts[0].0, "0");
        assert_eq!(surface.texts[0].1.size, 30.0);
    }

    #[test]
    fn test_draw_menu_uses_configured_fonts() {
        let mut state = MatchState::new(&Settings::default());
        state.begin_round_over(Side::Player);
        state.open_replay_menu();

        let config = RenderConfig {
            title_font_size: 72.0,
            ..Default::default()
        };
        let mut surface = RecordingSurface::default();
        Renderer::new(config).draw(&mut surface, &Frame::capture(&state));

        // Two scores, title, summary and four options
        assert_eq!(surface.texts.len(), 8);
        let (title, style) = &surface.texts[2];
        assert_eq!(title, "Player Wins!");
        assert_eq!(style.size, 72.0);
        assert!(style.bold);
    }
}
