//! # ResultPanel Component
//!
//! Shows the most recent analysis: the mood as a bold headline with the
//! suggestion wrapped beneath it. Stateless; rendered only once a result
//! exists, and kept on screen through later failures.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::analysis::AnalysisResult;
use crate::tui::component::Component;

/// Bordered panel for the latest analysis result.
///
/// # Props
///
/// - `result`: the mood/suggestion pair to display
pub struct ResultPanel<'a> {
    pub result: &'a AnalysisResult,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }

    fn paragraph(result: &AnalysisResult) -> Paragraph<'_> {
        let lines = vec![
            Line::from(Span::styled(
                result.mood.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(result.suggestion.as_str()),
        ];
        Paragraph::new(lines)
            .block(Block::bordered())
            .wrap(Wrap { trim: true })
    }

    /// Panel height (borders included) for the given area width.
    /// The suggestion wraps, so the height depends on the width.
    pub fn calculate_height(result: &AnalysisResult, area_width: u16) -> u16 {
        let inner_width = area_width.saturating_sub(2);
        Self::paragraph(result).line_count(inner_width) as u16
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Self::paragraph(self.result), area);
    }
}
