//! # HistoryPanel Component
//!
//! Scrollable list of past analyses, newest first as the service returns
//! them. Each row shows the mood on the left and the timestamp on the
//! right; an empty list shows a dim placeholder instead.
//!
//! ## Architecture
//!
//! `HistoryPanel` is a transient component (created each frame) that
//! wraps `&'a mut HistoryPanelState` (persistent scroll state) and the
//! entry slice (props). Event handling lives on the state type because
//! the component is recreated every frame and cannot hold the scroll
//! position itself.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use crate::analysis::HistoryEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const EMPTY_PLACEHOLDER: &str = "No history yet";

/// Scroll state for the history panel.
/// Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct HistoryPanelState {
    pub scroll_state: ScrollViewState,
    /// Last known inner viewport height (for scroll clamping)
    viewport_height: u16,
    /// Row count from the last render (for scroll clamping)
    row_count: u16,
}

impl HistoryPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    fn clamp_scroll(&mut self) {
        let max_y = self.row_count.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for HistoryPanelState {
    type Event = (); // Scrolling is handled internally, nothing bubbles up

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}

/// Scrollable history view.
/// Created fresh each frame with references to state and data.
pub struct HistoryPanel<'a> {
    pub state: &'a mut HistoryPanelState,
    pub entries: &'a [HistoryEntry],
}

impl<'a> HistoryPanel<'a> {
    pub fn new(state: &'a mut HistoryPanelState, entries: &'a [HistoryEntry]) -> Self {
        Self { state, entries }
    }
}

impl Component for HistoryPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("History");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.entries.is_empty() {
            let placeholder = Paragraph::new(EMPTY_PLACEHOLDER)
                .style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(placeholder, inner);
            return;
        }

        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar safe area
        let row_count = self.entries.len() as u16;

        self.state.viewport_height = inner.height;
        self.state.row_count = row_count;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, row_count))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (i, entry) in self.entries.iter().enumerate() {
            let row_rect = Rect::new(0, i as u16, content_width, 1);
            let row = Line::from(format_row(&entry.mood, &entry.time, content_width));
            scroll_view.render_widget(row, row_rect);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// Lay out one history row: mood left, time pushed to the right edge.
/// Pad width is display columns (moods carry double-width emoji).
fn format_row(mood: &str, time: &str, width: u16) -> String {
    let used = mood.width() + time.width();
    let pad = (width as usize).saturating_sub(used).max(1);
    format!("{mood}{:pad$}{time}", "")
}
