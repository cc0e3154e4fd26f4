//! # TitleBar Component
//!
//! Top status bar showing the app name, the prompt, and the in-flight
//! analysis indicator.
//!
//! ## Responsibilities
//!
//! - Display the MoodLens banner and prompt
//! - Show an animated `Analyzing...` segment while a request is in flight
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and
//! has no internal state, which makes it trivial to test:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar { busy: true, spinner_frame: 3 };
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Props are struct fields rather than render() parameters because the
//! Component trait requires a fixed render() signature.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Top status bar component.
///
/// # Props
///
/// - `busy`: whether an analysis request is in flight
/// - `spinner_frame`: animation frame counter from the event loop
pub struct TitleBar {
    pub busy: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(busy: bool, spinner_frame: usize) -> Self {
        Self {
            busy,
            spinner_frame,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line.
    ///
    /// Always height 1; a plain Span rather than a Block because there
    /// is nothing to border and the text is simpler to test.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.busy {
            let glyph = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            format!("🧠 MoodLens | How are you feeling today? | {glyph} Analyzing...")
        } else {
            "🧠 MoodLens | How are you feeling today?".to_string()
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
