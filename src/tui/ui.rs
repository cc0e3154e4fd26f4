//! Full-screen layout: title, input, error banner, result, history, footer.
//!
//! `draw_ui` is a pure function of the session plus TUI state — given the
//! same inputs it always paints the same frame, which is what the
//! rendering tests below rely on.

use crate::core::state::Session;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HistoryPanel, INPUT_PANEL_HEIGHT, ResultPanel, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

const FOOTER_TEXT: &str = "⚠️ This app is not a medical diagnosis tool. | Esc to quit";

pub fn draw_ui(frame: &mut Frame, session: &Session, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    // Sync InputBox props with the session before painting
    tui.input_box.sync_draft(&session.draft);
    tui.input_box.busy = session.status.is_busy();

    // Zero-height slots collapse the banner and result rows when absent
    let banner_height = if session.status.error_message().is_some() {
        1
    } else {
        0
    };
    let result_height = session
        .result
        .as_ref()
        .map(|r| ResultPanel::calculate_height(r, frame.area().width))
        .unwrap_or(0);

    let layout = Layout::vertical([
        Length(1),
        Length(INPUT_PANEL_HEIGHT),
        Length(banner_height),
        Length(result_height),
        Min(0),
        Length(1),
    ]);
    let [title_area, input_area, banner_area, result_area, history_area, footer_area] =
        layout.areas(frame.area());

    TitleBar::new(session.status.is_busy(), spinner_frame).render(frame, title_area);

    tui.input_box.render(frame, input_area);

    if let Some(message) = session.status.error_message() {
        draw_error_banner(frame, banner_area, message);
    }

    if let Some(result) = &session.result {
        ResultPanel::new(result).render(frame, result_area);
    }

    HistoryPanel::new(&mut tui.history, &session.history).render(frame, history_area);

    draw_footer(frame, footer_area);
}

fn draw_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let banner = Paragraph::new(message).style(Style::default().fg(Color::Yellow));
    frame.render_widget(banner, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResult, HistoryEntry};
    use crate::core::state::{ANALYZE_FAILURE_BANNER, SessionStatus};
    use crate::test_support::test_session;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(session: &Session) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();

        terminal
            .draw(|f| {
                draw_ui(f, session, &mut tui, 0);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn happy() -> AnalysisResult {
        AnalysisResult {
            mood: "Happy 😊".to_string(),
            suggestion: "Keep doing what makes you feel good".to_string(),
        }
    }

    #[test]
    fn test_initial_screen() {
        let session = test_session();
        let text = render_to_text(&session);

        assert!(text.contains("MoodLens"));
        assert!(text.contains("How are you feeling today?"));
        assert!(text.contains("Express your thoughts..."));
        assert!(text.contains("Analyze Mood"));
        assert!(text.contains("No history yet"));
        assert!(text.contains("not a medical diagnosis tool"));
        assert!(!text.contains("Analyzing..."));
        assert!(!text.contains("Backend not running"));
    }

    #[test]
    fn test_busy_state_swaps_submit_label() {
        let mut session = test_session();
        session.status = SessionStatus::Busy;
        let text = render_to_text(&session);

        assert!(text.contains("Analyzing..."));
        assert!(!text.contains("Analyze Mood"));
    }

    #[test]
    fn test_error_banner_renders_message_verbatim() {
        let mut session = test_session();
        session.status = SessionStatus::Error(ANALYZE_FAILURE_BANNER.to_string());
        let text = render_to_text(&session);

        assert!(text.contains("Backend not running"));
        // Error is a non-busy state: submitting stays available
        assert!(text.contains("Analyze Mood"));
    }

    #[test]
    fn test_result_panel_appears_once_result_exists() {
        let mut session = test_session();
        session.result = Some(happy());
        let text = render_to_text(&session);

        assert!(text.contains("Happy"));
        assert!(text.contains("Keep doing what makes you feel good"));
    }

    #[test]
    fn test_failure_keeps_previous_result_on_screen() {
        let mut session = test_session();
        session.result = Some(happy());
        session.status = SessionStatus::Error(ANALYZE_FAILURE_BANNER.to_string());
        let text = render_to_text(&session);

        assert!(text.contains("Backend not running"));
        assert!(text.contains("Happy"));
    }

    #[test]
    fn test_history_rows_render_in_received_order() {
        let mut session = test_session();
        session.history = vec![
            HistoryEntry {
                mood: "Sad 😔".to_string(),
                time: "10:00".to_string(),
            },
            HistoryEntry {
                mood: "Calm 😌".to_string(),
                time: "09:00".to_string(),
            },
        ];
        let text = render_to_text(&session);

        let sad = text.find("Sad").unwrap();
        let calm = text.find("Calm").unwrap();
        assert!(sad < calm, "rows must keep the order the service returned");
        assert!(!text.contains("No history yet"));
    }

    #[test]
    fn test_draft_appears_in_input_box() {
        let mut session = test_session();
        session.draft = "rough morning".to_string();
        let text = render_to_text(&session);

        assert!(text.contains("rough morning"));
        assert!(!text.contains("Express your thoughts..."));
    }
}
