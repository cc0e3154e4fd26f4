//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: app banner with the in-flight indicator
//! - `ResultPanel`: latest mood and suggestion
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `InputBox`: the mood entry field (buffer, cursor, internal scroll)
//! - `HistoryPanel`: scrollable list of past analyses
//!
//! ## Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, event handling, and tests.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (app banner)
//! ├── input_box.rs      (mood entry field)
//! ├── result_panel.rs   (latest analysis)
//! └── history_panel.rs  (scrollable past analyses)
//! ```

mod history_panel;
mod input_box;
mod result_panel;
mod title_bar;

pub use history_panel::{HistoryPanel, HistoryPanelState};
pub use input_box::{INPUT_PANEL_HEIGHT, InputBox, InputEvent};
pub use result_panel::ResultPanel;
pub use title_bar::TitleBar;
