//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, mirroring the split in the rest of the TUI:
//!
//! - **Stateless (props-based)**: `TitleBar` and `Alert` receive all data
//!   as struct fields and just draw it.
//! - **Stateful (event-driven)**: `InputBox` owns the text buffer and
//!   cursor; `OutputListState` owns the scroll position. Both consume
//!   `TuiEvent`s and emit high-level events for the main loop.
//!
//! Components receive external data as props rather than reaching into
//! global state, which keeps dependencies explicit and the components
//! testable with `TestBackend`.

pub mod alert;
pub mod input_box;
pub mod output_list;
pub mod title_bar;

pub use alert::{Alert, AlertEvent};
pub use input_box::{InputBox, InputEvent};
pub use output_list::OutputListState;
pub use title_bar::TitleBar;
