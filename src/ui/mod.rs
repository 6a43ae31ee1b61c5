//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: idle keyboard loop, algorithm picker, value input mode
//! - **[`backend`]**: the playback [`Renderer`] and [`Pacer`] for a real terminal
//! - **[`panes`]**: stateless render functions for the chart, input line and status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a terminal and
//! the initial values, then call [`App::run`] to start the event loop.
//!
//! [`Renderer`]: crate::playback::Renderer
//! [`Pacer`]: crate::playback::Pacer
//! [`App::run`]: app::App::run

pub mod app;
pub mod backend;
pub mod panes;
pub mod theme;

pub use app::App;
