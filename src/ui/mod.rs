//! Interactive terminal surface: scroll state, input, drawing and the
//! event loop that feeds the viewport to the page.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod scroll;
pub mod terminal_guard;
pub mod theme;
