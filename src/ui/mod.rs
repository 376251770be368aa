//! User interface rendering layer with component-based architecture.
//!
//! Turns session state into ANSI-styled frames through composable components:
//!
//! ```text
//! SessionState → compute_viewmodel → UIViewModel → render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`layout`]: Box placement and list capacity
//! - [`helpers`]: Cursor positioning and text fitting
//! - [`style`]: ANSI attribute sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod style;
pub mod viewmodel;

pub use layout::WindowLayout;
pub use renderer::{render, render_viewmodel};
pub use viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
