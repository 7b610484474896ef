//! Open-state store and collapse context for [`iced`] panels.
//!
//! This crate is split into three layers:
//! - [`OpenState`], a controlled/uncontrolled open flag;
//! - [`CollapseContext`] and [`effective_collapsed`], the read-only flag
//!   leaves use to choose between full and compact rendering;
//! - [`Collapsible`], a disclosure section built on the two.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::Element;
//! use iced::widget::text;
//! use tessel_ui_collapsible::{Collapsible, OpenState};
//!
//! #[derive(Clone)]
//! enum Message {
//!     Toggle,
//! }
//!
//! struct State {
//!     details: OpenState,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     match message {
//!         Message::Toggle => {
//!             let _ = state.details.toggle();
//!         },
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     Collapsible::new(state.details.open(), text("Details"))
//!         .content(text("Body"))
//!         .on_toggle(Message::Toggle)
//!         .view()
//! }
//! ```

mod context;
mod state;
mod view;

pub use context::{CollapseContext, CollapsibleMode, effective_collapsed};
pub use state::{OnOpenChange, OpenChange, OpenState};
pub use view::Collapsible;
