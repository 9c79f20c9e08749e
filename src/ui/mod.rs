//! User-facing coordination.
//!
//! # Data Flow
//! ```text
//! UiEvent (click / input)
//!     → coordinator.rs (dispatch, action sequences)
//!     → blockchain + provider calls
//!     → state.rs (button labels, disabled flags)
//! ```

pub mod coordinator;
pub mod state;

pub use coordinator::{ActionOutcome, Coordinator, CoordinatorError, CoordinatorResult, UiEvent};
pub use state::{Button, ButtonId, UiState, CONNECTED_LABEL, CONNECT_LABEL, INSTALL_PROMPT};
