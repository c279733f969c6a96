//! Presentation state for the two screens.
//!
//! Each view model owns its state and a private mailbox. Network calls and
//! debounce timers run on spawned tasks and only post messages back;
//! `process_next` applies them on the owning task. Overlapping fetches are
//! not coordinated, so whichever completion is processed last wins.

pub mod player_detail;
pub mod player_list;

pub use player_detail::{DetailUpdate, PlayerDetailViewModel};
pub use player_list::{ListUpdate, PlayerListViewModel};
