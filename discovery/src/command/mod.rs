//! [`Command`] definition.

pub mod apply_filter;
pub mod change_sort;
pub mod gesture;
pub mod go_back;
pub mod refresh;
pub mod reset_filter;
pub mod restart;
pub mod show_image;

/// [`Command`] of the [`Discovery`].
///
/// [`Discovery`]: crate::Discovery
pub use common::Handler as Command;

pub use self::{
    apply_filter::ApplyFilter,
    change_sort::ChangeSort,
    gesture::{CancelGesture, EndGesture, MoveGesture, StartGesture},
    go_back::GoBack,
    refresh::Refresh,
    reset_filter::ResetFilter,
    restart::Restart,
    show_image::ShowImage,
};
