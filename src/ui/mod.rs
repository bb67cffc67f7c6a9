// Favorites panel UI
// State machine, command dispatch, and HTML rendering for the dropdown.

pub mod markup;
pub mod messages;
pub mod panel;
