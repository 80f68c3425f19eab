//! Game rules: win detection and the mandatory-rotation symmetry check.
//!
//! Pure predicates over the board; the state machine in `engine` decides
//! when to consult them.

pub mod symmetry;
pub mod win;

pub use symmetry::{has_rotational_symmetry, is_rotation_mandatory};
pub use win::{has_any_line_of_five, has_line_of_five, WIN_LENGTH};
