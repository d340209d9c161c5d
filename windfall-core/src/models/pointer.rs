use super::Vector;
use serde::{Deserialize, Serialize};

/// One sample of the global input state.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub position: Vector,
    pub primary_pressed: bool,
}

impl Pointer {
    #[must_use]
    pub const fn new(position: Vector, primary_pressed: bool) -> Self {
        Self {
            position,
            primary_pressed,
        }
    }
}
