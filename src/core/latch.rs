// Author: Dustin Pilgrim
// License: MIT

/// One-shot flag. `trip()` returns true the first time only.
#[derive(Debug, Default, Clone)]
pub struct Latch {
    tripped: bool,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trip(&mut self) -> bool {
        if self.tripped {
            return false;
        }
        self.tripped = true;
        true
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped
    }
}
