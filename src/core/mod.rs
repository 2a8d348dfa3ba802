// Author: Dustin Pilgrim
// License: MIT

pub mod error;
pub mod events;
pub mod format;
pub mod latch;
pub mod session;
pub mod utils;
