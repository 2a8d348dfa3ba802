// Author: Dustin Pilgrim
// License: MIT

pub mod history;
pub mod input;
pub mod ticker;
