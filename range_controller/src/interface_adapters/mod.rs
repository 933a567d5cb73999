// Interface adapters: register storage, snapshots and randomness.

pub mod protocol;
pub mod registers;
pub mod utils;
