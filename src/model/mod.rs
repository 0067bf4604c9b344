mod common;
mod match_detail;
mod team;

pub use common::*;
pub use match_detail::*;
pub use team::*;
