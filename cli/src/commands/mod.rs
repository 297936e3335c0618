mod common;
mod generate;
mod show;
mod verify;

pub use common::*;
pub use generate::*;
pub use show::*;
pub use verify::*;
