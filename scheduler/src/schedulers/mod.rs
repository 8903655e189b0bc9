//! The scheduling disciplines.
//!
//! Each discipline lives in its own file and is exported here.
//!
mod nsjf;
pub use nsjf::Nsjf;

mod psjf;
pub use psjf::Psjf;
