pub mod error;
pub mod options;
pub mod song;

pub use error::*;
pub use options::*;
pub use song::*;
