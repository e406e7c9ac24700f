pub mod bank;
pub mod carousel;
pub mod config;
pub mod error;
pub mod keys;
pub mod lazy;
pub mod notes;
pub mod throttle;

pub use bank::*;
pub use carousel::*;
pub use config::*;
pub use error::*;
pub use keys::*;
pub use lazy::*;
pub use notes::*;
pub use throttle::*;
