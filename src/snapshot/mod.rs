pub mod merge;
pub mod store;

pub use merge::merge;
pub use store::{load_previous, save};
