pub mod history;
pub mod predict;

pub use history::history;
pub use predict::{PredictArgs, predict};
