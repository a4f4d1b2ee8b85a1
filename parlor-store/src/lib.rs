pub mod error;
pub mod model;
pub mod persist;
pub mod questions;
pub mod settings;

pub use error::QuestionError;
pub use model::{Category, Mode};
pub use questions::QuestionBank;
pub use settings::ModePreferenceStore;
