//! Loading, describing and splitting labeled message corpora.

pub mod loader;
pub mod split;
pub mod summary;

pub use loader::{load_messages, read_messages};
pub use split::{TrainTestSplit, train_test_split};
pub use summary::{DatasetSummary, LabelShare};
