//! Line-oriented command shell over a [`MovieStore`](crate::storage::MovieStore).

pub mod autocomplete;
pub mod command;
pub mod error;
pub mod session;

pub use autocomplete::Autocompleter;
pub use command::{Command, HELP};
pub use error::ShellError;
pub use session::{Output, RunSummary, Session, load_seed_file};
