pub mod editor;
pub mod ports;

pub use editor::{BlogEditor, EditorOptions, FormView, SubmitOutcome};
pub use ports::{BlogApi, PageHost, RecordedPage};
