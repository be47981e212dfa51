pub mod draft;
pub mod error;
pub mod location;
pub mod reply;

pub use draft::{BlogFields, DraftField, HeadingKey, PostDraft};
pub use error::EditorError;
pub use location::{DEFAULT_API_PATH, EditorMode, PageLocation, SubmitMethod};
pub use reply::{ApiReply, SubmitReply};
