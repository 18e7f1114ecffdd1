mod editor;
pub use editor::{MetadataEditor, MetadataRow, PendingUpdate};

mod view;
pub use view::MetadataEditorView;
