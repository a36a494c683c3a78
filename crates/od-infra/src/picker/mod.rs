//! Photo library adapters.

mod file_picker;

pub use file_picker::FileImagePicker;
