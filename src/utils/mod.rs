pub mod file_ops;
pub mod reporting;

pub use file_ops::FileManager;
pub use reporting::Reporter;
