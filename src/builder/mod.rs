mod build_error;
mod build_step;
mod document_builder;

pub use build_error::BuildError;
pub use build_step::BuildStep;
pub use document_builder::build;
pub use document_builder::DocumentBuilder;
