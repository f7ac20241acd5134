pub mod text_repository_errors;
