pub mod refactor;
