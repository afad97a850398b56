mod loader;

pub use loader::{LoadError, load_answer_key_from_json, load_form_from_json};
