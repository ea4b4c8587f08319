pub mod identifier_rules;

pub use identifier_rules::{validate_entry, validate_family_key, validate_identifier};
