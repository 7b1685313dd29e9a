pub mod fragment;
pub mod notes;
