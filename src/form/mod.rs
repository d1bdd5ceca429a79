//! The record supplement form: state machine and page rendering.

mod controller;
pub mod render;

pub use controller::{
    FAILURE_PREFIX, FormController, FormState, MISSING_FIELDS_WARNING, Phase, SubmitOutcome,
};
pub use render::{Notice, Page, print_page, render_page};
