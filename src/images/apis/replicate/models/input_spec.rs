use serde::Serialize;

use crate::images::models::generation_input::GenerationInput;

#[derive(Debug, Serialize)]
pub struct InputSpec<'a> {
    pub version: &'a str,
    pub input: &'a GenerationInput,
}
