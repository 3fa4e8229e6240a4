use serde::Serialize;

/// Model input for a single generation call. Only the prompt varies; the
/// sampling parameters are fixed for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationInput {
    pub prompt: String,
    pub num_outputs: u8,
    pub guidance_scale: f32,
    pub num_inference_steps: u16,
}

impl GenerationInput {
    pub const NUM_OUTPUTS: u8 = 1;
    pub const GUIDANCE_SCALE: f32 = 7.5;
    pub const NUM_INFERENCE_STEPS: u16 = 50;

    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            num_outputs: Self::NUM_OUTPUTS,
            guidance_scale: Self::GUIDANCE_SCALE,
            num_inference_steps: Self::NUM_INFERENCE_STEPS,
        }
    }
}
