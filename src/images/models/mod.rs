pub mod generate_image_response;
pub mod generation_input;
