pub mod replicate_model_version;
pub mod replicate_prediction_status;
