pub mod replicate_predictions_response;
