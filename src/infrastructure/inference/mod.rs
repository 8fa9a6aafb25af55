mod gradio_client;
pub mod gradio_protocol;
mod inference_client_factory;
mod mock_inference_client;

pub use gradio_client::GradioClient;
pub use inference_client_factory::InferenceClientFactory;
pub use mock_inference_client::MockInferenceClient;
