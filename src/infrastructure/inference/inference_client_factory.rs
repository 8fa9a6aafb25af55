use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{InferenceClient, InferenceError};
use crate::presentation::config::{InferenceSettings, ScaffoldConfig};

use super::gradio_client::GradioClient;
use super::mock_inference_client::MockInferenceClient;

pub struct InferenceClientFactory;

impl InferenceClientFactory {
    pub async fn create(
        settings: &InferenceSettings,
        scaffold: &ScaffoldConfig,
    ) -> Result<Arc<dyn InferenceClient>, InferenceError> {
        if scaffold.enabled {
            tracing::warn!("Scaffold mode enabled, inference replies are canned");
            let client = MockInferenceClient::default()
                .with_delay(Duration::from_millis(scaffold.mock_response_delay_ms));
            return Ok(Arc::new(client));
        }

        let client = GradioClient::connect(settings).await?;
        Ok(Arc::new(client))
    }
}
