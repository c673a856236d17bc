use std::env;
use anyhow::{Context, Result};
use reqwest::{header::{HeaderMap, HeaderName, HeaderValue}, Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::env_keys::{EMOTION_API_URL, EMOTION_MODEL_ID};
use super::common_structs::{AnalysisResult, EmotionScores};

const DEFAULT_ENDPOINT: &str = "https://sn-watson-emotion.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/EmotionPredict";
const DEFAULT_MODEL_ID: &str = "emotion_aggregated-workflow_lang_en_stock";
pub const MODEL_ID_HEADER: &str = "grpc-metadata-mm-model-id";

pub const NO_PREDICTIONS_MESSAGE: &str = "No emotion predictions found in the response";

#[derive(Debug, Clone)]
pub struct EmotionService {
    client: Client,
    endpoint: String,
    headers: HeaderMap
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EmotionPredictRequest {
    pub raw_document: RawDocument
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub text: String
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionPredictResponse {
    #[serde(rename = "emotionPredictions")]
    pub emotion_predictions: Option<Vec<EmotionPrediction>>
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmotionPrediction {
    pub emotion: Option<EmotionScores>
}


impl EmotionService {
    pub fn new() -> Self {
        let endpoint = env::var(EMOTION_API_URL).unwrap_or(DEFAULT_ENDPOINT.to_owned());
        let model_id = env::var(EMOTION_MODEL_ID).unwrap_or(DEFAULT_MODEL_ID.to_owned());
        Self::with_endpoint(&endpoint, &model_id)
    }

    pub fn with_endpoint(endpoint: &str, model_id: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(MODEL_ID_HEADER),
            HeaderValue::from_str(model_id).unwrap_or(HeaderValue::from_static(DEFAULT_MODEL_ID))
        );

        Self {
            client: Client::new(),
            endpoint: endpoint.to_owned(),
            headers
        }
    }

    /// Classifies `text` with the upstream service.
    ///
    /// Blank text is answered with `AnalysisResult::Invalid` without calling
    /// out. Transport and decoding failures come back as
    /// `AnalysisResult::Error`, so this never fails.
    pub async fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return AnalysisResult::Invalid;
        }

        let (status, body) = match self.send(text).await {
            Ok(response) => response,
            Err(error) => {
                warn!("Error calling emotion service: {:?}", error);
                return AnalysisResult::error(format!("Failed to reach emotion service: {:#}", error));
            },
        };

        info!("emotion service responded with status {}", status);
        interpret_response(status, &body)
    }

    async fn send(&self, text: &str) -> Result<(StatusCode, String)> {
        let request = EmotionPredictRequest {
            raw_document: RawDocument { text: text.to_owned() }
        };

        let response = self.client
            .post(&self.endpoint)
            .headers(self.headers.clone())
            .json(&request)
            .send()
            .await
            .context("Error sending emotion request")?;

        let status = response.status();
        let body = response.text().await.context("Error reading emotion response")?;
        Ok((status, body))
    }
}

impl Default for EmotionService {
    fn default() -> Self {
        Self::new()
    }
}


pub fn interpret_response(status: StatusCode, body: &str) -> AnalysisResult {
    match status {
        StatusCode::OK => match parse_scores(body) {
            Ok(Some(scores)) => AnalysisResult::scored(scores),
            Ok(None) => AnalysisResult::error(NO_PREDICTIONS_MESSAGE),
            Err(error) => {
                warn!("Error parsing emotion response: {:?}", error);
                AnalysisResult::error(format!("Failed to parse emotion response: {:#}", error))
            },
        },
        StatusCode::BAD_REQUEST => AnalysisResult::Invalid,
        other => AnalysisResult::error(format!("Failed to get a response, status code: {}", other.as_u16())),
    }
}

// None when the payload carries no prediction at all
fn parse_scores(body: &str) -> Result<Option<EmotionScores>> {
    let response = serde_json::from_str::<EmotionPredictResponse>(body).context("Error decoding emotion response")?;
    let Some(prediction) = response.emotion_predictions.unwrap_or_default().into_iter().next() else {
        return Ok(None);
    };
    Ok(Some(prediction.emotion.unwrap_or_default()))
}
