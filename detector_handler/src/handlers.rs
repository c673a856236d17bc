
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use lib::service::common_structs::AnalysisResult;
use lib::service::CommonService;
use serde_json::json;
use tracing::{info, warn};

pub const INVALID_TEXT_MESSAGE: &str = "Invalid text! Please try again.";
pub const TEXT_PARAM: &str = "textToAnalyze";
const NO_TEXT_MESSAGE: &str = "No text provided for analysis";


fn build_error_response(message: &str) -> Response {
    let mut json_header = HeaderMap::new();
    json_header.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let mut response = Response::new(json!({
        "error": message
    }).to_string());
    *response.status_mut() = StatusCode::BAD_REQUEST;
    (json_header, response).into_response()
}

fn build_text_response(text: &str) -> Response {
    let mut text_header = HeaderMap::new();
    text_header.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    let response = Response::new(text.to_owned());
    (text_header, response).into_response()
}


// first occurrence wins when the parameter is repeated
pub fn text_to_analyze(params: &[(String, String)]) -> Option<&str> {
    params
        .iter()
        .find(|(key, _)| key == TEXT_PARAM)
        .map(|(_, value)| value.as_str())
}

/// Shortest round-trip form of a score. Whole numbers keep a decimal point
/// (`0.0`), and values below 1e-4 or from 1e16 up use a signed exponent of at
/// least two digits (`4e-05`).
pub fn format_score(score: f64) -> String {
    if !score.is_finite() {
        return score.to_string().to_lowercase();
    }

    let magnitude = score.abs();
    if score == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let decimal = score.to_string();
        return if decimal.contains('.') { decimal } else { format!("{}.0", decimal) };
    }

    let scientific = format!("{:e}", score);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

pub fn response_text(result: &AnalysisResult) -> String {
    match result {
        AnalysisResult::Scored { scores, dominant_emotion } => format!(
            "For the given statement, the system response is 'anger': {}, 'disgust': {}, 'fear': {}, 'joy': {} and 'sadness': {}. The dominant emotion is {}.",
            format_score(scores.anger),
            format_score(scores.disgust),
            format_score(scores.fear),
            format_score(scores.joy),
            format_score(scores.sadness),
            dominant_emotion
        ),
        AnalysisResult::Invalid => INVALID_TEXT_MESSAGE.to_owned(),
        AnalysisResult::Error { message } => message.to_owned(),
    }
}


pub async fn emotion_detector(
    State(service): State<CommonService>,
    Query(params): Query<Vec<(String, String)>>
) -> Response {

    let text = match text_to_analyze(&params) {
        Some(text) if !text.is_empty() => text,
        _ => {
            warn!("emotion detector called without text");
            return build_error_response(NO_TEXT_MESSAGE);
        },
    };

    let result = service.emotion.analyze(text).await;
    info!("analysis result: {:?}", result);

    build_text_response(&response_text(&result))
}
