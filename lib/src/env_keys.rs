pub static EMOTION_API_URL: &str = "EMOTION_API_URL";
pub static EMOTION_MODEL_ID: &str = "EMOTION_MODEL_ID";

pub static LISTEN_ADDRESS: &str = "LISTEN_ADDRESS";

// set by the Lambda execution environment
pub static AWS_LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

// read by lambda_http when routing
pub static AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH: &str = "AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH";
