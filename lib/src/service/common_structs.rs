use std::fmt;
use serde::{Deserialize, Serialize};


#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Joy,
    Sadness,
}

impl Emotion {
    // order decides ties for the dominant emotion
    pub const ALL: [Emotion; 5] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Joy,
        Emotion::Sadness,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Scores as returned by the upstream service, in [0, 1].
/// Keys absent from the payload are read as 0.0.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct EmotionScores {
    pub anger: f64,
    pub disgust: f64,
    pub fear: f64,
    pub joy: f64,
    pub sadness: f64,
}

impl EmotionScores {
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Anger => self.anger,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Joy => self.joy,
            Emotion::Sadness => self.sadness,
        }
    }

    /// Emotion holding the highest score. On a tie the first one in
    /// `Emotion::ALL` wins.
    pub fn dominant_emotion(&self) -> Emotion {
        let mut dominant = Emotion::ALL[0];
        for emotion in Emotion::ALL.into_iter().skip(1) {
            if self.score(emotion) > self.score(dominant) {
                dominant = emotion;
            }
        }
        dominant
    }
}


#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisResult {
    Scored {
        scores: EmotionScores,
        dominant_emotion: Emotion,
    },
    // blank input, or the upstream rejected the text
    Invalid,
    Error {
        message: String,
    },
}

impl AnalysisResult {
    pub fn scored(scores: EmotionScores) -> Self {
        Self::Scored {
            dominant_emotion: scores.dominant_emotion(),
            scores,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    pub fn dominant_emotion(&self) -> Option<Emotion> {
        match self {
            Self::Scored { dominant_emotion, .. } => Some(*dominant_emotion),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn scores(anger: f64, disgust: f64, fear: f64, joy: f64, sadness: f64) -> EmotionScores {
        EmotionScores { anger, disgust, fear, joy, sadness }
    }

    #[test]
    fn picks_highest_score() {
        assert_eq!(scores(0.1, 0.05, 0.05, 0.6, 0.2).dominant_emotion(), Emotion::Joy);
        assert_eq!(scores(0.1, 0.05, 0.05, 0.2, 0.6).dominant_emotion(), Emotion::Sadness);
        assert_eq!(scores(0.9, 0.05, 0.05, 0.2, 0.6).dominant_emotion(), Emotion::Anger);
    }

    #[test]
    fn ties_go_to_earlier_emotion() {
        assert_eq!(scores(0.1, 0.4, 0.4, 0.1, 0.0).dominant_emotion(), Emotion::Disgust);
        assert_eq!(scores(0.0, 0.0, 0.0, 0.5, 0.5).dominant_emotion(), Emotion::Joy);
        assert_eq!(EmotionScores::default().dominant_emotion(), Emotion::Anger);
    }

    #[test]
    fn missing_keys_default_to_zero() {
        let parsed: EmotionScores = serde_json::from_str(r#"{"fear": 0.3}"#).unwrap();
        assert_eq!(parsed, scores(0.0, 0.0, 0.3, 0.0, 0.0));
        assert_eq!(parsed.dominant_emotion(), Emotion::Fear);
    }

    #[test]
    fn emotion_renders_lowercase() {
        assert_eq!(Emotion::Sadness.to_string(), "sadness");
        assert_eq!(serde_json::to_string(&Emotion::Joy).unwrap(), "\"joy\"");
    }

    #[test]
    fn only_scored_has_dominant_emotion() {
        assert_eq!(AnalysisResult::scored(scores(0.0, 0.7, 0.0, 0.0, 0.0)).dominant_emotion(), Some(Emotion::Disgust));
        assert_eq!(AnalysisResult::Invalid.dominant_emotion(), None);
        assert_eq!(AnalysisResult::error("boom").dominant_emotion(), None);
    }
}
