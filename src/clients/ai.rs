use crate::gateway::HttpClient;
use crate::{Error, Result};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

pub const DEFAULT_SUMMARY_RATIO: f64 = 0.3;

const MIN_SUMMARY_WORDS: usize = 10;
const RATIO_BOUNDS: std::ops::RangeInclusive<f64> = 0.1..=0.9;
const TRANSLATE_PATH: &str = "/translate/";
const SUMMARIZE_PATH: &str = "/summarize/";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Translation {
    // Older service builds name the field `translation`.
    #[serde(alias = "translation")]
    pub translated_text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub summary: String,
    pub original_length: u64,
    pub summary_length: u64,
    pub compression_ratio: f64,
    #[serde(default)]
    pub warning: Option<String>,
}

/// Client for the AI text utilities, addressed at their own origin rather
/// than through the gateway. Input validation happens here, before any
/// network call.
pub struct AiClient<'a> {
    http: &'a HttpClient,
}

impl<'a> AiClient<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: Option<&str>,
    ) -> Result<Translation> {
        if text.trim().is_empty() {
            return Err(Error::validation("translation input must not be empty"));
        }

        debug!("Translating {} chars", text.len());
        let mut body = json!({"text": text});
        if let Some(lang) = source_lang {
            body["source_lang"] = json!(lang);
        }
        if let Some(lang) = target_lang {
            body["target_lang"] = json!(lang);
        }

        let data = self.http.post_json(TRANSLATE_PATH, &body).await?;
        serde_json::from_value(data)
            .map_err(|_| Error::invalid_response("unexpected translation payload"))
    }

    pub async fn summarize(&self, text: &str, ratio: f64) -> Result<Summary> {
        let words = word_count(text);
        if words < MIN_SUMMARY_WORDS {
            return Err(Error::validation(format!(
                "summary input needs at least {MIN_SUMMARY_WORDS} words, got {words}"
            )));
        }
        if !RATIO_BOUNDS.contains(&ratio) {
            return Err(Error::validation(
                "compression ratio must be between 0.1 and 0.9",
            ));
        }

        debug!("Summarizing {} words at ratio {}", words, ratio);
        let body = json!({"text": text, "ratio": ratio});
        let data = self.http.post_json(SUMMARIZE_PATH, &body).await?;
        serde_json::from_value(data)
            .map_err(|_| Error::invalid_response("unexpected summary payload"))
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
