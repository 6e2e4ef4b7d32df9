//! HTTP client for the external verification service.

use crate::error::VerifyError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tally_types::{Verdict, VerdictReport};

/// Default timeout for a verification request. The AI call is the one
/// boundary call with real latency; submissions must not hang on it.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// A verification request: the report text plus an optional image payload.
#[derive(Clone, Debug, Serialize)]
pub struct VerifyRequest<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<&'a str>,
}

/// Raw JSON response from the verification endpoint.
///
/// The API contract: `POST {endpoint}` with a [`VerifyRequest`] body returns
/// `{"verdict": "REAL"|"FAKE"|"DILEMMA", "confidence": 0-100,
///   "reasoning": text, "isAiGenerated": bool}`.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    verdict: String,
    confidence: f64,
    reasoning: String,
    #[serde(rename = "isAiGenerated", default)]
    is_ai_generated: bool,
}

/// Client for the verification endpoint.
pub struct VerifyClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl VerifyClient {
    /// Create a client for an endpoint URL with default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }

    /// Verify a news report.
    ///
    /// Always completes with a report: any transport, timeout, or parse
    /// failure substitutes [`VerdictReport::fallback`] so the submission can
    /// proceed on an undecided verdict.
    pub async fn verify(&self, request: VerifyRequest<'_>) -> VerdictReport {
        match self.try_verify(&request).await {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(error = %e, "verification failed, using fallback verdict");
                VerdictReport::fallback()
            }
        }
    }

    async fn try_verify(&self, request: &VerifyRequest<'_>) -> Result<VerdictReport, VerifyError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VerifyError::Unreachable(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    VerifyError::Unreachable(format!("connection failed: {e}"))
                } else {
                    VerifyError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(VerifyError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let raw: VerifyResponse = response.json().await.map_err(|e| {
            VerifyError::InvalidResponse(format!("failed to parse verdict response: {e}"))
        })?;
        parse_report(raw)
    }
}

fn parse_report(raw: VerifyResponse) -> Result<VerdictReport, VerifyError> {
    let verdict = match raw.verdict.as_str() {
        "REAL" => Verdict::Real,
        "FAKE" => Verdict::Fake,
        "DILEMMA" => Verdict::Dilemma,
        other => {
            return Err(VerifyError::InvalidResponse(format!(
                "unknown verdict {other:?}"
            )))
        }
    };
    let confidence = raw.confidence.clamp(0.0, 100.0).round() as u8;
    Ok(VerdictReport {
        verdict,
        confidence: Some(confidence),
        reasoning: Some(raw.reasoning),
        ai_generated_image: Some(raw.is_ai_generated),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(verdict: &str, confidence: f64) -> VerifyResponse {
        VerifyResponse {
            verdict: verdict.to_string(),
            confidence,
            reasoning: "because".to_string(),
            is_ai_generated: false,
        }
    }

    #[test]
    fn parses_known_verdicts() {
        assert_eq!(parse_report(raw("REAL", 88.0)).unwrap().verdict, Verdict::Real);
        assert_eq!(parse_report(raw("FAKE", 12.0)).unwrap().verdict, Verdict::Fake);
        assert_eq!(
            parse_report(raw("DILEMMA", 50.0)).unwrap().verdict,
            Verdict::Dilemma
        );
    }

    #[test]
    fn clamps_out_of_range_confidence() {
        assert_eq!(parse_report(raw("REAL", 250.0)).unwrap().confidence, Some(100));
        assert_eq!(parse_report(raw("REAL", -3.0)).unwrap().confidence, Some(0));
    }

    #[test]
    fn rejects_unknown_verdict() {
        assert!(parse_report(raw("MAYBE", 50.0)).is_err());
    }

    #[tokio::test]
    async fn unreachable_service_yields_fallback() {
        // Nothing listens on this port; connection fails fast.
        let client =
            VerifyClient::with_timeout("http://127.0.0.1:9/verify", Duration::from_millis(200));
        let report = client
            .verify(VerifyRequest {
                text: "cyclone causes eruptions",
                image_base64: None,
                mime_type: None,
            })
            .await;
        assert_eq!(report, VerdictReport::fallback());
    }

    #[test]
    fn request_serializes_without_empty_image_fields() {
        let req = VerifyRequest {
            text: "hello",
            image_base64: None,
            mime_type: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hello"}));
    }
}
