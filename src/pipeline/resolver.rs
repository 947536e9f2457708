//! Media URL resolution through the validation API
//!
//! The validation endpoint exchanges a media identifier plus a device
//! negotiation profile for an actual stream URL and its bitrate variants.
//! The whole profile is fixed per deployment (`config::DeviceProfile`);
//! nothing here varies per call except the media identifier.

use crate::config::ResolverConfig;
use crate::Error;
use chrono::{DateTime, Utc};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

/// One playable encoding option returned alongside the resolved URL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BitrateVariant {
    #[serde(default)]
    pub bitrate: u32,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub lines: String,
}

/// Validation envelope; only consumed fields are modelled
#[derive(Debug, Deserialize)]
struct ValidationResponse {
    #[serde(default)]
    url: String,

    #[serde(rename = "errorCode", default)]
    error_code: i64,

    /// Free-form: the API sends strings, nulls, and structured objects here
    #[serde(default)]
    message: serde_json::Value,

    #[serde(default)]
    bitrates: Vec<BitrateVariant>,
}

/// A stream URL produced by a successful validation exchange
///
/// Terminal entity of the pipeline; ownership moves to the download engine
/// once a job built from it is submitted.
#[derive(Debug, Clone)]
pub struct ResolvedStream {
    /// Episode page this stream was resolved for
    pub episode_url: String,
    /// Playable media URL
    pub stream_url: String,
    /// Encoding options the API offered alongside the URL
    pub bitrates: Vec<BitrateVariant>,
    /// When the validation exchange completed
    pub resolved_at: DateTime<Utc>,
}

/// Builds the validation query for a media identifier under a device profile
pub fn build_validation_url(
    config: &ResolverConfig,
    id_media: &str,
) -> Result<Url, url::ParseError> {
    let profile = &config.profile;
    let mut url = Url::parse(&config.endpoint)?;
    url.query_pairs_mut()
        .append_pair("connectionType", &profile.connection_type)
        .append_pair("output", &profile.output)
        .append_pair(
            "multibitrate",
            if profile.multibitrate { "true" } else { "false" },
        )
        .append_pair("deviceType", &profile.device_type)
        .append_pair("appCode", &profile.app_code)
        .append_pair("idMedia", id_media);
    Ok(url)
}

/// Resolves a media identifier into a playable stream URL
///
/// Failure modes, in evaluation order:
/// - `Network` on connection or timeout failure
/// - `Status` on any non-success response, before decoding is attempted
/// - `Decode` when the body is not a well-formed validation envelope
/// - `Api` when the envelope carries a non-zero error code or an empty URL,
///   regardless of HTTP status — a `url` field next to a non-zero code is
///   still a rejection
pub async fn resolve(
    client: &Client,
    config: &ResolverConfig,
    episode_url: &str,
    id_media: &str,
) -> Result<ResolvedStream, Error> {
    let url = build_validation_url(config, id_media)?;
    tracing::debug!("Validating media {} via {}", id_media, url);

    let response = client
        .get(url.clone())
        .header(USER_AGENT, &config.profile.user_agent)
        .send()
        .await
        .map_err(|source| Error::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            code: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| Error::Network {
        url: url.to_string(),
        source,
    })?;

    let envelope: ValidationResponse =
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            id_media: id_media.to_string(),
            source,
        })?;

    if envelope.error_code != 0 || envelope.url.is_empty() {
        return Err(Error::Api {
            id_media: id_media.to_string(),
            code: envelope.error_code,
            message: message_text(&envelope.message),
        });
    }

    tracing::debug!("Media {} resolved to {}", id_media, envelope.url);
    Ok(ResolvedStream {
        episode_url: episode_url.to_string(),
        stream_url: envelope.url,
        bitrates: envelope.bitrates,
        resolved_at: Utc::now(),
    })
}

/// Renders the envelope's free-form message field for error reporting
fn message_text(message: &serde_json::Value) -> String {
    match message {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceProfile;

    fn test_config() -> ResolverConfig {
        ResolverConfig {
            endpoint: "https://validation.test/v1".to_string(),
            profile: DeviceProfile::default(),
        }
    }

    #[test]
    fn test_build_validation_url_query() {
        let url = build_validation_url(&test_config(), "367664").unwrap();

        assert_eq!(url.host_str(), Some("validation.test"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("connectionType".to_string(), "broadband".to_string()),
                ("output".to_string(), "json".to_string()),
                ("multibitrate".to_string(), "true".to_string()),
                ("deviceType".to_string(), "ipad".to_string()),
                ("appCode".to_string(), "medianet".to_string()),
                ("idMedia".to_string(), "367664".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_validation_url_with_alternate_profile() {
        let mut config = test_config();
        config.profile.device_type = "android".to_string();
        config.profile.multibitrate = false;

        let url = build_validation_url(&config, "1").unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("deviceType=android"));
        assert!(query.contains("multibitrate=false"));
    }

    #[test]
    fn test_build_validation_url_bad_endpoint() {
        let mut config = test_config();
        config.endpoint = "not a url".to_string();
        assert!(build_validation_url(&config, "1").is_err());
    }

    #[test]
    fn test_envelope_decodes_consumed_fields() {
        let body = r#"{
            "url": "https://stream.example/x.m3u8",
            "errorCode": 0,
            "message": null,
            "params": [{"name": "ignored", "value": 1}],
            "bitrates": [{"bitrate": 1200, "width": 1280, "height": 720, "lines": "720"}]
        }"#;
        let envelope: ValidationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.url, "https://stream.example/x.m3u8");
        assert_eq!(envelope.error_code, 0);
        assert_eq!(envelope.bitrates.len(), 1);
        assert_eq!(envelope.bitrates[0].bitrate, 1200);
    }

    #[test]
    fn test_message_text_variants() {
        assert_eq!(message_text(&serde_json::json!("plain")), "plain");
        assert_eq!(message_text(&serde_json::Value::Null), "");
        assert_eq!(
            message_text(&serde_json::json!({"code": "GeoBlocked"})),
            r#"{"code":"GeoBlocked"}"#
        );
    }
}
