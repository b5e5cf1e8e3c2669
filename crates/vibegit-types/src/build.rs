use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Version stamped into every backend payload
pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Message returned by the backend root endpoint
pub const ROOT_MESSAGE: &str = "Backend OK";

/// Format a timestamp the way the backend reports it (`2024-01-01T00:00:00.000Z`)
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    pub time: String,
}

impl BuildInfo {
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            version: BUILD_VERSION.to_string(),
            time: iso_timestamp(time),
        }
    }

    pub fn now() -> Self {
        Self::at(Utc::now())
    }
}

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub build: BuildInfo,
}

impl RootResponse {
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            message: ROOT_MESSAGE.to_string(),
            build: BuildInfo::at(time),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub time: String,
    pub build: BuildInfo,
}

impl HealthResponse {
    pub fn ok_at(time: DateTime<Utc>) -> Self {
        Self {
            status: "ok".to_string(),
            time: iso_timestamp(time),
            build: BuildInfo::at(time),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_health_payload_shape() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 30, 0).unwrap();
        let value = serde_json::to_value(HealthResponse::ok_at(at)).unwrap();

        assert_eq!(value["status"], "ok");
        assert_eq!(value["time"], "2024-01-01T12:30:00.000Z");
        assert_eq!(value["build"]["version"], BUILD_VERSION);
        assert_eq!(value["build"]["time"], "2024-01-01T12:30:00.000Z");
    }

    #[test]
    fn test_root_payload_message() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let root = RootResponse::at(at);
        assert_eq!(root.message, "Backend OK");
        assert_eq!(root.build.version, BUILD_VERSION);
    }
}
