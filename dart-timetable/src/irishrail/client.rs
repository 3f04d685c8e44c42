//! Irish Rail realtime HTTP client.
//!
//! Provides async methods for the two read-only endpoints the app uses.
//! Each call is a single attempt with a fixed timeout; there is no retry
//! and no shared mutable state, so concurrent calls are independent.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{Station, TimetableEntry};

use super::convert::{convert_station_data, convert_station_list};
use super::error::RailError;
use super::types::{ArrayOfObjStation, ArrayOfObjStationData};

/// Base URL for the Irish Rail realtime API.
const DEFAULT_BASE_URL: &str = "https://api.irishrail.ie/realtime/realtime.asmx";

/// Request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// How the client treats server TLS certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificatePolicy {
    /// Standard certificate validation.
    #[default]
    Verify,
    /// Accept any server certificate, including invalid or self-signed ones.
    ///
    /// This disables protection against man-in-the-middle attacks. It only
    /// exists for endpoints with a broken certificate chain and must be
    /// opted into explicitly.
    AcceptInvalid,
}

/// Configuration for the Irish Rail client.
#[derive(Debug, Clone)]
pub struct RailConfig {
    /// Base URL for the API (defaults to the public realtime endpoint)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Certificate trust policy
    pub certificate_policy: CertificatePolicy,
}

impl RailConfig {
    /// Create a config pointing at the public API with standard validation.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            certificate_policy: CertificatePolicy::Verify,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the certificate trust policy.
    pub fn with_certificate_policy(mut self, policy: CertificatePolicy) -> Self {
        self.certificate_policy = policy;
        self
    }
}

impl Default for RailConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Irish Rail realtime API client.
///
/// `get_stations` and `get_timetable` never fail: any error is logged and
/// collapses to an empty result, so a flaky network renders as an empty
/// board rather than an error. Use the `fetch_*` variants to see the cause.
#[derive(Debug, Clone)]
pub struct RailClient {
    http: reqwest::Client,
    base_url: String,
}

impl RailClient {
    /// Create a new client with the given configuration.
    pub fn new(config: RailConfig) -> Result<Self, RailError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if config.certificate_policy == CertificatePolicy::AcceptInvalid {
            warn!(
                base_url = %config.base_url,
                "TLS certificate validation is disabled for the Irish Rail client"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// Get every station known to the API, in payload order.
    ///
    /// Returns an empty list on any failure.
    pub async fn get_stations(&self) -> Vec<Station> {
        match self.fetch_stations().await {
            Ok(stations) => stations,
            Err(e) => {
                warn!(error = %e, "failed to fetch station list");
                Vec::new()
            }
        }
    }

    /// Get live predictions for a station, in payload order.
    ///
    /// `station_name` is sent exactly as given. Returns an empty list on any
    /// failure.
    pub async fn get_timetable(&self, station_name: &str) -> Vec<TimetableEntry> {
        match self.fetch_timetable(station_name).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(station = station_name, error = %e, "failed to fetch timetable");
                Vec::new()
            }
        }
    }

    /// Fetch the station list, reporting why it failed.
    pub async fn fetch_stations(&self) -> Result<Vec<Station>, RailError> {
        let url = format!("{}/getAllStationsXML", self.base_url);
        let list: ArrayOfObjStation = self.get_xml(&url, &[]).await?;
        let stations = convert_station_list(list);
        debug!(count = stations.len(), "fetched station list");
        Ok(stations)
    }

    /// Fetch a station's timetable, reporting why it failed.
    pub async fn fetch_timetable(
        &self,
        station_name: &str,
    ) -> Result<Vec<TimetableEntry>, RailError> {
        let url = format!("{}/getStationDataByNameXML", self.base_url);
        let data: ArrayOfObjStationData = self
            .get_xml(&url, &[("StationDesc", station_name)])
            .await?;
        let entries = convert_station_data(data);
        debug!(
            station = station_name,
            count = entries.len(),
            "fetched timetable"
        );
        Ok(entries)
    }

    /// Issue one GET and deserialize the XML body.
    async fn get_xml<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RailError> {
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RailError::Api {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        if body.trim().is_empty() {
            return Err(RailError::EmptyBody);
        }

        quick_xml::de::from_str(&body).map_err(|e| RailError::Xml {
            message: e.to_string(),
        })
    }
}
