//! In-process stand-in for the Irish Rail realtime API, for tests.

use std::collections::HashMap;

use axum::{Router, extract::Query, response::IntoResponse, routing::get};

/// A station the fake API has no trains for.
pub const UNKNOWN_STATION: &str = "Nowhere";

pub const STATIONS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ArrayOfObjStation xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns="http://api.irishrail.ie/realtime/">
  <objStation>
    <StationDesc>Connolly</StationDesc>
    <StationAlias />
    <StationLatitude>53.3531</StationLatitude>
    <StationLongitude>-6.24591</StationLongitude>
    <StationCode>CNLLY</StationCode>
    <StationId>100</StationId>
  </objStation>
  <objStation>
    <StationDesc>Tara Street</StationDesc>
    <StationAlias />
    <StationLatitude>53.3471</StationLatitude>
    <StationLongitude>-6.25425</StationLongitude>
    <StationCode>TARA</StationCode>
    <StationId>110</StationId>
  </objStation>
  <objStation>
    <StationDesc>Pearse</StationDesc>
    <StationAlias />
    <StationLatitude>53.3433</StationLatitude>
    <StationLongitude>-6.24829</StationLongitude>
    <StationCode>PERSE</StationCode>
    <StationId>111</StationId>
  </objStation>
</ArrayOfObjStation>"#;

pub const CONNOLLY_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ArrayOfObjStationData xmlns="http://api.irishrail.ie/realtime/">
  <objStationData>
    <Traincode>E109</Traincode>
    <Stationfullname>Connolly</Stationfullname>
    <Stationcode>CNLLY</Stationcode>
    <Origin>Bray</Origin>
    <Destination>Howth</Destination>
    <Lastlocation>Departed Pearse</Lastlocation>
    <Duein>5</Duein>
    <Late>1</Late>
    <Exparrival>10:30</Exparrival>
    <Expdepart>10:31</Expdepart>
    <Direction>Northbound</Direction>
    <Traintype>DART</Traintype>
  </objStationData>
  <objStationData>
    <Traincode>E216</Traincode>
    <Stationfullname>Connolly</Stationfullname>
    <Stationcode>CNLLY</Stationcode>
    <Origin>Malahide</Origin>
    <Destination>Greystones</Destination>
    <Lastlocation />
    <Duein>12</Duein>
    <Late>0</Late>
    <Exparrival>10:37</Exparrival>
    <Expdepart>10:38</Expdepart>
    <Direction>Southbound</Direction>
    <Traintype>DART</Traintype>
  </objStationData>
  <objStationData>
    <Traincode>P661</Traincode>
    <Stationfullname>Connolly</Stationfullname>
    <Stationcode>CNLLY</Stationcode>
    <Origin>Dublin Connolly</Origin>
    <Destination>Maynooth</Destination>
    <Lastlocation />
    <Duein>8</Duein>
    <Late>0</Late>
    <Exparrival>10:33</Exparrival>
    <Expdepart>10:35</Expdepart>
    <Direction>To Maynooth</Direction>
    <Traintype>Train</Traintype>
  </objStationData>
</ArrayOfObjStationData>"#;

const EMPTY_STATION_DATA_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ArrayOfObjStationData xmlns="http://api.irishrail.ie/realtime/" />"#;

/// Serve `router` on an ephemeral local port, returning its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A well-behaved upstream.
///
/// "Connolly" gets three trains, `UNKNOWN_STATION` gets none, and any other
/// name gets one northbound DART whose `Stationfullname` echoes the query.
pub fn upstream() -> Router {
    Router::new()
        .route("/getAllStationsXML", get(|| async { STATIONS_XML }))
        .route("/getStationDataByNameXML", get(station_data))
}

async fn station_data(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let name = params.get("StationDesc").cloned().unwrap_or_default();
    match name.as_str() {
        "Connolly" => CONNOLLY_XML.to_string(),
        UNKNOWN_STATION => EMPTY_STATION_DATA_XML.to_string(),
        _ => echo_station_xml(&name),
    }
}

fn echo_station_xml(name: &str) -> String {
    let escaped = name
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        r#"<ArrayOfObjStationData xmlns="http://api.irishrail.ie/realtime/">
  <objStationData>
    <Stationfullname>{escaped}</Stationfullname>
    <Origin>Howth</Origin>
    <Destination>Bray</Destination>
    <Lastlocation />
    <Duein>3</Duein>
    <Exparrival>10:28</Exparrival>
    <Direction>Northbound</Direction>
    <Traintype>DART</Traintype>
  </objStationData>
</ArrayOfObjStationData>"#
    )
}
