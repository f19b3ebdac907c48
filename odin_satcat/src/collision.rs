/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! client for the remote collision probability service
//!
//! This is best effort. Query failures are turned into UI messages and never affect catalog or selection state.

use std::time::Duration;
use reqwest::{Client, header::{HeaderMap, HeaderValue, CONTENT_TYPE}};
use serde::{Serialize, Deserialize, Deserializer};
use crate::{warn, errors::{op_failed, OdinSatCatError, Result}, source::http_client};

pub const FETCH_ERROR_MSG: &str = "Error fetching data";
pub const NO_DATA_MSG: &str = "No data";

#[derive(Debug,Serialize)]
struct CollisionRequest {
    target_norad_id: String,
}

/// the closest approach the service found for the target satellite
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CollisionData {
    pub collision_probability: f64,
    #[serde(deserialize_with="de_norad_id")]
    pub norad_id: u32, // the other satellite
    #[serde(rename="distance (km)")]
    pub distance_km: f64,
    #[serde(rename="relative_speed (km/s)")]
    pub relative_speed_km_s: f64,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug,Clone,Deserialize)]
pub struct CollisionResponse {
    pub status: String,
    #[serde(default)]
    pub target_norad_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub collision_data: Option<CollisionData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CollisionReport {
    pub target_norad_id: u32,
    pub timestamp: Option<String>,
    pub data: CollisionData,
}

impl CollisionReport {
    /// label/value rows for display
    pub fn rows (&self)->Vec<(&'static str, String)> {
        vec![
            ("Collision Probability", self.data.collision_probability.to_string()),
            ("NORAD ID", self.data.norad_id.to_string()),
            ("Distance (km)", format!("{:.2}", self.data.distance_km)),
            ("Relative Speed (km/s)", format!("{:.2}", self.data.relative_speed_km_s)),
            ("Latitude", format!("{:.2}", self.data.latitude)),
            ("Longitude", format!("{:.2}", self.data.longitude)),
            ("Timestamp", self.timestamp.clone().unwrap_or_default()),
        ]
    }
}

#[derive(Debug,Clone,PartialEq)]
pub enum CollisionOutcome {
    Report(CollisionReport),
    NoData,
    Failed(String),
}

impl CollisionOutcome {
    /// the text to show in the probability field
    pub fn ui_message (&self)->String {
        match self {
            CollisionOutcome::Report(report) => report.data.collision_probability.to_string(),
            CollisionOutcome::NoData => NO_DATA_MSG.to_string(),
            CollisionOutcome::Failed(_) => FETCH_ERROR_MSG.to_string(),
        }
    }
}

impl CollisionResponse {
    /// None if the service did not predict a collision
    pub fn into_report (self, target_norad_id: u32)->Option<CollisionReport> {
        match (self.status.as_str(), self.collision_data) {
            ("success", Some(data)) => Some( CollisionReport{ target_norad_id, timestamp: self.timestamp, data }),
            _ => None
        }
    }
}

pub struct CollisionClient {
    client: Client,
    url: String,
}

impl CollisionClient {
    pub fn new (url: impl ToString, timeout: Duration)->Result<Self> {
        Ok( CollisionClient{ client: http_client(timeout)?, url: url.to_string() } )
    }

    pub fn url (&self)->&str { &self.url }

    /// POST the query. Non-success HTTP status is an error, a valid response without collision data is `Ok(None)`
    pub async fn query (&self, norad_id: u32)->Result<Option<CollisionReport>> {
        let mut headers = HeaderMap::new();
        headers.insert( CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let request = CollisionRequest { target_norad_id: norad_id.to_string() };
        let response = self.client.post( &self.url)
            .headers( headers)
            .json( &request)
            .send().await?;

        match response.status() {
            status if status.is_success() => {
                let response: CollisionResponse = serde_json::from_str( &response.text().await?)?;
                Ok( response.into_report( norad_id))
            }
            other => {
                let body = response.text().await.unwrap_or_default();
                Err( op_failed!("collision query for {} failed with status {}: {}", norad_id, other, body))
            }
        }
    }

    /// query and fold errors into the outcome
    pub async fn outcome (&self, norad_id: u32)->CollisionOutcome {
        match self.query( norad_id).await {
            Ok(Some(report)) => CollisionOutcome::Report(report),
            Ok(None) => CollisionOutcome::NoData,
            Err(e) => {
                warn!("collision query failed: {e}");
                CollisionOutcome::Failed( e.to_string())
            }
        }
    }
}

/// the service reports ids as strings (as they come from its dataset) but we also accept numbers
fn de_norad_id<'a,D> (deserializer: D)->std::result::Result<u32,D::Error> where D: Deserializer<'a> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId { Num(u32), Text(String) }

    match RawId::deserialize(deserializer)? {
        RawId::Num(id) => Ok(id),
        RawId::Text(s) => s.trim().parse().map_err( serde::de::Error::custom),
    }
}
