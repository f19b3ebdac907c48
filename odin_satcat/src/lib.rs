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

//! satellite catalog ingestion and multi-criteria selection.
//!
//! The catalog is built once from two independent text sources (two-line element sets and a
//! comma separated metadata catalog), joined by NORAD catalog number, and then only changes
//! through the selection engine (`selected` flags) and hover handling (`highlighted` flags).

use std::{path::Path, time::Duration};
use serde::{Serialize,Deserialize,de::DeserializeOwned};

pub mod errors;
use errors::Result;

pub mod tle;
pub mod metadata;
pub mod catalog;
pub mod selection;
pub mod summary;
pub mod constellation;
pub mod details;
pub mod source;
pub mod ingest;
pub mod collision;

pub use catalog::{Catalog, SatelliteRecord};
pub use metadata::{CatalogMetadata, MetadataMap};
pub use selection::{SelectionCriteria, RangeFilter, JunkFilter, select_satellites};
pub use summary::{summarize, SelectionSummary};

/* #region logging **********************************************************************/

// all logging of this crate goes through these so that we have a central place to replace them

#[macro_export]
macro_rules! debug {
    ( $( $id:ident = $e:expr ),* ) => { tracing::debug!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::debug!( $( $e ),* ) }
}

#[macro_export]
macro_rules! info {
    ( $( $id:ident = $e:expr ),* ) => { tracing::info!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::info!( $( $e ),* ) }
}

#[macro_export]
macro_rules! warn {
    ( $( $id:ident = $e:expr ),* ) => { tracing::warn!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::warn!( $( $e ),* ) }
}

#[macro_export]
macro_rules! error {
    ( $( $id:ident = $e:expr ),* ) => { tracing::error!( $( $id = $e ),* ) };
    ( $( $e: expr ),* ) => { tracing::error!( $( $e ),* ) }
}

/// initialize a fmt subscriber that gets its max level from RUST_LOG. Safe to call more than once
pub fn init_logging () {
    let _ = tracing_subscriber::fmt()
        .with_env_filter( tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/* #endregion logging */

/* #region config ***********************************************************************/

/// absolute [min,max] domains of the five range sliders. A slider that is set to its full
/// domain does not filter
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct SliderDomains {
    pub launch_year: [i32;2],
    pub period: [f64;2],       // minutes
    pub inclination: [f64;2],  // degrees
    pub apogee: [f64;2],       // km
    pub perigee: [f64;2],      // km
}

impl Default for SliderDomains {
    fn default()->Self {
        SliderDomains {
            launch_year: [1957, 2018],
            period: [0.0, 2000.0],
            inclination: [0.0, 180.0],
            apogee: [0.0, 50000.0],
            perigee: [0.0, 50000.0],
        }
    }
}

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct SatCatConfig {
    pub tle_source: source::SourceSpec,
    pub metadata_source: source::SourceSpec,
    pub collision_url: String,
    pub request_timeout: Duration,
    pub slider_domains: SliderDomains,
}

impl Default for SatCatConfig {
    fn default()->Self {
        SatCatConfig {
            tle_source: source::SourceSpec::File( "data/tle.20171129.txt".into()),
            metadata_source: source::SourceSpec::File( "data/oio.20171129.txt".into()),
            collision_url: "http://127.0.0.1:5000/satellite-collision-probability".to_string(),
            request_timeout: Duration::from_secs(30),
            slider_domains: SliderDomains::default(),
        }
    }
}

/// load a RON config file
pub fn load_config<T: DeserializeOwned> (path: impl AsRef<Path>)->Result<T> {
    let text = std::fs::read_to_string( path.as_ref())?;
    Ok( ron::from_str(&text)? )
}

/* #endregion config */
