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

//! loading of the comma separated satellite metadata catalog
//!
//! Every line has 11 positional fields:
//! `international id, name, norad id, country, period, inclination, apogee, perigee, size, <unused>, launch date`.
//! Fields are split on plain commas, there is no quoting. Lines with the wrong field count or an
//! invalid NORAD id are rejected individually, the rest of the file is still used. Unparseable
//! numbers or dates are logged and stored as `None`, the entry itself is kept.

use std::{collections::HashMap, sync::Arc};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Serialize,Deserialize};
use crate::{warn, errors::{metadata_error, OdinSatCatError, Result}};

pub const METADATA_DELIMITER: u8 = b',';
pub const N_METADATA_FIELDS: usize = 11;

// field positions
const INT_ID: usize = 0;
const NAME: usize = 1;
const NORAD_ID: usize = 2;
const COUNTRY: usize = 3;
const PERIOD: usize = 4;
const INCLINATION: usize = 5;
const APOGEE: usize = 6;
const PERIGEE: usize = 7;
const SIZE: usize = 8;
const LAUNCH_DATE: usize = 10;

const DATE_FORMATS: [&str;3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// descriptive (non-orbital) attributes of a satellite.
/// Numeric and date fields are `None` if the source left them empty
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct CatalogMetadata {
    pub international_id: String,
    pub name: String,
    pub country: String,
    pub period: Option<f64>,      // minutes
    pub inclination: Option<f64>, // degrees
    pub apogee: Option<f64>,      // km
    pub perigee: Option<f64>,     // km
    pub size: String,
    pub launch_date: Option<NaiveDate>,
}

pub type MetadataMap = HashMap<u32, Arc<CatalogMetadata>>;

#[derive(Debug,Default)]
pub struct MetadataLoadResult {
    pub entries: MetadataMap,
    pub rejected: usize,   // malformed lines
    pub duplicates: usize, // lines for an already loaded NORAD id (first one is kept)
}

/// parse one catalog record into its NORAD id and metadata
pub fn parse_metadata_record (line: u64, rec: &StringRecord) -> Result<(u32, CatalogMetadata)> {
    if rec.len() != N_METADATA_FIELDS {
        return Err( metadata_error!( line, "expected {} fields, got {}", N_METADATA_FIELDS, rec.len()))
    }

    let norad_id = rec[NORAD_ID].parse::<u32>()
        .map_err(|_| metadata_error!( line, "invalid NORAD id {:?}", &rec[NORAD_ID]))?;

    let md = CatalogMetadata {
        international_id: rec[INT_ID].to_string(),
        name: rec[NAME].to_string(),
        country: rec[COUNTRY].to_string(),
        period: or_none( parse_optional_number( line, "period", &rec[PERIOD])),
        inclination: or_none( parse_optional_number( line, "inclination", &rec[INCLINATION])),
        apogee: or_none( parse_optional_number( line, "apogee", &rec[APOGEE])),
        perigee: or_none( parse_optional_number( line, "perigee", &rec[PERIGEE])),
        size: rec[SIZE].to_string(),
        launch_date: or_none( parse_optional_date( line, &rec[LAUNCH_DATE])),
    };

    Ok( (norad_id, md) )
}

/// parse the whole catalog text. Malformed lines are logged and counted but don't abort the load
pub fn load_metadata (text: &str) -> MetadataLoadResult {
    let mut result = MetadataLoadResult::default();

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .delimiter(METADATA_DELIMITER)
        .from_reader( text.as_bytes());

    for (i,res) in reader.records().enumerate() {
        let line = (i+1) as u64;
        let parsed = res.map_err(OdinSatCatError::from).and_then( |rec| {
            let line = rec.position().map(|p| p.line()).unwrap_or(line);
            if is_blank(&rec) { Ok(None) } else { parse_metadata_record( line, &rec).map(Some) }
        });

        match parsed {
            Ok(Some((norad_id, md))) => {
                if result.entries.contains_key(&norad_id) {
                    warn!("ignoring duplicate metadata for NORAD id {norad_id}");
                    result.duplicates += 1;
                } else {
                    result.entries.insert( norad_id, Arc::new(md));
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("rejected metadata line: {e}");
                result.rejected += 1;
            }
        }
    }

    result
}

fn is_blank (rec: &StringRecord) -> bool {
    rec.iter().all(|f| f.is_empty())
}

// a bad field value does not invalidate the rest of the entry
fn or_none<T> (res: Result<Option<T>>) -> Option<T> {
    res.unwrap_or_else( |e| {
        warn!("ignoring metadata field: {e}");
        None
    })
}

fn parse_optional_number (line: u64, field: &str, s: &str) -> Result<Option<f64>> {
    if s.is_empty() {
        Ok(None)
    } else {
        s.parse::<f64>().map(Some).map_err(|_| metadata_error!( line, "invalid {} {:?}", field, s))
    }
}

/// launch dates come as plain dates, optionally followed by a time we don't need
pub fn parse_optional_date (line: u64, s: &str) -> Result<Option<NaiveDate>> {
    if s.is_empty() { return Ok(None) }

    let date_part = s.split(['T',' ']).next().unwrap_or(s);
    DATE_FORMATS.iter()
        .find_map(|fmt| NaiveDate::parse_from_str( date_part, fmt).ok())
        .map(Some)
        .ok_or_else(|| metadata_error!( line, "invalid launch date {:?}", s))
}
