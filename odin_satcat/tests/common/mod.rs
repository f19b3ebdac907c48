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

#![allow(unused)]

use odin_satcat::{
    errors::{OdinSatCatError, Result},
    tle::{parse_tle_records, ElementSetParser},
    metadata::load_metadata,
    catalog::Catalog,
};

/// orbit mechanics stand-in that accepts every pair whose second line starts with "2 "
pub struct StubParser;

impl ElementSetParser for StubParser {
    type State = String;

    fn parse_element_set (&self, _line1: &str, line2: &str) -> Result<String> {
        if line2.starts_with("2 ") {
            Ok( line2.to_string())
        } else {
            Err( OdinSatCatError::TleError( format!("not a TLE line 2: {line2:?}")))
        }
    }
}

pub fn tle_pair (id: u32) -> String {
    format!("1 {id:05}U 98067A   17333.50000000  .00001000  00000-0  10000-4 0  9990\n2 {id:05}  51.6400 100.0000 0005000  90.0000 270.0000 15.50000000100000\n")
}

pub fn tle_text (ids: &[u32]) -> String {
    ids.iter().map(|id| tle_pair(*id)).collect()
}

pub fn metadata_line (id: u32, name: &str, country: &str, period: f64, inclination: f64, apogee: f64, perigee: f64, size: &str, launch: &str) -> String {
    format!("{}-001A,{name},{id},{country},{period},{inclination},{apogee},{perigee},{size},,{launch}\n", 2000 + id % 18)
}

pub fn catalog_of (tle: &str, metadata: &str) -> Catalog<String> {
    let mut catalog = Catalog::from_orbital_records( parse_tle_records( tle, &StubParser).records);
    catalog.join_metadata( &load_metadata( metadata).entries);
    catalog
}

/// a small mixed catalog. Satellite 50000 has no metadata
pub fn sample_catalog () -> Catalog<String> {
    let tle = tle_text( &[25544, 20959, 22675, 33442, 41765, 50000]);
    let metadata = [
        metadata_line( 25544, "ISS (ZARYA)", "ISS", 92.7, 51.6, 421.0, 408.0, "LARGE", "1998-11-20"),
        metadata_line( 20959, "NAVSTAR 22 (USA 66)", "US", 718.0, 55.2, 20470.0, 19900.0, "LARGE", "1990-11-26"),
        metadata_line( 22675, "COSMOS 2251 DEB", "CIS", 100.2, 74.0, 800.0, 770.0, "SMALL", "1993-06-16"),
        metadata_line( 33442, "SL-16 R/B", "CIS", 101.5, 71.0, 850.0, 830.0, "LARGE", "2009-01-23"),
        metadata_line( 41765, "TIANGONG 2", "PRC", 91.9, 42.8, 390.0, 385.0, "LARGE", "2016-09-15"),
    ].concat();

    catalog_of( &tle, &metadata)
}
