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

//! the information panel projection of a single satellite

use num_format::{Locale, ToFormattedString};
use serde::{Serialize,Deserialize};
use crate::{catalog::SatelliteRecord, constellation::{Constellation, OrbitClass}};

pub const NASA_SATELLITE_DATABASE: &str = "https://nssdc.gsfc.nasa.gov/nmc/masterCatalog.do?sc="; // + international id
pub const N2YO_SATELLITE_DATABASE: &str = "https://www.n2yo.com/satellite/?s="; // + NORAD id

/// display ready satellite attributes. Values that are missing in the catalog show up as empty strings
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct SatelliteDetails {
    pub norad_id: u32,
    pub international_id: String,
    pub name: String,
    pub country: String,
    pub period: String,
    pub inclination: String,
    pub apogee: String,
    pub perigee: String,
    pub size: String,
    pub launch: String,
    pub orbit_class: Option<OrbitClass>,
    pub constellation: Option<Constellation>,
    pub nasa_link: String,
    pub n2yo_link: String,
}

impl SatelliteDetails {
    /// None if the record has no metadata
    pub fn new<S> (rec: &SatelliteRecord<S>)->Option<Self> {
        let md = rec.metadata()?;
        let norad_id = rec.id();

        let orbit_class = match (md.apogee, md.perigee) {
            (Some(apogee), Some(perigee)) => Some( OrbitClass::from_altitudes( apogee, perigee)),
            _ => None
        };

        Some( SatelliteDetails {
            norad_id,
            international_id: md.international_id.clone(),
            name: md.name.clone(),
            country: md.country.clone(),
            period: md.period.map( format_period).unwrap_or_default(),
            inclination: md.inclination.map(|i| format!("{i}°")).unwrap_or_default(),
            apogee: md.apogee.map( format_km).unwrap_or_default(),
            perigee: md.perigee.map( format_km).unwrap_or_default(),
            size: md.size.clone(),
            launch: md.launch_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default(),
            orbit_class,
            constellation: Constellation::of( norad_id),
            nasa_link: format!("{NASA_SATELLITE_DATABASE}{}", md.international_id),
            n2yo_link: format!("{N2YO_SATELLITE_DATABASE}{norad_id}"),
        })
    }
}

/// period given in minutes, shown as hours, minutes and seconds
pub fn format_period (minutes: f64)->String {
    format!("{} hours | {} min | {} sec",
        format_number( minutes / 60.0, 2), format_number( minutes, 2), format_number( minutes * 60.0, 2))
}

pub fn format_km (km: f64)->String {
    format!("{} km", format_number( km, 0))
}

/// fixed number of decimal places with thousands separators for the integer part
pub fn format_number (v: f64, places: usize)->String {
    if !v.is_finite() { return v.to_string() } // "NaN", "inf", "-inf"

    let s = format!("{:.*}", places, v.abs());
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i,f)) => (i, Some(f)),
        None => (s.as_str(), None)
    };

    let mut out = String::with_capacity( s.len() + 4);
    if v < 0.0 && s.bytes().any(|b| b.is_ascii_digit() && b != b'0') { out.push('-') }
    match int_part.parse::<u128>() {
        Ok(n) => out.push_str( &n.to_formatted_string( &Locale::en)),
        Err(_) => out.push_str( int_part) // beyond u128, shown ungrouped
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}
