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

//! well known satellite constellations and orbit classes

use std::fmt;
use serde::{Serialize,Deserialize};

pub const LOW_ORBIT_KM: f64 = 2000.0;
pub const GEOSYNCHRONOUS_ORBIT_KM: f64 = 35786.0;
const GEOSYNCHRONOUS_BAND_KM: f64 = 500.0; // max deviation of apogee and perigee to count as geosynchronous

const GPS: &[u32] = &[
    20959, 22877, 23953, 24876, 25933, 26360, 26407, 26605, 26690, 27663,
    27704, 28129, 28190, 28361, 28474, 28874, 29486, 29601, 32260, 32384,
    32711, 35752, 36585, 37753, 38833, 39166, 39533, 39741, 40105, 40294,
    40534,
];
const GLONASS: &[u32] = &[
    28915, 29672, 29670, 29671, 32276, 32275, 32393, 32395, 36111, 36112,
    36113, 36400, 36402, 36401, 37139, 37138, 37137, 37829, 37869, 37867,
    37868, 39155, 39620, 40001,
];
const INMARSAT: &[u32] = &[
    20918, 21149, 21814, 21940, 23839, 24307, 24674, 24819, 25153, 28628,
    28899, 33278, 40384, 39476,
];
const LANDSAT: &[u32] = &[25682, 39084];
const DIGITALGLOBE: &[u32] = &[25919, 32060, 33331, 35946, 40115];
const SPACE_STATIONS: &[u32] = &[
    25544, // International Space Station
    41765, // Tiangong-2
];

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Constellation {
    Gps,
    Glonass,
    Inmarsat,
    Landsat,
    DigitalGlobe,
    SpaceStation,
}

impl Constellation {
    pub const ALL: [Constellation;6] = [
        Constellation::Gps, Constellation::Glonass, Constellation::Inmarsat,
        Constellation::Landsat, Constellation::DigitalGlobe, Constellation::SpaceStation
    ];

    pub fn members (&self)->&'static [u32] {
        match self {
            Constellation::Gps => GPS,
            Constellation::Glonass => GLONASS,
            Constellation::Inmarsat => INMARSAT,
            Constellation::Landsat => LANDSAT,
            Constellation::DigitalGlobe => DIGITALGLOBE,
            Constellation::SpaceStation => SPACE_STATIONS,
        }
    }

    pub fn contains (&self, norad_id: u32)->bool {
        self.members().contains(&norad_id)
    }

    pub fn of (norad_id: u32)->Option<Constellation> {
        Self::ALL.into_iter().find(|c| c.contains(norad_id))
    }

    pub fn label (&self)->&'static str {
        match self {
            Constellation::Gps => "GPS",
            Constellation::Glonass => "GLONASS",
            Constellation::Inmarsat => "Inmarsat",
            Constellation::Landsat => "Landsat",
            Constellation::DigitalGlobe => "DigitalGlobe",
            Constellation::SpaceStation => "Space Station",
        }
    }
}

impl fmt::Display for Constellation {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { f.write_str( self.label()) }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum OrbitClass {
    Low,
    Medium,
    Geosynchronous,
    High, // above geosynchronous or highly elliptical
}

impl OrbitClass {
    /// classify by apogee and perigee altitude (km)
    pub fn from_altitudes (apogee: f64, perigee: f64)->Self {
        if apogee <= LOW_ORBIT_KM {
            OrbitClass::Low
        } else if (apogee - GEOSYNCHRONOUS_ORBIT_KM).abs() <= GEOSYNCHRONOUS_BAND_KM
               && (perigee - GEOSYNCHRONOUS_ORBIT_KM).abs() <= GEOSYNCHRONOUS_BAND_KM {
            OrbitClass::Geosynchronous
        } else if apogee < GEOSYNCHRONOUS_ORBIT_KM {
            OrbitClass::Medium
        } else {
            OrbitClass::High
        }
    }

    pub fn label (&self)->&'static str {
        match self {
            OrbitClass::Low => "low earth orbit",
            OrbitClass::Medium => "medium earth orbit",
            OrbitClass::Geosynchronous => "geosynchronous orbit",
            OrbitClass::High => "high earth orbit",
        }
    }
}

impl fmt::Display for OrbitClass {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { f.write_str( self.label()) }
}
