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

//! the multi-criteria selection engine
//!
//! A [`SelectionCriteria`] snapshot holds one optional filter per dimension. A satellite is selected if
//! it has metadata and passes all present filters. If no filter is present at all *nothing* is selected,
//! i.e. the default (reset) state means "no explicit selection" and not "everything".

use std::{fmt, str::FromStr};
use chrono::Datelike;
use serde::{Serialize,Deserialize};
use crate::{debug, catalog::Catalog, metadata::CatalogMetadata, errors::{op_failed, OdinSatCatError, Result}};

/// name substrings that mark debris and rocket bodies
pub const JUNK_MARKERS: [&str;2] = [" DEB", " R/B"];

/// button group value that stands for "no filter"
pub const NO_FILTER: &str = "none";

pub fn is_junk (name: &str)->bool {
    JUNK_MARKERS.iter().any(|m| name.contains(m))
}

/// inclusive value range
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct RangeFilter<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> RangeFilter<T> {
    pub fn new (min: T, max: T)->Self { RangeFilter{ min, max } }

    pub fn contains (&self, v: T)->bool {
        v >= self.min && v <= self.max
    }

    /// a slider positioned at its full domain does not filter
    pub fn from_slider (value: [T;2], domain: [T;2])->Option<Self> {
        if value[0] == domain[0] && value[1] == domain[1] { None } else { Some( RangeFilter::new( value[0], value[1])) }
    }

    /// missing values never pass an active range filter
    fn accepts (&self, v: Option<T>)->bool {
        v.is_some_and(|v| self.contains(v))
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum JunkFilter {
    Junk,
    NotJunk,
}

impl JunkFilter {
    pub fn matches (&self, name: &str)->bool {
        match self {
            JunkFilter::Junk => is_junk(name),
            JunkFilter::NotJunk => !is_junk(name),
        }
    }
}

impl FromStr for JunkFilter {
    type Err = OdinSatCatError;

    fn from_str (s: &str)->Result<Self> {
        match s {
            "junk" => Ok(JunkFilter::Junk),
            "not-junk" => Ok(JunkFilter::NotJunk),
            other => Err( op_failed!("unknown junk filter value {:?}", other))
        }
    }
}

impl fmt::Display for JunkFilter {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            JunkFilter::Junk => write!(f, "junk"),
            JunkFilter::NotJunk => write!(f, "not-junk"),
        }
    }
}

/// the filter values at the time the selection engine runs. `Default` is the reset state (no filters)
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct SelectionCriteria {
    pub country: Option<String>,
    pub junk: Option<JunkFilter>,
    pub size: Option<String>,

    pub launch_year: Option<RangeFilter<i32>>,
    pub period: Option<RangeFilter<f64>>,
    pub inclination: Option<RangeFilter<f64>>,
    pub apogee: Option<RangeFilter<f64>>,
    pub perigee: Option<RangeFilter<f64>>,
}

impl SelectionCriteria {
    pub fn is_unfiltered (&self)->bool {
        self.country.is_none() && self.junk.is_none() && self.size.is_none()
            && self.launch_year.is_none() && self.period.is_none() && self.inclination.is_none()
            && self.apogee.is_none() && self.perigee.is_none()
    }

    /// conjunction of all present filters. This does not consider the "no filter selects nothing" rule
    pub fn matches (&self, md: &CatalogMetadata)->bool {
        if let Some(country) = &self.country { if md.country != *country { return false } }
        if let Some(junk) = &self.junk { if !junk.matches( &md.name) { return false } }
        if let Some(size) = &self.size { if md.size != *size { return false } }

        if let Some(r) = &self.launch_year { if !r.accepts( md.launch_date.map(|d| d.year())) { return false } }
        if let Some(r) = &self.period { if !r.accepts( md.period) { return false } }
        if let Some(r) = &self.inclination { if !r.accepts( md.inclination) { return false } }
        if let Some(r) = &self.apogee { if !r.accepts( md.apogee) { return false } }
        if let Some(r) = &self.perigee { if !r.accepts( md.perigee) { return false } }

        true
    }

    /// convert the UI widget state (with its "none" and full-domain sentinels) into criteria
    pub fn from_ui (ui: &FilterUiState)->Result<Self> {
        let junk = match button_value( &ui.junk) {
            Some(v) => Some( JunkFilter::from_str(v)?),
            None => None
        };

        Ok( SelectionCriteria {
            country: button_value( &ui.country).map(str::to_string),
            junk,
            size: button_value( &ui.size).map(str::to_string),
            launch_year: ui.launch_year.to_filter(),
            period: ui.period.to_filter(),
            inclination: ui.inclination.to_filter(),
            apogee: ui.apogee.to_filter(),
            perigee: ui.perigee.to_filter(),
        })
    }
}

fn button_value (v: &str)->Option<&str> {
    if v == NO_FILTER || v.is_empty() { None } else { Some(v) }
}

/* #region UI widget state ***********************************************************************/

/// current position and fixed absolute domain of a range slider
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct SliderState<T> {
    pub value: [T;2],
    pub domain: [T;2],
}

impl<T: PartialOrd + Copy> SliderState<T> {
    pub fn new (domain: [T;2])->Self { SliderState{ value: domain, domain } }

    pub fn set (&mut self, min: T, max: T) { self.value = [min,max] }

    pub fn reset (&mut self) { self.value = self.domain }

    pub fn to_filter (&self)->Option<RangeFilter<T>> {
        RangeFilter::from_slider( self.value, self.domain)
    }
}

/// the state of all filter widgets: the active value of each button group and the five range sliders
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct FilterUiState {
    pub country: String,
    pub junk: String,
    pub size: String,

    pub launch_year: SliderState<i32>,
    pub period: SliderState<f64>,
    pub inclination: SliderState<f64>,
    pub apogee: SliderState<f64>,
    pub perigee: SliderState<f64>,
}

impl FilterUiState {
    pub fn new (domains: &crate::SliderDomains)->Self {
        FilterUiState {
            country: NO_FILTER.to_string(),
            junk: NO_FILTER.to_string(),
            size: NO_FILTER.to_string(),
            launch_year: SliderState::new( domains.launch_year),
            period: SliderState::new( domains.period),
            inclination: SliderState::new( domains.inclination),
            apogee: SliderState::new( domains.apogee),
            perigee: SliderState::new( domains.perigee),
        }
    }

    /// set all button groups to "none" and all sliders to their domain
    pub fn reset (&mut self) {
        for b in [&mut self.country, &mut self.junk, &mut self.size] {
            *b = NO_FILTER.to_string();
        }
        self.launch_year.reset();
        for s in [&mut self.period, &mut self.inclination, &mut self.apogee, &mut self.perigee] {
            s.reset();
        }
    }
}

/* #endregion UI widget state */

/// re-evaluate the `selected` flag of every catalog record. Idempotent for a given criteria snapshot and
/// catalog. Returns the number of selected records
pub fn select_satellites<S> (catalog: &mut Catalog<S>, criteria: &SelectionCriteria) -> usize {
    let mut n_selected = 0;

    if criteria.is_unfiltered() {
        for rec in catalog.records_mut() { rec.set_selected(false) }

    } else {
        for rec in catalog.records_mut() {
            let selected = rec.metadata().is_some_and(|md| criteria.matches(md));
            rec.set_selected( selected);
            if selected { n_selected += 1 }
        }
    }

    debug!("selected {} of {} satellites", n_selected, catalog.len());
    n_selected
}
