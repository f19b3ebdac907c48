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

//! parsing of two-line element (TLE) text into orbital records
//!
//! Each satellite is described by two consecutive lines. The catalog number is taken from the
//! fixed columns of the first line, the propagation state is created by an [`ElementSetParser`].
//! Pairs that can't be parsed are skipped (and counted), they never produce partial records.

use std::ops::Range;
use satkit::TLE;
use crate::{debug, errors::{tle_error, OdinSatCatError, Result}};

/// columns of the catalog number field in TLE line 1
pub const CATALOG_NUMBER_COLUMNS: Range<usize> = 2..7;

/// the orbit mechanics capability that turns a TLE line pair into something that can be propagated
pub trait ElementSetParser {
    type State;

    fn parse_element_set (&self, line1: &str, line2: &str) -> Result<Self::State>;
}

/// the production parser that creates satkit TLEs (which are SGP4 propagatable)
#[derive(Debug,Clone,Copy,Default)]
pub struct SatkitParser;

impl ElementSetParser for SatkitParser {
    type State = TLE;

    fn parse_element_set (&self, line1: &str, line2: &str) -> Result<TLE> {
        TLE::load_2line( line1, line2).map_err(|e| tle_error!("2 line Satkit TLE import failed {:?}", e))
    }
}

/// catalog number and propagation state of one successfully parsed TLE pair
#[derive(Debug,Clone)]
pub struct OrbitalRecord<S> {
    pub id: u32,
    pub state: S,
}

#[derive(Debug)]
pub struct TleParseResult<S> {
    pub records: Vec<OrbitalRecord<S>>,
    pub n_pairs: usize, // complete line pairs in the input
    pub skipped: usize, // pairs rejected by catalog number or element set parsing
}

/// extract the catalog (NORAD) number from the fixed columns of TLE line 1
pub fn parse_catalog_number (line1: &str) -> Result<u32> {
    let field = line1.get( CATALOG_NUMBER_COLUMNS)
        .ok_or_else(|| tle_error!("line too short for catalog number: {:?}", line1))?;

    field.trim().parse::<u32>().map_err(|_| tle_error!("invalid catalog number {:?}", field))
}

/// parse one line pair into an OrbitalRecord
pub fn parse_tle_pair<P: ElementSetParser> (line1: &str, line2: &str, parser: &P) -> Result<OrbitalRecord<P::State>> {
    let id = parse_catalog_number( line1)?;
    let state = parser.parse_element_set( line1, line2)?;
    Ok( OrbitalRecord{ id, state } )
}

/// parse newline separated TLE text. The number of candidate pairs is `floor(n_lines / 2)`, an incomplete
/// trailing pair is ignored. Result order follows input order but nothing downstream relies on it
pub fn parse_tle_records<P: ElementSetParser> (text: &str, parser: &P) -> TleParseResult<P::State> {
    let lines: Vec<&str> = text.split('\n').map(|l| l.trim_end_matches('\r')).collect();
    let n_pairs = lines.len() / 2;

    let mut records = Vec::with_capacity(n_pairs);
    let mut skipped = 0;

    for pair in lines.chunks_exact(2) {
        match parse_tle_pair( pair[0], pair[1], parser) {
            Ok(rec) => records.push(rec),
            Err(e) => {
                debug!("skipping TLE pair: {e}");
                skipped += 1;
            }
        }
    }

    TleParseResult { records, n_pairs, skipped }
}
