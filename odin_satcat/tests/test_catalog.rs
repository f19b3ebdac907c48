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

mod common;
use common::*;

use std::sync::Arc;
use odin_satcat::{catalog::Catalog, metadata::load_metadata, tle::parse_tle_records};

#[test]
fn test_duplicate_tles () {
    let tle = [ tle_pair(25544), tle_pair(20959), tle_pair(25544).replace("51.6400", "99.9999")].concat();
    let catalog = Catalog::from_orbital_records( parse_tle_records( &tle, &StubParser).records);

    assert_eq!( catalog.len(), 2);
    assert_eq!( catalog.duplicates(), 1);
    assert!( catalog.get(25544).unwrap().orbital_state().contains("51.6400")); // first one wins
}

#[test]
fn test_join () {
    let catalog = sample_catalog();

    assert!( catalog.is_joined());
    assert_eq!( catalog.len(), 6);
    assert_eq!( catalog.n_with_metadata(), 5);
    assert_eq!( catalog.get(25544).unwrap().metadata().unwrap().name, "ISS (ZARYA)");
    assert!( catalog.get(50000).unwrap().metadata().is_none());

    for rec in catalog.iter() {
        assert!( !rec.is_selected());
        assert!( !rec.is_highlighted());
    }
}

#[test]
fn test_join_idempotence () {
    let tle = tle_text( &[25544, 41765, 50000]);
    let metadata = load_metadata( &[
        metadata_line( 25544, "ISS (ZARYA)", "ISS", 92.7, 51.6, 421.0, 408.0, "LARGE", "1998-11-20"),
        metadata_line( 41765, "TIANGONG 2", "PRC", 91.9, 42.8, 390.0, 385.0, "LARGE", "2016-09-15"),
        metadata_line( 99999, "NOT IN TLE", "US", 91.9, 42.8, 390.0, 385.0, "SMALL", "2016-09-15"),
    ].concat()).entries;

    let mut catalog = Catalog::from_orbital_records( parse_tle_records( &tle, &StubParser).records);
    assert_eq!( catalog.join_metadata( &metadata), 2);
    let first: Vec<Option<Arc<_>>> = catalog.iter().map(|r| r.metadata().cloned()).collect();

    assert_eq!( catalog.join_metadata( &metadata), 2);
    for (rec,md) in catalog.iter().zip( first.iter()) {
        match (rec.metadata(), md) {
            (Some(a), Some(b)) => assert!( Arc::ptr_eq( a, b)),
            (None, None) => {}
            _ => panic!("metadata of {} changed by second join", rec.id())
        }
    }

    // a later join can't attach metadata to records that didn't get any in the first one
    let other = load_metadata( &metadata_line( 50000, "LATE", "US", 91.9, 42.8, 390.0, 385.0, "SMALL", "2016-09-15")).entries;
    catalog.join_metadata( &other);
    assert!( catalog.get(50000).unwrap().metadata().is_none());
}

#[test]
fn test_highlight () {
    let mut catalog = sample_catalog();

    assert!( catalog.highlighted().is_none());
    assert!( catalog.highlight(25544));
    assert_eq!( catalog.highlighted().unwrap().id(), 25544);

    assert!( catalog.highlight(41765));
    assert_eq!( catalog.iter().filter(|r| r.is_highlighted()).count(), 1);
    assert_eq!( catalog.highlighted().unwrap().id(), 41765);

    assert!( !catalog.highlight(12345));
    assert!( catalog.highlighted().is_none());

    catalog.highlight(20959);
    catalog.clear_highlights();
    assert!( catalog.highlighted().is_none());
    assert_eq!( catalog.n_selected(), 0); // highlighting never selects
}
