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

use std::{collections::HashMap, sync::Arc};
use crate::{debug, info, warn, tle::OrbitalRecord, metadata::{CatalogMetadata, MetadataMap}};

/// a satellite of the catalog: orbital state plus metadata and UI state.
/// `selected` is only written by the selection engine, `highlighted` only by hover handling
#[derive(Debug,Clone)]
pub struct SatelliteRecord<S> {
    id: u32,
    orbital_state: S,
    selected: bool,
    highlighted: bool,
    metadata: Option<Arc<CatalogMetadata>>,
}

impl<S> SatelliteRecord<S> {
    fn new (rec: OrbitalRecord<S>) -> Self {
        SatelliteRecord { id: rec.id, orbital_state: rec.state, selected: false, highlighted: false, metadata: None }
    }

    pub fn id (&self)->u32 { self.id }

    pub fn orbital_state (&self)->&S { &self.orbital_state }

    pub fn is_selected (&self)->bool { self.selected }

    pub fn is_highlighted (&self)->bool { self.highlighted }

    pub fn metadata (&self)->Option<&Arc<CatalogMetadata>> { self.metadata.as_ref() }

    pub(crate) fn set_selected (&mut self, selected: bool) { self.selected = selected }
}

/// the merged, in-memory satellite collection. The set of records is fixed once the catalog is built,
/// only selection and highlight flags change afterwards
#[derive(Debug)]
pub struct Catalog<S> {
    records: Vec<SatelliteRecord<S>>,
    index: HashMap<u32,usize>, // NORAD id -> records index
    duplicates: usize,
    joined: bool,
}

impl<S> Catalog<S> {

    /// build the catalog from parsed orbital records. If an id appears more than once the first
    /// record is kept and the later ones are dropped
    pub fn from_orbital_records (orbital_records: Vec<OrbitalRecord<S>>) -> Self {
        let mut records: Vec<SatelliteRecord<S>> = Vec::with_capacity( orbital_records.len());
        let mut index: HashMap<u32,usize> = HashMap::with_capacity( orbital_records.len());
        let mut duplicates = 0;

        for rec in orbital_records {
            if index.contains_key(&rec.id) {
                warn!("dropping duplicate TLE for NORAD id {}", rec.id);
                duplicates += 1;
            } else {
                index.insert( rec.id, records.len());
                records.push( SatelliteRecord::new(rec));
            }
        }

        Catalog { records, index, duplicates, joined: false }
    }

    /// attach metadata to all records by NORAD id. This only has an effect the first time it is called,
    /// records without a matching entry keep `None` for good. Returns the number of records with metadata
    pub fn join_metadata (&mut self, metadata: &MetadataMap) -> usize {
        if self.joined {
            debug!("catalog metadata already joined, ignoring");
        } else {
            for rec in &mut self.records {
                rec.metadata = metadata.get(&rec.id).cloned();
            }
            self.joined = true;
            info!("joined metadata for {} of {} satellites", self.n_with_metadata(), self.records.len());
        }

        self.n_with_metadata()
    }

    pub fn is_joined (&self)->bool { self.joined }

    pub fn len (&self)->usize { self.records.len() }

    pub fn is_empty (&self)->bool { self.records.is_empty() }

    /// number of input records dropped because of duplicate ids
    pub fn duplicates (&self)->usize { self.duplicates }

    pub fn get (&self, id: u32)->Option<&SatelliteRecord<S>> {
        self.index.get(&id).map(|i| &self.records[*i])
    }

    pub fn iter (&self)->impl Iterator<Item=&SatelliteRecord<S>> {
        self.records.iter()
    }

    pub fn records (&self)->&[SatelliteRecord<S>] {
        &self.records
    }

    pub(crate) fn records_mut (&mut self)->&mut [SatelliteRecord<S>] {
        &mut self.records
    }

    pub fn n_with_metadata (&self)->usize {
        self.records.iter().filter(|r| r.metadata.is_some()).count()
    }

    pub fn n_selected (&self)->usize {
        self.records.iter().filter(|r| r.selected).count()
    }

    pub fn selected (&self)->impl Iterator<Item=&SatelliteRecord<S>> {
        self.records.iter().filter(|r| r.selected)
    }

    //--- hover handling

    /// make `id` the only highlighted satellite. Returns false (and clears all highlights) if there is no such satellite
    pub fn highlight (&mut self, id: u32)->bool {
        self.clear_highlights();
        match self.index.get(&id) {
            Some(i) => { self.records[*i].highlighted = true; true }
            None => false
        }
    }

    pub fn clear_highlights (&mut self) {
        for rec in &mut self.records { rec.highlighted = false }
    }

    pub fn highlighted (&self)->Option<&SatelliteRecord<S>> {
        self.records.iter().find(|r| r.highlighted)
    }
}
