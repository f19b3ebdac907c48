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

//! the startup ingestion pipeline
//!
//! TLE and metadata sources are fetched and parsed concurrently. The catalog is only built and joined
//! after both have completed, so callers never see a partially joined catalog.

use serde::{Serialize,Deserialize};
use crate::{info, SatCatConfig,
    catalog::Catalog,
    errors::{OdinSatCatError, Result},
    metadata::{load_metadata, MetadataLoadResult},
    source::{http_client, TextSource},
    tle::{parse_tle_records, ElementSetParser, TleParseResult},
};

/// what happened during ingestion
#[derive(Debug,Clone,Default,PartialEq,Eq,Serialize,Deserialize)]
pub struct IngestReport {
    pub n_pairs: usize,        // complete TLE line pairs
    pub skipped_pairs: usize,  // unparseable TLE pairs
    pub duplicates: usize,     // TLE records dropped because of duplicate NORAD ids
    pub n_records: usize,      // satellites in the catalog
    pub n_metadata: usize,     // metadata entries
    pub rejected_metadata: usize, // malformed metadata lines
    pub n_joined: usize,       // satellites with metadata
}

/// fetch and parse both sources, then build and join the catalog. Fails if either source can't be fetched
pub async fn ingest<P> (tle_source: &dyn TextSource, metadata_source: &dyn TextSource, parser: &P)
        -> Result<(Catalog<P::State>, IngestReport)> where P: ElementSetParser
{
    let tle_task = async {
        let text = tle_source.fetch().await?;
        Ok::<TleParseResult<P::State>,OdinSatCatError>( parse_tle_records( &text, parser))
    };
    let metadata_task = async {
        let text = metadata_source.fetch().await?;
        Ok::<MetadataLoadResult,OdinSatCatError>( load_metadata( &text))
    };

    let (tles, metadata) = tokio::try_join!( tle_task, metadata_task)?;
    info!("parsed {} of {} TLE pairs from {}", tles.records.len(), tles.n_pairs, tle_source.name());
    info!("loaded {} metadata entries from {} ({} rejected lines)", metadata.entries.len(), metadata_source.name(), metadata.rejected);

    let n_pairs = tles.n_pairs;
    let skipped_pairs = tles.skipped;

    let mut catalog = Catalog::from_orbital_records( tles.records);
    let n_joined = catalog.join_metadata( &metadata.entries);

    let report = IngestReport {
        n_pairs,
        skipped_pairs,
        duplicates: catalog.duplicates(),
        n_records: catalog.len(),
        n_metadata: metadata.entries.len(),
        rejected_metadata: metadata.rejected,
        n_joined,
    };

    Ok( (catalog, report) )
}

/// ingest from the sources specified in the config
pub async fn ingest_configured<P> (config: &SatCatConfig, parser: &P) -> Result<(Catalog<P::State>, IngestReport)>
    where P: ElementSetParser
{
    let client = http_client( config.request_timeout)?;
    let tle_source = config.tle_source.to_source( &client);
    let metadata_source = config.metadata_source.to_source( &client);

    ingest( tle_source.as_ref(), metadata_source.as_ref(), parser).await
}
