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

use std::{fs, sync::{Arc, Mutex}, time::Duration};
use async_trait::async_trait;
use axum::{Router, routing::get};
use odin_satcat::{
    load_config, SatCatConfig,
    errors::{OdinSatCatError, Result},
    ingest::{ingest, ingest_configured, IngestReport},
    source::{FileSource, SourceSpec, StaticSource, TextSource, UrlSource, http_client},
};

/// completes after a delay and logs when it did
struct DelayedSource {
    source: StaticSource,
    delay: Duration,
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl TextSource for DelayedSource {
    fn name (&self)->String { self.source.name() }

    async fn fetch (&self)->Result<String> {
        tokio::time::sleep( self.delay).await;
        self.log.lock().unwrap().push( self.name());
        self.source.fetch().await
    }
}

fn tle_input ()->String {
    [ tle_text( &[25544, 20959, 41765]), "1 33442U\nX broken\n".to_string(), tle_pair(25544) ].concat()
}

fn metadata_input ()->String {
    [
        metadata_line( 25544, "ISS (ZARYA)", "ISS", 92.7, 51.6, 421.0, 408.0, "LARGE", "1998-11-20"),
        metadata_line( 41765, "TIANGONG 2", "PRC", 91.9, 42.8, 390.0, 385.0, "LARGE", "2016-09-15"),
        "garbage line\n".to_string(),
    ].concat()
}

fn expected_report ()->IngestReport {
    IngestReport {
        n_pairs: 5,
        skipped_pairs: 1,
        duplicates: 1,
        n_records: 3,
        n_metadata: 2,
        rejected_metadata: 1,
        n_joined: 2,
    }
}

async fn ingest_delayed (tle_delay: u64, metadata_delay: u64)->(Vec<String>, IngestReport) {
    let log = Arc::new( Mutex::new( Vec::new()));
    let tle_source = DelayedSource { source: StaticSource::new("tle", tle_input()), delay: Duration::from_millis(tle_delay), log: log.clone() };
    let md_source = DelayedSource { source: StaticSource::new("metadata", metadata_input()), delay: Duration::from_millis(metadata_delay), log: log.clone() };

    let (catalog, report) = ingest( &tle_source, &md_source, &StubParser).await.unwrap();
    assert!( catalog.is_joined());
    assert_eq!( catalog.get(41765).unwrap().metadata().unwrap().country, "PRC");
    assert!( catalog.get(20959).unwrap().metadata().is_none());

    let order = log.lock().unwrap().clone();
    (order, report)
}

#[tokio::test]
async fn test_completion_order () {
    let (order, report) = ingest_delayed( 50, 0).await;
    println!("completion order: {order:?}");
    assert_eq!( order, vec!["metadata", "tle"]);
    assert_eq!( report, expected_report());

    let (order, report) = ingest_delayed( 0, 50).await;
    println!("completion order: {order:?}");
    assert_eq!( order, vec!["tle", "metadata"]);
    assert_eq!( report, expected_report());
}

#[tokio::test]
async fn test_file_sources () {
    let dir = tempfile::tempdir().unwrap();
    let tle_path = dir.path().join("tle.txt");
    let md_path = dir.path().join("oio.txt");
    fs::write( &tle_path, tle_input()).unwrap();
    fs::write( &md_path, metadata_input()).unwrap();

    let (catalog, report) = ingest( &FileSource::new(&tle_path), &FileSource::new(&md_path), &StubParser).await.unwrap();
    assert_eq!( report, expected_report());
    assert_eq!( catalog.len(), 3);

    // a source that can't be read fails the whole ingestion
    let res = ingest( &FileSource::new(&tle_path), &FileSource::new( dir.path().join("missing.txt")), &StubParser).await;
    match res {
        Err(OdinSatCatError::SourceError{ source_name, .. }) => assert!( source_name.ends_with("missing.txt")),
        other => panic!("expected source error, got {:?}", other.map(|(_,r)| r))
    }
}

#[tokio::test]
async fn test_configured_ingest () {
    let dir = tempfile::tempdir().unwrap();
    let tle_path = dir.path().join("tle.txt");
    let md_path = dir.path().join("oio.txt");
    fs::write( &tle_path, tle_input()).unwrap();
    fs::write( &md_path, metadata_input()).unwrap();

    let config_path = dir.path().join("satcat.ron");
    fs::write( &config_path, format!(r#"(
        tle_source: File({:?}),
        metadata_source: File({:?}),
        collision_url: "http://127.0.0.1:5000/satellite-collision-probability",
        request_timeout: (secs: 5, nanos: 0),
        slider_domains: (
            launch_year: (1957, 2018),
            period: (0.0, 2000.0),
            inclination: (0.0, 180.0),
            apogee: (0.0, 50000.0),
            perigee: (0.0, 50000.0),
        ),
    )"#, tle_path, md_path)).unwrap();

    let config: SatCatConfig = load_config( &config_path).unwrap();
    assert_eq!( config.tle_source, SourceSpec::File( tle_path.clone()));
    assert_eq!( config.request_timeout, Duration::from_secs(5));

    let (_catalog, report) = ingest_configured( &config, &StubParser).await.unwrap();
    assert_eq!( report, expected_report());
}

#[tokio::test]
async fn test_url_sources () {
    let tle = tle_input();
    let metadata = metadata_input();
    let app = Router::new()
        .route("/tle.txt", get( move || async move { tle }))
        .route("/oio.txt", get( move || async move { metadata }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn( async move { axum::serve( listener, app).await.unwrap() });

    let client = http_client( Duration::from_secs(5)).unwrap();
    let tle_source = UrlSource::new( client.clone(), format!("http://{addr}/tle.txt"));
    let md_source = UrlSource::new( client.clone(), format!("http://{addr}/oio.txt"));

    let (_catalog, report) = ingest( &tle_source, &md_source, &StubParser).await.unwrap();
    assert_eq!( report, expected_report());

    let not_found = UrlSource::new( client, format!("http://{addr}/nothing.txt"));
    assert!( ingest( &tle_source, &not_found, &StubParser).await.is_err());
}
