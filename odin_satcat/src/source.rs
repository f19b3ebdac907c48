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

//! text resources the catalog is ingested from

use std::{path::PathBuf, time::Duration};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize,Deserialize};
use crate::{debug, errors::{source_error, Result}};

/// something we can asynchronously obtain the full text of a data file from
#[async_trait]
pub trait TextSource: Send + Sync {
    /// used in log and error messages
    fn name (&self)->String;

    async fn fetch (&self)->Result<String>;
}

/// config level description of a source
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub enum SourceSpec {
    File(PathBuf),
    Url(String),
}

impl SourceSpec {
    pub fn to_source (&self, client: &Client)->Box<dyn TextSource> {
        match self {
            SourceSpec::File(path) => Box::new( FileSource::new( path.clone())),
            SourceSpec::Url(url) => Box::new( UrlSource::new( client.clone(), url.clone())),
        }
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new (path: impl Into<PathBuf>)->Self { FileSource{ path: path.into() } }
}

#[async_trait]
impl TextSource for FileSource {
    fn name (&self)->String { self.path.display().to_string() }

    async fn fetch (&self)->Result<String> {
        debug!("reading {:?}", self.path);
        tokio::fs::read_to_string( &self.path).await.map_err(|e| source_error( self.name(), e))
    }
}

pub struct UrlSource {
    client: Client,
    url: String,
}

impl UrlSource {
    pub fn new (client: Client, url: impl ToString)->Self { UrlSource{ client, url: url.to_string() } }
}

#[async_trait]
impl TextSource for UrlSource {
    fn name (&self)->String { self.url.clone() }

    async fn fetch (&self)->Result<String> {
        debug!("retrieving {}", self.url);
        let response = self.client.get( &self.url).send().await.map_err(|e| source_error( &self.url, e))?;

        if response.status().is_success() {
            response.text().await.map_err(|e| source_error( &self.url, e))
        } else {
            Err( source_error( &self.url, format!("response status {}", response.status())))
        }
    }
}

/// in-memory text, mostly for tests and embedded data
pub struct StaticSource {
    name: String,
    text: String,
}

impl StaticSource {
    pub fn new (name: impl ToString, text: impl ToString)->Self {
        StaticSource{ name: name.to_string(), text: text.to_string() }
    }
}

#[async_trait]
impl TextSource for StaticSource {
    fn name (&self)->String { self.name.clone() }

    async fn fetch (&self)->Result<String> { Ok( self.text.clone() ) }
}

pub fn http_client (timeout: Duration)->Result<Client> {
    Ok( Client::builder().timeout(timeout).build()? )
}
