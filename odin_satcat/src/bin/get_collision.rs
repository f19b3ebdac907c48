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

use anyhow::Result;
use clap::Parser;
use odin_satcat::{load_config, init_logging, SatCatConfig, collision::{CollisionClient, CollisionOutcome}};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "query the collision probability service for a satellite")]
pub struct Args {
    /// RON config file (built-in defaults if not set)
    #[arg(short,long)]
    pub config: Option<String>,

    /// NORAD id of target satellite
    pub norad_id: u32,
}

#[tokio::main]
async fn main()->Result<()> {
    init_logging();
    let args = Args::parse();

    let config: SatCatConfig = match &args.config {
        Some(path) => load_config( path)?,
        None => SatCatConfig::default()
    };

    let client = CollisionClient::new( &config.collision_url, config.request_timeout)?;
    let outcome = client.outcome( args.norad_id).await;

    match &outcome {
        CollisionOutcome::Report(report) => {
            for (label,value) in report.rows() { println!("{label:>24}: {value}") }
        }
        CollisionOutcome::NoData => println!("{}", outcome.ui_message()),
        CollisionOutcome::Failed(e) => println!("{} ({e})", outcome.ui_message()),
    }

    Ok(())
}
