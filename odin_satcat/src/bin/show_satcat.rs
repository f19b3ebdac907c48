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
use odin_satcat::{
    load_config, init_logging, summarize, select_satellites, SatCatConfig, SelectionCriteria, RangeFilter, JunkFilter,
    details::SatelliteDetails, ingest::ingest_configured, tle::SatkitParser,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = "load satellite catalog and show the satellites matching the given filters")]
pub struct Args {
    /// RON config file (built-in defaults if not set)
    #[arg(short,long)]
    pub config: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// "junk" or "not-junk"
    #[arg(long)]
    pub junk: Option<JunkFilter>,

    #[arg(long)]
    pub size: Option<String>,

    /// launch year range as MIN..MAX
    #[arg(long, value_parser = parse_int_range)]
    pub launch_year: Option<(i32,i32)>,

    /// orbital period range in minutes as MIN..MAX
    #[arg(long, value_parser = parse_range)]
    pub period: Option<(f64,f64)>,

    /// inclination range in degrees as MIN..MAX
    #[arg(long, value_parser = parse_range)]
    pub inclination: Option<(f64,f64)>,

    /// apogee range in km as MIN..MAX
    #[arg(long, value_parser = parse_range)]
    pub apogee: Option<(f64,f64)>,

    /// perigee range in km as MIN..MAX
    #[arg(long, value_parser = parse_range)]
    pub perigee: Option<(f64,f64)>,

    /// list selected satellites
    #[arg(short,long)]
    pub list: bool,

    /// show details of the satellite with this NORAD id
    #[arg(short,long)]
    pub details: Option<u32>,
}

fn parse_range (s: &str)->std::result::Result<(f64,f64),String> {
    let (a,b) = s.split_once("..").ok_or_else(|| format!("not a MIN..MAX range: {s}"))?;
    let min = a.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let max = b.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok( (min,max) )
}

fn parse_int_range (s: &str)->std::result::Result<(i32,i32),String> {
    let (a,b) = s.split_once("..").ok_or_else(|| format!("not a MIN..MAX range: {s}"))?;
    let min = a.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let max = b.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok( (min,max) )
}

/// ranges that cover the whole slider domain don't filter, same as in the UI
fn criteria_from_args (args: &Args, config: &SatCatConfig)->SelectionCriteria {
    let domains = &config.slider_domains;
    let range = |r: Option<(f64,f64)>, domain: [f64;2]| r.and_then(|(min,max)| RangeFilter::from_slider( [min,max], domain));

    SelectionCriteria {
        country: args.country.clone(),
        junk: args.junk,
        size: args.size.clone(),
        launch_year: args.launch_year.and_then(|(min,max)| RangeFilter::from_slider( [min,max], domains.launch_year)),
        period: range( args.period, domains.period),
        inclination: range( args.inclination, domains.inclination),
        apogee: range( args.apogee, domains.apogee),
        perigee: range( args.perigee, domains.perigee),
    }
}

#[tokio::main]
async fn main()->Result<()> {
    init_logging();
    let args = Args::parse();

    let config: SatCatConfig = match &args.config {
        Some(path) => load_config( path)?,
        None => SatCatConfig::default()
    };

    let (mut catalog, report) = ingest_configured( &config, &SatkitParser).await?;
    println!("{report:#?}");

    let criteria = criteria_from_args( &args, &config);
    select_satellites( &mut catalog, &criteria);
    println!("{}", summarize( &catalog));

    if args.list {
        for rec in catalog.selected() {
            let name = rec.metadata().map(|md| md.name.as_str()).unwrap_or("?");
            println!("{:6}  {}", rec.id(), name);
        }
    }

    if let Some(id) = args.details {
        match catalog.get(id).and_then( SatelliteDetails::new) {
            Some(details) => println!("{details:#?}"),
            None => println!("no details for satellite {id}")
        }
    }

    Ok(())
}
