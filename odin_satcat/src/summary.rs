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

use std::fmt;
use serde::{Serialize,Deserialize};
use crate::catalog::Catalog;

/// selected vs. total number of catalog records
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub struct SelectionSummary {
    pub selected: usize,
    pub total: usize,
}

impl SelectionSummary {
    pub fn of<S> (catalog: &Catalog<S>)->Self {
        SelectionSummary { selected: catalog.n_selected(), total: catalog.len() }
    }
}

impl fmt::Display for SelectionSummary {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        if self.selected == 0 {
            write!(f, "{} satellites loaded", self.total)
        } else {
            write!(f, "{} of {} satellites found", self.selected, self.total)
        }
    }
}

/// the counter text shown for the current selection state
pub fn summarize<S> (catalog: &Catalog<S>)->String {
    SelectionSummary::of(catalog).to_string()
}
