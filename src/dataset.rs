use crate::attributes::AttributeKey;
use crate::error::{ShadeError, ShadeResult};
use crate::scorer::types::CountyRecord;
use crate::stats::StatsSnapshot;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// On-disk shape. Attribute values may be null for counties the data
/// prep could not fill.
#[derive(Debug, Deserialize)]
struct RawCounty {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    attributes: BTreeMap<AttributeKey, Option<f64>>,
}

/// The loaded county collection, indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    counties: Vec<CountyRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ShadeResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading counties from: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> ShadeResult<Self> {
        let raw: Vec<RawCounty> = serde_json::from_reader(reader)?;
        let mut dropped = 0usize;

        let counties = raw
            .into_iter()
            .map(|r| {
                let attributes: BTreeMap<AttributeKey, f64> = r
                    .attributes
                    .into_iter()
                    .filter_map(|(k, v)| {
                        if v.is_none() {
                            dropped += 1;
                        }
                        v.map(|v| (k, v))
                    })
                    .collect();
                CountyRecord {
                    id: r.id.trim().to_string(),
                    name: r.name,
                    state: r.state,
                    attributes,
                }
            })
            .collect();

        if dropped > 0 {
            debug!("   Dropped {} null attribute values.", dropped);
        }

        Self::from_counties(counties)
    }

    pub fn from_counties(counties: Vec<CountyRecord>) -> ShadeResult<Self> {
        let mut index = HashMap::with_capacity(counties.len());
        for (i, c) in counties.iter().enumerate() {
            if c.id.is_empty() {
                return Err(ShadeError::Validation(format!(
                    "County at position {} has an empty id",
                    i
                )));
            }
            if index.insert(c.id.clone(), i).is_some() {
                return Err(ShadeError::Validation(format!(
                    "Duplicate county id '{}'",
                    c.id
                )));
            }
        }

        debug!("   -> Loaded {} counties.", counties.len());
        Ok(Self { counties, index })
    }

    pub fn counties(&self) -> &[CountyRecord] {
        &self.counties
    }

    pub fn find(&self, id: &str) -> Option<&CountyRecord> {
        self.index.get(id.trim()).map(|&i| &self.counties[i])
    }

    pub fn require(&self, id: &str) -> ShadeResult<&CountyRecord> {
        self.find(id)
            .ok_or_else(|| ShadeError::UnknownCounty(id.to_string()))
    }

    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot::collect(&self.counties)
    }

    pub fn len(&self) -> usize {
        self.counties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counties.is_empty()
    }
}
