//! Decoder of `universe.ini`.
//!
//! Walks the generic [`IniFile`] and builds the bases, systems and time
//! setting of the game universe. Nicknames are lower-cased on the way in
//! and every record is indexed by its nickname.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, error, trace, warn};

use crate::error::{LintError, Result};
use crate::inireader::{IniFile, Section};
use crate::keeper::{Keeper, Keyed};
use crate::path::FilePath;
use crate::source::LineSource;
use crate::value::Number;

pub const FILENAME: &str = "universe.ini";

pub const KEY_NICKNAME: &str = "nickname";
pub const KEY_STRIDNAME: &str = "strid_name";
pub const KEY_SYSTEM: &str = "system";
pub const KEY_FILE: &str = "file";

pub const KEY_BASE_TAG: &str = "[Base]";
pub const KEY_BASE_BGCS: &str = "BGCS_base_run_by";
pub const KEY_BASE_TERRAINS: [&str; 6] = [
    "terrain_tiny",
    "terrain_sml",
    "terrain_mdm",
    "terrain_lrg",
    "terrain_dyna_01",
    "terrain_dyna_02",
];

pub const KEY_SYSTEM_TAG: &str = "[system]";
pub const KEY_SYSTEM_MSG_ID_PREFIX: &str = "msg_id_prefix";
pub const KEY_SYSTEM_VISIT: &str = "visit";
pub const KEY_SYSTEM_IDS_INFO: &str = "ids_info";
pub const KEY_SYSTEM_NAVMAPSCALE: &str = "NavMapScale";
/// Keys that all write `System::visit`, in the order they are applied.
/// A later key overwrites what an earlier one set.
pub const KEY_SYSTEM_VISIT_ORDER: [&str; 3] = [KEY_SYSTEM_VISIT, KEY_STRIDNAME, KEY_SYSTEM_IDS_INFO];

pub const KEY_TIME_TAG: &str = "[Time]";
pub const KEY_TIME_SECONDS: &str = "seconds_per_day";

// ------------- Records -------------
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Base {
    pub nickname: String,
    pub system: String,
    pub strid_name: i64,
    pub file: FilePath,
    pub bgcs_base_run_by: Option<String>,
    /// Only the terrain slots present in the source.
    pub terrains: BTreeMap<String, String>,
}

impl Keyed for Base {
    fn key(&self) -> &str {
        &self.nickname
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct System {
    pub nickname: String,
    pub file: Option<FilePath>,
    pub msg_id_prefix: Option<String>,
    pub visit: i64,
    pub navmap_scale: Option<Number>,
}

impl Keyed for System {
    fn key(&self) -> &str {
        &self.nickname
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSetting {
    pub seconds_per_day: i64,
}

// ------------- UniverseConfig -------------
#[derive(Debug, Serialize)]
pub struct UniverseConfig {
    bases: Keeper<Base>,
    systems: Keeper<System>,
    time: TimeSetting,
}

impl UniverseConfig {
    /// Reads the lines of `source` and decodes them. The generic document is
    /// handed back as well for callers that look at comments or raw sections.
    pub fn read(source: &impl LineSource) -> Result<(UniverseConfig, IniFile)> {
        let document = IniFile::read(source)?;
        let config = Self::decode(&document)?;
        Ok((config, document))
    }

    pub fn decode(document: &IniFile) -> Result<UniverseConfig> {
        let time = decode_time(document)?;
        let mut config = UniverseConfig {
            bases: Keeper::new(),
            systems: Keeper::new(),
            time,
        };

        if !document.sections().contains_key(KEY_BASE_TAG) {
            trace!(file = document.name(), tag = KEY_BASE_TAG, "no sections to decode");
        }
        for section in document.lookup(KEY_BASE_TAG) {
            let base = decode_base(document.name(), section)?;
            config.add_base(base);
        }

        if !document.sections().contains_key(KEY_SYSTEM_TAG) {
            trace!(file = document.name(), tag = KEY_SYSTEM_TAG, "no sections to decode");
        }
        for section in document.lookup(KEY_SYSTEM_TAG) {
            let system = decode_system(document.name(), section)?;
            config.add_system(system);
        }

        debug!(
            file = document.name(),
            bases = config.bases.len(),
            systems = config.systems.len(),
            "decoded universe"
        );
        Ok(config)
    }

    pub fn add_base(&mut self, base: Base) -> &Base {
        if self.bases.contains_key(&base.nickname) {
            warn!(nickname = %base.nickname, "duplicate base nickname, the later one wins lookups");
        }
        self.bases.keep(base)
    }
    pub fn add_system(&mut self, system: System) -> &System {
        if self.systems.contains_key(&system.nickname) {
            warn!(nickname = %system.nickname, "duplicate system nickname, the later one wins lookups");
        }
        self.systems.keep(system)
    }
    pub fn bases(&self) -> &Keeper<Base> {
        &self.bases
    }
    pub fn base(&self, nickname: &str) -> Option<&Base> {
        self.bases.last(nickname)
    }
    pub fn systems(&self) -> &Keeper<System> {
        &self.systems
    }
    pub fn system(&self, nickname: &str) -> Option<&System> {
        self.systems.last(nickname)
    }
    pub fn time(&self) -> TimeSetting {
        self.time
    }
}

// ------------- Decoding -------------
fn decode_time(document: &IniFile) -> Result<TimeSetting> {
    let Some(section) = document.sections().first(KEY_TIME_TAG) else {
        error!(file = document.name(), "unable to find time in universe.ini");
        return Err(LintError::MissingSection {
            file: document.name().to_string(),
            tag: KEY_TIME_TAG.to_string(),
        });
    };
    let seconds_per_day = mandatory_int(section, KEY_TIME_SECONDS)?;
    Ok(TimeSetting { seconds_per_day })
}

fn decode_base(name: &str, section: &Section) -> Result<Base> {
    let nickname = nickname(name, section)?;
    let strid_name = mandatory_int(section, KEY_STRIDNAME).inspect_err(|_| {
        error!(%nickname, "failed to parse strid in universe.ini for base");
    })?;
    let system = mandatory(section, KEY_SYSTEM)?.to_lowercase();
    let file = FilePath::new(&mandatory(section, KEY_FILE)?);
    let bgcs_base_run_by = section.first_value(KEY_BASE_BGCS).map(ToString::to_string);

    let terrains = KEY_BASE_TERRAINS
        .iter()
        .filter_map(|&slot| section.first_value(slot).map(|terrain| (slot.to_string(), terrain.to_string())))
        .collect();

    Ok(Base {
        nickname,
        system,
        strid_name,
        file,
        bgcs_base_run_by,
        terrains,
    })
}

fn decode_system(name: &str, section: &Section) -> Result<System> {
    let mut system = System {
        nickname: nickname(name, section)?,
        ..System::default()
    };
    system.file = section.first_value(KEY_FILE).map(|v| FilePath::new(&v.to_string()));
    system.msg_id_prefix = section.first_value(KEY_SYSTEM_MSG_ID_PREFIX).map(|v| v.to_lower());

    // strid_name and ids_info write visit too, later keys overwrite earlier ones
    for key in KEY_SYSTEM_VISIT_ORDER {
        let Some(value) = section.first_value(key) else {
            continue;
        };
        match value.as_i64() {
            Some(visit) => system.visit = visit,
            None => debug!(nickname = %system.nickname, key, %value, "ignoring non-integer visit"),
        }
    }

    if let Some(value) = section.first_value(KEY_SYSTEM_NAVMAPSCALE) {
        system.navmap_scale = value.as_number();
        if system.navmap_scale.is_none() {
            debug!(nickname = %system.nickname, %value, "ignoring non-numeric NavMapScale");
        }
    }
    Ok(system)
}

fn nickname(name: &str, section: &Section) -> Result<String> {
    let raw = mandatory(section, KEY_NICKNAME)?;
    let lower = raw.to_lowercase();
    if lower != raw {
        warn!(nickname = %raw, file = name, "nickname is not in lower case. Autofixing");
    }
    Ok(lower)
}

fn mandatory(section: &Section, key: &str) -> Result<String> {
    section
        .first_value(key)
        .map(ToString::to_string)
        .ok_or_else(|| {
            error!(tag = section.tag(), key, "missing mandatory key");
            LintError::MissingKey {
                tag: section.tag().to_string(),
                key: key.to_string(),
            }
        })
}

fn mandatory_int(section: &Section, key: &str) -> Result<i64> {
    let value = section.first_value(key).ok_or_else(|| {
        error!(tag = section.tag(), key, "missing mandatory key");
        LintError::MissingKey {
            tag: section.tag().to_string(),
            key: key.to_string(),
        }
    })?;
    value.as_i64().ok_or_else(|| {
        error!(tag = section.tag(), key, %value, "unable to parse integer");
        LintError::InvalidNumber {
            tag: section.tag().to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }
    })
}
