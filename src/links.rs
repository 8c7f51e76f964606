//! External lookup sites for a solar system.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::world::SystemId;

/// Characters that cannot appear raw inside a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const KILLBOARD_BASE: &str = "https://zkillboard.com/system/";
const ANOMALY_WIKI_BASE: &str = "http://anoik.is/systems/";
const REGION_MAP_BASE: &str = "https://evemaps.dotlan.net/system/";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExternalLink {
    Killboard,
    AnomalyWiki,
    RegionMap,
}

impl ExternalLink {
    pub fn label(self) -> &'static str {
        match self {
            ExternalLink::Killboard => "zKB",
            ExternalLink::AnomalyWiki => "Anoikis",
            ExternalLink::RegionMap => "Dotlan",
        }
    }

    /// Builds the lookup URL, or `None` when the needed input is blank.
    pub fn url(self, id: &SystemId, name: &str) -> Option<String> {
        match self {
            ExternalLink::Killboard => killboard_url(id),
            ExternalLink::AnomalyWiki => anomaly_wiki_url(name),
            ExternalLink::RegionMap => region_map_url(name),
        }
    }
}

pub fn killboard_url(id: &SystemId) -> Option<String> {
    if id.is_blank() {
        return None;
    }
    Some(format!("{}{}", KILLBOARD_BASE, id.as_str()))
}

pub fn anomaly_wiki_url(name: &str) -> Option<String> {
    name_url(ANOMALY_WIKI_BASE, name)
}

pub fn region_map_url(name: &str) -> Option<String> {
    name_url(REGION_MAP_BASE, name)
}

fn name_url(base: &str, name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return None;
    }
    Some(format!("{}{}", base, utf8_percent_encode(name, PATH_SEGMENT)))
}
