mod deputy;
mod hotschedules;
mod sevenshifts;
mod whentowork;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::model::LogicalField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulingPlatform {
    SevenShifts,
    WhenToWork,
    Deputy,
    HotSchedules,
}

impl SchedulingPlatform {
    /// Declaration order is load-bearing: detection ties and mega-map alias
    /// precedence both resolve to the earliest platform listed here.
    pub const ALL: [SchedulingPlatform; 4] = [
        SchedulingPlatform::SevenShifts,
        SchedulingPlatform::WhenToWork,
        SchedulingPlatform::Deputy,
        SchedulingPlatform::HotSchedules,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SchedulingPlatform::SevenShifts => "7shifts",
            SchedulingPlatform::WhenToWork => "whentowork",
            SchedulingPlatform::Deputy => "deputy",
            SchedulingPlatform::HotSchedules => "hotschedules",
        }
    }

    /// Ordered alias vocabulary for one logical field; scheduled-export and
    /// worked-export spellings share the list.
    pub fn aliases(&self, field: LogicalField) -> &'static [&'static str] {
        match self {
            SchedulingPlatform::SevenShifts => sevenshifts::aliases(field),
            SchedulingPlatform::WhenToWork => whentowork::aliases(field),
            SchedulingPlatform::Deputy => deputy::aliases(field),
            SchedulingPlatform::HotSchedules => hotschedules::aliases(field),
        }
    }
}

impl TryFrom<&str> for SchedulingPlatform {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "7shifts" | "sevenshifts" => Ok(SchedulingPlatform::SevenShifts),
            "whentowork" | "w2w" => Ok(SchedulingPlatform::WhenToWork),
            "deputy" => Ok(SchedulingPlatform::Deputy),
            "hotschedules" => Ok(SchedulingPlatform::HotSchedules),
            other => Err(format!("unknown scheduling platform '{other}'")),
        }
    }
}

/// Union vocabulary used when no platform is named: the canonical column
/// name first, then every platform's aliases in declaration order,
/// deduplicated case-insensitively.
pub(crate) static MEGA_ALIASES: Lazy<BTreeMap<LogicalField, Vec<&'static str>>> =
    Lazy::new(|| {
        let mut map = BTreeMap::new();
        for field in LogicalField::ALL {
            let mut aliases: Vec<&'static str> = vec![field.canonical_name()];
            for platform in SchedulingPlatform::ALL {
                for &alias in platform.aliases(field) {
                    if !aliases.iter().any(|seen| seen.eq_ignore_ascii_case(alias)) {
                        aliases.push(alias);
                    }
                }
            }
            map.insert(field, aliases);
        }
        map
    });
