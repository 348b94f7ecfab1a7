// Server status record as supplied on stdin

use serde::{Deserialize, Deserializer, Serialize};

/// Operating mode of a server agent. Anything not listed is `Other` and treated as non-normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentMode {
    Normal,
    Maintenance,
    Setup,
    NotReady,
    FreezeEnv,
    Other,
}

impl AgentMode {
    pub const NORMAL: &'static str = "AGENT_MODE_NORMAL";
    pub const MAINTENANCE: &'static str = "AGENT_MODE_MAINTENANCE";
    pub const SETUP: &'static str = "AGENT_MODE_SETUP";
    pub const NOT_READY: &'static str = "AGENT_MODE_NOT_READY";
    pub const FREEZE_ENV: &'static str = "AGENT_MODE_FREEZE_ENV";

    /// Exact, case-sensitive match on the wire value (e.g. "AGENT_MODE_SETUP").
    pub fn parse(s: &str) -> Self {
        match s {
            Self::NORMAL => AgentMode::Normal,
            Self::MAINTENANCE => AgentMode::Maintenance,
            Self::SETUP => AgentMode::Setup,
            Self::NOT_READY => AgentMode::NotReady,
            Self::FREEZE_ENV => AgentMode::FreezeEnv,
            _ => AgentMode::Other,
        }
    }
}

/// One fleet entity snapshot. Missing or null fields decode as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub mode: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub vms: String,
}

impl ServerRecord {
    pub fn agent_mode(&self) -> AgentMode {
        AgentMode::parse(&self.mode)
    }

    /// No virtual machines assigned.
    pub fn has_no_vms(&self) -> bool {
        self.vms.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
