// Shared test helpers

#![allow(dead_code)]

use fleet_report::models::ServerRecord;

pub fn server(location: &str, mode: &str, kind: &str, vms: &str) -> ServerRecord {
    ServerRecord {
        location: location.into(),
        mode: mode.into(),
        name: format!("{}-{}", location, mode.to_lowercase()),
        kind: kind.into(),
        vms: vms.into(),
    }
}

/// Input from the documented three-record scenario.
pub const SCENARIO_JSON: &str = r#"[
    {"location":"fra","mode":"AGENT_MODE_MAINTENANCE","type":"HW","vms":""},
    {"location":"fra","mode":"AGENT_MODE_NORMAL","vms":"1"},
    {"location":"ams","mode":"AGENT_MODE_FREEZE_ENV","vms":""}
]"#;

/// A mixed fleet touching every category across three locations.
pub fn mixed_fleet() -> Vec<ServerRecord> {
    vec![
        server("fra", "AGENT_MODE_NORMAL", "", "vm-1"),
        server("fra", "AGENT_MODE_NORMAL", "", ""),
        server("fra", "AGENT_MODE_MAINTENANCE", "HW", ""),
        server("fra", "AGENT_MODE_MAINTENANCE", "SW", "vm-2"),
        server("fra", "AGENT_MODE_MAINTENANCE", "HW", ""),
        server("ams", "AGENT_MODE_SETUP", "", "vm-3"),
        server("ams", "AGENT_MODE_FREEZE_ENV", "", ""),
        server("ams", "AGENT_MODE_FREEZE_ENV", "", "vm-4"),
        server("lon", "AGENT_MODE_NOT_READY", "", "vm-5"),
        server("lon", "AGENT_MODE_REBOOTING", "", ""),
        server("lon", "AGENT_MODE_MAINTENANCE", "NET", ""),
    ]
}
