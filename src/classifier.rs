// Per-record category predicates. Pure: one record in, a set of flags out.

use crate::models::{AgentMode, ServerRecord};

/// Categories a single record belongs to. Any subset may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Categories {
    pub non_normal: bool,
    pub maintenance: bool,
    pub non_income: bool,
    pub freeze_env_empty: bool,
}

pub fn classify(record: &ServerRecord) -> Categories {
    let mode = record.agent_mode();
    Categories {
        non_normal: is_non_normal(mode),
        maintenance: is_maintenance(mode),
        non_income: is_non_income(mode, record.has_no_vms()),
        freeze_env_empty: is_freeze_env_empty(mode, record.has_no_vms()),
    }
}

pub fn is_non_normal(mode: AgentMode) -> bool {
    mode != AgentMode::Normal
}

pub fn is_maintenance(mode: AgentMode) -> bool {
    mode == AgentMode::Maintenance
}

/// Idle non-normal servers, plus the modes that never carry income regardless of VMs.
/// The two clauses overlap for an empty maintenance server; keep both.
pub fn is_non_income(mode: AgentMode, no_vms: bool) -> bool {
    (no_vms && mode != AgentMode::Normal)
        || matches!(
            mode,
            AgentMode::Maintenance | AgentMode::Setup | AgentMode::NotReady
        )
}

pub fn is_freeze_env_empty(mode: AgentMode, no_vms: bool) -> bool {
    mode == AgentMode::FreezeEnv && no_vms
}
