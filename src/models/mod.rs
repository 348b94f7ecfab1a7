// Domain models: input records and the frequency tables built from them

mod frequency;
mod server;

pub use frequency::{FrequencyTable, NestedFrequencyTable};
pub use server::{AgentMode, ServerRecord};
