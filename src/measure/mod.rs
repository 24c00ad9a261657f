//! Resource sampling: the collection loop, the counter-to-delta rules and
//! the per-session series buffer.
mod names;
mod rules;
mod sampler;
mod state;


pub use names::MetricName;
pub use rules::{
    BYTES_PER_MIB, DEFAULT_CPU_EXCLUDED_MODES, DEFAULT_LOOPBACK_DEVICES, Derivation, LabelExclusion,
    Rule, RuleSet, cumulative_total,
};
pub use sampler::{DEFAULT_SAMPLE_INTERVAL, Sampler, SamplerSettings, SessionOutcome};
pub use state::Session;
