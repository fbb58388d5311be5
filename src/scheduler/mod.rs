/*!
 * Scheduling Policies
 * Pluggable per-tick scheduling strategies behind a common contract
 */

use std::str::FromStr;

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Pid;
use crate::process::ProcessArrival;

mod entry;
mod feedback;
mod queue;
mod scoring;

pub use entry::{RunHistory, ScheduledProcess};
pub use feedback::{FeedbackScheduler, QuantumConfig, QuantumGrowth};
pub use queue::ReadyQueue;
pub use scoring::ScoringScheduler;

/// The two-operation contract every scheduling policy implements.
///
/// `admit` hands a newly-arrived process to the policy, which inserts it
/// into its entry queue. `tick` selects at most one process, advances it
/// by one unit of CPU time, and reports its pid; completion and
/// requeue/demotion decisions happen inside the call. The policy's
/// queues are exclusively its own; the driver only ever goes through
/// these two operations.
pub trait Policy {
    fn admit(&mut self, arrival: ProcessArrival);
    fn tick(&mut self) -> Option<Pid>;
    fn name(&self) -> &'static str;
}

/// Registry of selectable policies.
///
/// A fresh policy instance is built per simulation run, so multiple
/// runs and policies can coexist in one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    Fcfs,
    RoundRobin,
    FeedbackLinear,
    FeedbackQuadratic,
    Scoring,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 5] = [
        PolicyKind::Fcfs,
        PolicyKind::RoundRobin,
        PolicyKind::FeedbackLinear,
        PolicyKind::FeedbackQuadratic,
        PolicyKind::Scoring,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "fcfs",
            PolicyKind::RoundRobin => "round-robin",
            PolicyKind::FeedbackLinear => "mlfq-linear",
            PolicyKind::FeedbackQuadratic => "mlfq-quadratic",
            PolicyKind::Scoring => "scoring",
        }
    }

    /// Build a fresh policy instance for one simulation run
    pub fn build(self) -> Box<dyn Policy> {
        match self {
            PolicyKind::Fcfs => Box::new(FeedbackScheduler::fcfs()),
            PolicyKind::RoundRobin => Box::new(FeedbackScheduler::round_robin()),
            PolicyKind::FeedbackLinear => Box::new(FeedbackScheduler::mlfq_linear()),
            PolicyKind::FeedbackQuadratic => Box::new(FeedbackScheduler::mlfq_quadratic()),
            PolicyKind::Scoring => Box::new(ScoringScheduler::new()),
        }
    }
}

/// Error for policy names not present in the registry
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[error("Unknown scheduling policy: {0}")]
#[diagnostic(
    code(scheduler::unknown_policy),
    help("Use fcfs, round-robin, mlfq-linear, mlfq-quadratic, or scoring.")
)]
pub struct UnknownPolicy(pub String);

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fcfs" => Ok(PolicyKind::Fcfs),
            "rr" | "round-robin" => Ok(PolicyKind::RoundRobin),
            "mlfq-linear" => Ok(PolicyKind::FeedbackLinear),
            "mlfq-quadratic" => Ok(PolicyKind::FeedbackQuadratic),
            "scoring" => Ok(PolicyKind::Scoring),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_parses_every_name() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.name().parse::<PolicyKind>(), Ok(kind));
        }
        assert_eq!("rr".parse::<PolicyKind>(), Ok(PolicyKind::RoundRobin));
        assert!("sjf".parse::<PolicyKind>().is_err());
    }

    #[test]
    fn build_produces_matching_policy() {
        for kind in PolicyKind::ALL {
            assert_eq!(kind.build().name(), kind.name());
        }
    }
}
