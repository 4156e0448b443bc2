use serde::{Deserialize, Serialize};

/// Ticks spent counting down before the first inhale.
pub const COUNTDOWN_SECS: u32 = 5;

/// Length of one full Inhale -> Hold -> Exhale cycle.
pub const CYCLE_SECS: u32 = 4 + 7 + 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
}

impl Phase {
    /// Cycle order, starting from the phase every session opens with.
    pub const ALL: [Phase; 3] = [Phase::Inhale, Phase::Hold, Phase::Exhale];

    /// Fixed 4-7-8 duration in time-units.
    pub fn duration_secs(self) -> u32 {
        match self {
            Phase::Inhale => 4,
            Phase::Hold => 7,
            Phase::Exhale => 8,
        }
    }

    pub fn next(self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold,
            Phase::Hold => Phase::Exhale,
            Phase::Exhale => Phase::Inhale,
        }
    }

    /// Display name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "Inhale",
            Phase::Hold => "Hold",
            Phase::Exhale => "Exhale",
        }
    }

    /// Seconds of the cycle that precede this phase.
    pub fn cycle_offset_secs(self) -> u32 {
        Phase::ALL
            .iter()
            .take_while(|p| **p != self)
            .map(|p| p.duration_secs())
            .sum()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Serializable row of the phase table, used by `respiro phases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseInfo {
    pub phase: Phase,
    pub label: String,
    pub duration_secs: u32,
    pub next: Phase,
}

pub fn phase_table() -> Vec<PhaseInfo> {
    Phase::ALL
        .iter()
        .map(|&phase| PhaseInfo {
            phase,
            label: phase.label().into(),
            duration_secs: phase.duration_secs(),
            next: phase.next(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_four_seven_eight() {
        assert_eq!(Phase::Inhale.duration_secs(), 4);
        assert_eq!(Phase::Hold.duration_secs(), 7);
        assert_eq!(Phase::Exhale.duration_secs(), 8);
    }

    #[test]
    fn cycle_length_matches_durations() {
        let total: u32 = Phase::ALL.iter().map(|p| p.duration_secs()).sum();
        assert_eq!(total, CYCLE_SECS);
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(Phase::Inhale.next(), Phase::Hold);
        assert_eq!(Phase::Hold.next(), Phase::Exhale);
        assert_eq!(Phase::Exhale.next(), Phase::Inhale);
    }

    #[test]
    fn cycle_offsets() {
        assert_eq!(Phase::Inhale.cycle_offset_secs(), 0);
        assert_eq!(Phase::Hold.cycle_offset_secs(), 4);
        assert_eq!(Phase::Exhale.cycle_offset_secs(), 11);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Hold).unwrap(), "\"hold\"");
    }

    #[test]
    fn phase_table_lists_cycle_in_order() {
        let table = phase_table();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].phase, Phase::Inhale);
        assert_eq!(table[2].next, Phase::Inhale);
    }
}
