//! Lifecycle statuses and their presentation mapping.
//!
//! Each reviewed entity carries a closed status enumeration. The mapping
//! from status to display metadata is a single exhaustive match per enum,
//! so adding a variant without a presentation fails to compile. The backend
//! owns transitions; clients only reflect them and gate actions locally.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-initiated actions a status can permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Accept,
    Refuse,
    Cancel,
    Edit,
    Delete,
    Download,
    ConfirmPayment,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Accept => "accept",
            Action::Refuse => "refuse",
            Action::Cancel => "cancel",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Download => "download",
            Action::ConfirmPayment => "confirm-payment",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
    Warning,
    Danger,
}

/// Display metadata for one status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub label: &'static str,
    pub tone: Tone,
    /// Terminal statuses permit no further edit/cancel/review transitions.
    pub terminal: bool,
    pub actions: &'static [Action],
}

/// A closed lifecycle enumeration with a total presentation mapping.
pub trait Lifecycle: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    fn presentation(self) -> Presentation;

    fn label(self) -> &'static str {
        self.presentation().label
    }

    fn is_terminal(self) -> bool {
        self.presentation().terminal
    }

    fn allows(self, action: Action) -> bool {
        self.presentation().actions.contains(&action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionStatus {
    Pending,
    Accepted,
    Refused,
    Unpaid,
    Paid,
}

impl ExhibitionStatus {
    pub const ALL: &'static [ExhibitionStatus] = &[
        ExhibitionStatus::Pending,
        ExhibitionStatus::Accepted,
        ExhibitionStatus::Refused,
        ExhibitionStatus::Unpaid,
        ExhibitionStatus::Paid,
    ];
}

impl Lifecycle for ExhibitionStatus {
    fn presentation(self) -> Presentation {
        match self {
            ExhibitionStatus::Pending => Presentation {
                label: "Pending review",
                tone: Tone::Warning,
                terminal: false,
                actions: &[Action::Accept, Action::Refuse, Action::Edit, Action::Cancel],
            },
            ExhibitionStatus::Accepted => Presentation {
                label: "Accepted",
                tone: Tone::Success,
                terminal: true,
                actions: &[Action::Download],
            },
            ExhibitionStatus::Refused => Presentation {
                label: "Refused",
                tone: Tone::Danger,
                terminal: true,
                actions: &[],
            },
            ExhibitionStatus::Unpaid => Presentation {
                label: "Awaiting payment",
                tone: Tone::Warning,
                terminal: true,
                actions: &[Action::ConfirmPayment],
            },
            ExhibitionStatus::Paid => Presentation {
                label: "Paid",
                tone: Tone::Success,
                terminal: true,
                actions: &[Action::Download],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitchDeckStatus {
    Pending,
    Accepted,
    Refused,
}

impl PitchDeckStatus {
    pub const ALL: &'static [PitchDeckStatus] = &[
        PitchDeckStatus::Pending,
        PitchDeckStatus::Accepted,
        PitchDeckStatus::Refused,
    ];
}

impl Lifecycle for PitchDeckStatus {
    fn presentation(self) -> Presentation {
        match self {
            PitchDeckStatus::Pending => Presentation {
                label: "Pending review",
                tone: Tone::Warning,
                terminal: false,
                actions: &[Action::Accept, Action::Refuse, Action::Download],
            },
            PitchDeckStatus::Accepted => Presentation {
                label: "Accepted",
                tone: Tone::Success,
                terminal: true,
                actions: &[Action::Download],
            },
            PitchDeckStatus::Refused => Presentation {
                label: "Refused",
                tone: Tone::Danger,
                terminal: true,
                actions: &[],
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisaStatus {
    Pending,
    Accepted,
    Refused,
    Cancelled,
}

impl VisaStatus {
    pub const ALL: &'static [VisaStatus] = &[
        VisaStatus::Pending,
        VisaStatus::Accepted,
        VisaStatus::Refused,
        VisaStatus::Cancelled,
    ];
}

impl Lifecycle for VisaStatus {
    fn presentation(self) -> Presentation {
        match self {
            VisaStatus::Pending => Presentation {
                label: "Pending review",
                tone: Tone::Warning,
                terminal: false,
                actions: &[Action::Accept, Action::Refuse, Action::Edit, Action::Cancel],
            },
            VisaStatus::Accepted => Presentation {
                label: "Accepted",
                tone: Tone::Success,
                terminal: true,
                actions: &[Action::Download],
            },
            VisaStatus::Refused => Presentation {
                label: "Refused",
                tone: Tone::Danger,
                terminal: true,
                actions: &[],
            },
            VisaStatus::Cancelled => Presentation {
                label: "Cancelled",
                tone: Tone::Neutral,
                terminal: true,
                actions: &[],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_total<S: Lifecycle>(all: &[S]) {
        for status in all {
            let p = status.presentation();
            assert!(!p.label.is_empty(), "{:?} has no label", status);
        }
    }

    #[test]
    fn test_every_status_has_a_presentation() {
        assert_total(ExhibitionStatus::ALL);
        assert_total(PitchDeckStatus::ALL);
        assert_total(VisaStatus::ALL);
    }

    #[test]
    fn test_terminal_statuses_gate_review_actions() {
        for status in [
            ExhibitionStatus::Accepted,
            ExhibitionStatus::Refused,
            ExhibitionStatus::Paid,
        ] {
            assert!(status.is_terminal());
            assert!(!status.allows(Action::Accept));
            assert!(!status.allows(Action::Refuse));
            assert!(!status.allows(Action::Edit));
            assert!(!status.allows(Action::Cancel));
        }

        assert!(VisaStatus::Cancelled.is_terminal());
        assert!(!VisaStatus::Cancelled.allows(Action::Edit));
    }

    #[test]
    fn test_pending_allows_review() {
        assert!(ExhibitionStatus::Pending.allows(Action::Accept));
        assert!(PitchDeckStatus::Pending.allows(Action::Refuse));
        assert!(VisaStatus::Pending.allows(Action::Cancel));
    }

    #[test]
    fn test_unpaid_only_allows_payment_confirmation() {
        let unpaid = ExhibitionStatus::Unpaid;
        assert!(unpaid.is_terminal());
        assert!(unpaid.allows(Action::ConfirmPayment));
        assert!(!unpaid.allows(Action::Accept));
    }

    #[test]
    fn test_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&VisaStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
        let status: ExhibitionStatus = serde_json::from_str("\"unpaid\"").unwrap();
        assert_eq!(status, ExhibitionStatus::Unpaid);
    }

    #[test]
    fn test_unknown_wire_status_is_a_decode_error() {
        let result: Result<VisaStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }
}
