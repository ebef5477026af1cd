use cors_gate::{Decision, DenyReason, Verdict};

pub fn assert_allowed(decision: &Decision) {
    assert!(
        matches!(decision.verdict, Verdict::Allowed),
        "expected allowed verdict, got {:?}",
        decision.verdict
    );
}

pub fn assert_denied(decision: &Decision, reason: DenyReason) {
    assert_eq!(
        decision.verdict,
        Verdict::Denied(reason),
        "expected denial with {:?}",
        reason
    );
}

pub fn assert_preflight_terminal(decision: &Decision) {
    assert!(
        decision.terminal,
        "preflight decisions must be terminal responses"
    );
}
