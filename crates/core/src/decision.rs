use crate::identity::Identity;

/// A point-in-time membership fact for a single authorization attempt.
///
/// Deliberately not serializable: a decision is valid only for the
/// invocation that produced it and must never be persisted or reused for
/// a later request.
#[derive(Debug, Clone)]
pub struct MembershipDecision {
    /// The identity the decision is about.
    pub identity: Identity,
    /// The group the identity was checked against.
    pub group: String,
    /// Whether the directory reported the identity as a member.
    pub is_member: bool,
}

impl MembershipDecision {
    /// Record a membership answer for `identity` in `group`.
    pub fn new(identity: Identity, group: impl Into<String>, is_member: bool) -> Self {
        Self {
            identity,
            group: group.into(),
            is_member,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_carries_the_checked_pair() {
        let decision = MembershipDecision::new(Identity::new("alice"), "engineering", true);
        assert_eq!(decision.identity.handle, "alice");
        assert_eq!(decision.group, "engineering");
        assert!(decision.is_member);
    }
}
