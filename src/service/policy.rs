use crate::model::CustomerId;
use serde::{Deserialize, Serialize};

/// Whether order reads and finalization are restricted to the order's owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipPolicy {
    /// Customers may only read and finalize their own orders, with their own payment types.
    #[default]
    Enforced,
    /// Any customer may read or finalize any order.
    Unrestricted,
}

/// The resolved caller of a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requester {
    Customer(CustomerId),
    /// Administrators may read every order.
    Staff,
}

impl OwnershipPolicy {
    /// True when `requester` may see an order owned by `owner`.
    pub fn may_read(self, requester: Requester, owner: CustomerId) -> bool {
        match (self, requester) {
            (OwnershipPolicy::Unrestricted, _) | (_, Requester::Staff) => true,
            (OwnershipPolicy::Enforced, Requester::Customer(id)) => id == owner,
        }
    }

    /// True when `actor` may act on a record owned by `owner`.
    pub fn may_modify(self, actor: CustomerId, owner: CustomerId) -> bool {
        self == OwnershipPolicy::Unrestricted || actor == owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enforced_policy() {
        let policy = OwnershipPolicy::default();
        assert!(policy.may_read(Requester::Customer(CustomerId(1)), CustomerId(1)));
        assert!(!policy.may_read(Requester::Customer(CustomerId(2)), CustomerId(1)));
        assert!(policy.may_read(Requester::Staff, CustomerId(1)));
        assert!(!policy.may_modify(CustomerId(2), CustomerId(1)));
    }

    #[test]
    fn test_unrestricted_policy() {
        let policy = OwnershipPolicy::Unrestricted;
        assert!(policy.may_read(Requester::Customer(CustomerId(2)), CustomerId(1)));
        assert!(policy.may_modify(CustomerId(2), CustomerId(1)));
    }
}
