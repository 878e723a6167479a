use crate::model::OrderStatus;

/// Which status changes an administrator may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may follow any other.
    #[default]
    Unconstrained,
    /// Only moves along the order lifecycle graph.
    Enforced,
}

impl TransitionPolicy {
    pub fn from_flag(enforce: bool) -> Self {
        if enforce {
            TransitionPolicy::Enforced
        } else {
            TransitionPolicy::Unconstrained
        }
    }

    pub fn permits(self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Unconstrained => true,
            TransitionPolicy::Enforced => from.can_transition_to(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_allows_reopening_delivered_orders() {
        let policy = TransitionPolicy::default();
        assert!(policy.permits(OrderStatus::Delivered, OrderStatus::Pending));
    }

    #[test]
    fn enforced_follows_graph() {
        let policy = TransitionPolicy::from_flag(true);

        assert!(policy.permits(OrderStatus::Pending, OrderStatus::Processing));
        assert!(policy.permits(OrderStatus::Shipped, OrderStatus::Shipped));
        assert!(!policy.permits(OrderStatus::Shipped, OrderStatus::Cancelled));
    }
}
