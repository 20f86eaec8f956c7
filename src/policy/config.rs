use super::{Frequency, Lrfu, Lru, Tally, ValuePolicy};
use serde::{Deserialize, Serialize};

/// Stock policies that can be selected from a configuration.
///
/// The policy is read from the `policy.kind` field and, for
/// [`Lrfu`](../policy/struct.Lrfu.html), its decay from the
/// `policy.exponent` field:
/// ```toml
/// policy.kind = 'Lrfu'
/// policy.exponent = 2.0
/// ```
#[derive(Deserialize, Serialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "kind", content = "exponent")]
pub enum PolicyKind {
    Frequency,
    Lru,
    Lrfu(f32),
}

impl PolicyKind {
    /// Instantiate the selected policy behind a trait object.
    pub fn into_policy<K: 'static + Clone>(
        self,
    ) -> Box<dyn ValuePolicy<K, Tally<K>>> {
        match self {
            PolicyKind::Frequency => Box::new(Frequency::new()),
            PolicyKind::Lru => Box::new(Lru::new()),
            PolicyKind::Lrfu(exponent) => Box::new(Lrfu::new(exponent)),
        }
    }
}

/// Policies that have a [`PolicyKind`] counterpart.
pub trait IntoPolicyKind {
    fn as_kind(&self) -> PolicyKind;
}

impl IntoPolicyKind for Frequency {
    fn as_kind(&self) -> PolicyKind {
        PolicyKind::Frequency
    }
}

impl IntoPolicyKind for Lru {
    fn as_kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }
}

impl IntoPolicyKind for Lrfu {
    fn as_kind(&self) -> PolicyKind {
        PolicyKind::Lrfu(self.exponent())
    }
}

#[cfg(test)]
mod tests {
    use super::PolicyKind;
    use crate::policy::ValuePolicy;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        policy: PolicyKind,
    }

    #[test]
    fn test_policy_kind_from_toml() {
        let w: Wrapper = toml::from_str("policy.kind = 'Lru'").unwrap();
        assert_eq!(w.policy, PolicyKind::Lru);
        let w: Wrapper =
            toml::from_str("policy.kind = 'Lrfu'\npolicy.exponent = 0.5")
                .unwrap();
        assert_eq!(w.policy, PolicyKind::Lrfu(0.5));
        assert!(toml::from_str::<Wrapper>("policy.kind = 'Lfu'").is_err());
    }

    #[test]
    fn test_into_policy() {
        let mut p = PolicyKind::Frequency.into_policy::<u8>();
        let mut a = p.create(&0);
        let b = p.create(&1);
        p.increment(&mut a);
        assert!(p.is_greater(&a, &b));
    }
}
