use std::fmt;
use std::str::FromStr;

use crate::llrb::LlrbSet;
use crate::splay::SplaySet;
use crate::top_down_splay::TopDownSplaySet;
use crate::types::OrderedSet;

/// Balancing algorithm behind an [`OrderedSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Left-leaning red-black tree.
    Llrb,
    /// Bottom-up splay tree with parent links.
    Splay,
    /// Top-down splay tree with a header node.
    TopDownSplay,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Llrb, Strategy::Splay, Strategy::TopDownSplay];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Llrb => "llrb",
            Strategy::Splay => "splay",
            Strategy::TopDownSplay => "top-down-splay",
        }
    }

    /// Empty set backed by this strategy.
    pub fn build(self) -> Box<dyn OrderedSet> {
        self.build_with_capacity(0)
    }

    /// Empty set whose arena has room for `capacity` nodes.
    pub fn build_with_capacity(self, capacity: usize) -> Box<dyn OrderedSet> {
        match self {
            Strategy::Llrb => Box::new(LlrbSet::with_capacity(capacity)),
            Strategy::Splay => Box::new(SplaySet::with_capacity(capacity)),
            Strategy::TopDownSplay => Box::new(TopDownSplaySet::with_capacity(capacity)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "llrb" | "red-black" => Ok(Strategy::Llrb),
            "splay" | "bottom-up-splay" => Ok(Strategy::Splay),
            "top-down-splay" | "td-splay" => Ok(Strategy::TopDownSplay),
            other => Err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
            assert_eq!(strategy.to_string(), strategy.name());
        }
        assert_eq!("td-splay".parse::<Strategy>(), Ok(Strategy::TopDownSplay));
        assert_eq!("avl".parse::<Strategy>(), Err("avl".to_string()));
    }

    #[test]
    fn build_tags_the_set() {
        for strategy in Strategy::ALL {
            let set = strategy.build();
            assert_eq!(set.strategy(), strategy);
            assert!(set.is_empty());
        }
    }
}
