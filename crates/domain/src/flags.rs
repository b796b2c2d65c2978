use std::fmt;

/// A query modifier understood by resolvers further down the chain.
///
/// Flags are opaque to the links that do not handle them: every resolver
/// forwards the full set unchanged when it delegates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolverFlag {
    /// Skip any caching resolver in the chain.
    BypassCache,
    /// Ask the transport resolver not to request recursion.
    NoRecursion,
}

impl ResolverFlag {
    fn bit(self) -> u8 {
        match self {
            ResolverFlag::BypassCache => 1 << 0,
            ResolverFlag::NoRecursion => 1 << 1,
        }
    }
}

/// A small copyable set of [`ResolverFlag`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ResolverFlags {
    bits: u8,
}

impl ResolverFlags {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub fn with(mut self, flag: ResolverFlag) -> Self {
        self.bits |= flag.bit();
        self
    }

    pub fn contains(self, flag: ResolverFlag) -> bool {
        self.bits & flag.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl FromIterator<ResolverFlag> for ResolverFlags {
    fn from_iter<I: IntoIterator<Item = ResolverFlag>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ResolverFlags::empty(), ResolverFlags::with)
    }
}

impl fmt::Debug for ResolverFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for flag in [ResolverFlag::BypassCache, ResolverFlag::NoRecursion] {
            if self.contains(flag) {
                set.entry(&flag);
            }
        }
        set.finish()
    }
}
