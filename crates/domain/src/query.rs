use crate::flags::ResolverFlags;
use hickory_proto::rr::{DNSClass, Name, RecordType};

/// One DNS question as it travels down the resolver chain.
///
/// Resolvers that delegate must pass the query on unchanged, flags
/// included.
#[derive(Debug, Clone)]
pub struct Query {
    pub name: Name,
    pub class: DNSClass,
    pub record_type: RecordType,
    pub flags: ResolverFlags,
}

impl Query {
    /// Internet-class query with no flags, the common case.
    pub fn new(name: Name, record_type: RecordType) -> Self {
        Self::with_class(name, DNSClass::IN, record_type)
    }

    pub fn with_class(name: Name, class: DNSClass, record_type: RecordType) -> Self {
        Self {
            name,
            class,
            record_type,
            flags: ResolverFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ResolverFlags) -> Self {
        self.flags = flags;
        self
    }
}
