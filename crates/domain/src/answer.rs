use crate::query::Query;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;

/// TTL placed on records that have no real expiry, such as entries
/// synthesized from a hosts table. Caching resolvers must not retain
/// records carrying it.
pub const SYNTHETIC_TTL: u32 = 0;

/// The structured result of one DNS query.
///
/// Carries the echoed query, the response code and the answer records in
/// the order the producing resolver emitted them. Immutable once built;
/// safe to share across tasks.
///
/// The record list is meaningful only when the response code is
/// `NoError` — an empty list then means "name exists, no records of this
/// type". Under any other response code consumers must raise an error
/// instead of reading the records.
#[derive(Debug, Clone)]
pub struct Answer {
    query: Query,
    response_code: ResponseCode,
    records: Vec<Record>,
}

impl Answer {
    pub fn builder(query: Query) -> AnswerBuilder {
        AnswerBuilder {
            query,
            response_code: ResponseCode::NoError,
            records: Vec::new(),
        }
    }

    /// The query this answer responds to.
    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn response_code(&self) -> ResponseCode {
        self.response_code
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_no_error(&self) -> bool {
        self.response_code == ResponseCode::NoError
    }
}

/// Consuming builder for [`Answer`].
#[derive(Debug)]
pub struct AnswerBuilder {
    query: Query,
    response_code: ResponseCode,
    records: Vec<Record>,
}

impl AnswerBuilder {
    #[must_use]
    pub fn response_code(mut self, response_code: ResponseCode) -> Self {
        self.response_code = response_code;
        self
    }

    #[must_use]
    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    #[must_use]
    pub fn records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn build(self) -> Answer {
        Answer {
            query: self.query,
            response_code: self.response_code,
            records: self.records,
        }
    }
}
