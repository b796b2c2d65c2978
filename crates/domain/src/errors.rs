use hickory_proto::op::ResponseCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnsError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid address for host {host}: {literal}")]
    InvalidHostAddress { host: String, literal: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Query failed with response code {0:?}")]
    ResponseCode(ResponseCode),
}

impl From<std::io::Error> for DnsError {
    fn from(error: std::io::Error) -> Self {
        DnsError::Io(error.to_string())
    }
}

impl DnsError {
    /// The response code carried by a protocol result error, if this is one.
    pub fn response_code(&self) -> Option<ResponseCode> {
        match self {
            DnsError::ResponseCode(code) => Some(*code),
            _ => None,
        }
    }
}
