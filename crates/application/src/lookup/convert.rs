use cinder_dns_domain::{Answer, DnsError};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, RData, Record};
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Awaits a pending answer and converts it to a typed result.
///
/// Enforces the uniform conversion contract: any response code other
/// than `NoError` becomes a [`DnsError::ResponseCode`] failure before the
/// records are ever read. A `NoError` answer without matching records is
/// a success — the scan simply yields an empty or absent value.
pub(crate) async fn converted<T, F>(
    pending: impl Future<Output = Result<Answer, DnsError>>,
    scan: F,
) -> Result<T, DnsError>
where
    F: FnOnce(&[Record]) -> T,
{
    let answer = pending.await?;
    if answer.response_code() != ResponseCode::NoError {
        return Err(DnsError::ResponseCode(answer.response_code()));
    }
    Ok(scan(answer.records()))
}

pub(crate) fn collect_ips(records: &[Record]) -> Vec<IpAddr> {
    records
        .iter()
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
            _ => None,
        })
        .collect()
}

pub(crate) fn first_ip(records: &[Record]) -> Option<IpAddr> {
    records.iter().find_map(|record| match record.data() {
        RData::A(a) => Some(IpAddr::V4(a.0)),
        RData::AAAA(aaaa) => Some(IpAddr::V6(aaaa.0)),
        _ => None,
    })
}

pub(crate) fn collect_ipv4(records: &[Record]) -> Vec<Ipv4Addr> {
    records
        .iter()
        .filter_map(|record| match record.data() {
            RData::A(a) => Some(a.0),
            _ => None,
        })
        .collect()
}

pub(crate) fn first_ipv4(records: &[Record]) -> Option<Ipv4Addr> {
    records.iter().find_map(|record| match record.data() {
        RData::A(a) => Some(a.0),
        _ => None,
    })
}

pub(crate) fn collect_ipv6(records: &[Record]) -> Vec<Ipv6Addr> {
    records
        .iter()
        .filter_map(|record| match record.data() {
            RData::AAAA(aaaa) => Some(aaaa.0),
            _ => None,
        })
        .collect()
}

pub(crate) fn first_ipv6(records: &[Record]) -> Option<Ipv6Addr> {
    records.iter().find_map(|record| match record.data() {
        RData::AAAA(aaaa) => Some(aaaa.0),
        _ => None,
    })
}

pub(crate) fn first_ptr_target(records: &[Record]) -> Option<Name> {
    records.iter().find_map(|record| match record.data() {
        RData::PTR(ptr) => Some(ptr.0.clone()),
        _ => None,
    })
}

/// One string per TXT record, character-string segments concatenated.
pub(crate) fn collect_txt(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| match record.data() {
            RData::TXT(txt) => Some(
                txt.txt_data()
                    .iter()
                    .map(|segment| String::from_utf8_lossy(segment))
                    .collect::<String>(),
            ),
            _ => None,
        })
        .collect()
}
