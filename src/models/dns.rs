use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

pub const GITHUB_PAGES_IPS: [Ipv4Addr; 4] = [
    Ipv4Addr::new(185, 199, 108, 153),
    Ipv4Addr::new(185, 199, 109, 153),
    Ipv4Addr::new(185, 199, 110, 153),
    Ipv4Addr::new(185, 199, 111, 153),
];

pub const APEX_RECORD_TTL: u32 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub value: String,
    pub ttl: u32,
}

impl DnsRecord {
    pub fn apex_a(ip: Ipv4Addr, ttl: u32) -> Self {
        DnsRecord {
            record_type: "A".to_string(),
            name: "@".to_string(),
            value: ip.to_string(),
            ttl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecordSet {
    pub records: Vec<DnsRecord>,
}

impl DnsRecordSet {
    /// Apex A records pointing the domain at GitHub Pages.
    pub fn github_pages() -> Self {
        DnsRecordSet {
            records: GITHUB_PAGES_IPS
                .iter()
                .map(|ip| DnsRecord::apex_a(*ip, APEX_RECORD_TTL))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_github_pages_record_set() {
        let body = serde_json::to_value(DnsRecordSet::github_pages()).unwrap();
        assert_eq!(
            body,
            json!({
                "records": [
                    { "type": "A", "name": "@", "value": "185.199.108.153", "ttl": 3600 },
                    { "type": "A", "name": "@", "value": "185.199.109.153", "ttl": 3600 },
                    { "type": "A", "name": "@", "value": "185.199.110.153", "ttl": 3600 },
                    { "type": "A", "name": "@", "value": "185.199.111.153", "ttl": 3600 }
                ]
            })
        );
    }
}
