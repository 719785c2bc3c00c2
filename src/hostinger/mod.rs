pub mod dns_client;
pub mod pages;

pub use dns_client::{dns_zone_candidates, DnsClient};
