use crate::{
    config::HostingerConfig,
    error::{BrandkitError, Result},
    http,
    models::DnsRecordSet,
    probe::{probe_candidates, Probed},
};
use reqwest::{Client, Method};
use serde_json::Value;

/// Paths the registrar has used for a domain's DNS zone, most likely first.
pub fn dns_zone_candidates(domain: &str) -> Vec<String> {
    vec![
        format!("/v1/domains/{}/dns", domain),
        format!("/v1/domains/{}/dns/records", domain),
        format!("/v1/dns/{}", domain),
        format!("/v1/dns/{}/records", domain),
    ]
}

#[derive(Clone)]
pub struct DnsClient {
    client: Client,
    config: HostingerConfig,
}

impl DnsClient {
    pub fn new(config: HostingerConfig) -> Result<Self> {
        let client = http::build_client(config.timeout)?;
        Ok(Self { client, config })
    }

    async fn api_request(
        &self,
        method: Method,
        path: String,
        body: Option<&DnsRecordSet>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url, path);
        log::debug!("Registrar API request: {} {}", method, path);

        let mut request = self
            .client
            .request(method, &url)
            .bearer_auth(&self.config.api_token)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BrandkitError::Connection(format!("API request failed: {}", e)))?;

        http::read_json_or_empty(response).await
    }

    pub async fn list_domains(&self) -> Result<Value> {
        log::info!("Fetching domain list...");
        self.api_request(Method::GET, "/v1/domains".to_string(), None)
            .await
    }

    pub async fn get_dns_records(&self, domain: &str) -> Result<Probed<Value>> {
        log::info!("Fetching DNS records for {}...", domain);
        let probed = probe_candidates("DNS", &dns_zone_candidates(domain), |path| {
            self.api_request(Method::GET, path, None)
        })
        .await?;
        log::info!("DNS records found at {}", probed.candidate);
        Ok(probed)
    }

    pub async fn update_dns_records(
        &self,
        domain: &str,
        records: &DnsRecordSet,
    ) -> Result<Probed<Value>> {
        log::info!("Updating DNS records for {}...", domain);
        let probed = probe_candidates("DNS update", &dns_zone_candidates(domain), |path| {
            self.api_request(Method::PUT, path, Some(records))
        })
        .await?;
        log::info!("DNS updated via {}", probed.candidate);
        Ok(probed)
    }
}
