//! Points a registrar-managed apex domain at GitHub Pages.

use super::DnsClient;
use crate::{error::Result, models::DnsRecordSet};
use serde_json::Value;

pub const DEFAULT_DOMAIN: &str = "prosedocuserv.com";

/// What a run saw and, if it was allowed to, what it changed.
#[derive(Debug)]
pub struct PagesPlan {
    pub domains: Value,
    pub current_endpoint: String,
    pub current: Value,
    pub proposed: DnsRecordSet,
    pub applied: Option<Value>,
}

fn pretty(value: &impl serde::Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

/// Reads the current zone and prepares the GitHub Pages A records. The
/// update is only sent when `apply` is set.
pub async fn configure(client: &DnsClient, domain: &str, apply: bool) -> Result<PagesPlan> {
    let domains = client.list_domains().await?;
    log::info!("Domains: {}", pretty(&domains));

    let current = client.get_dns_records(domain).await?;
    log::info!("DNS records ({}): {}", current.candidate, pretty(&current.value));

    let proposed = DnsRecordSet::github_pages();
    log::info!("Prepared DNS records for GitHub Pages:\n{}", pretty(&proposed));

    let applied = if apply {
        let updated = client.update_dns_records(domain, &proposed).await?;
        log::info!("✅ DNS updated ({}): {}", updated.candidate, pretty(&updated.value));
        Some(updated.value)
    } else {
        log::warn!("⚠️  Dry run: DNS was not changed. Re-run with --apply to send the update.");
        None
    };

    Ok(PagesPlan {
        domains,
        current_endpoint: current.candidate,
        current: current.value,
        proposed,
        applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostingerConfig;
    use crate::error::BrandkitError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn registrar() -> MockServer {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/domains"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "domain": "example.com" }])),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/domains/example.com/dns"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "records": [] })))
            .mount(&server)
            .await;

        server
    }

    fn client_for(server: &MockServer) -> DnsClient {
        DnsClient::new(HostingerConfig::new("tok").with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_dry_run_never_writes() {
        let server = registrar().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let plan = configure(&client_for(&server), "example.com", false)
            .await
            .unwrap();

        assert_eq!(plan.current_endpoint, "/v1/domains/example.com/dns");
        assert_eq!(plan.proposed.records.len(), 4);
        assert!(plan.applied.is_none());
    }

    #[tokio::test]
    async fn test_apply_sends_update() {
        let server = registrar().await;
        Mock::given(method("PUT"))
            .and(path("/v1/domains/example.com/dns"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let plan = configure(&client_for(&server), "example.com", true)
            .await
            .unwrap();
        assert_eq!(plan.applied, Some(json!({ "ok": true })));
    }

    #[tokio::test]
    async fn test_domain_listing_failure_stops_the_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/domains"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
            .mount(&server)
            .await;

        let err = configure(&client_for(&server), "example.com", true)
            .await
            .unwrap_err();
        assert!(matches!(err, BrandkitError::HttpStatus { status: 401, .. }));
    }
}
