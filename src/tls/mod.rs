//! TLS certificate inspection.
//!
//! This module performs a single handshake with the target and reads the leaf
//! certificate it presents:
//! - Issuer and subject (full DN, organization, common name)
//! - Validity period
//! - Subject Alternative Names
//! - Negotiated protocol version and cipher suite
//!
//! Verification is replaced by an accept-any verifier, so self-signed and
//! expired certificates are read like any other. Uses `tokio-rustls` for the
//! connection and `x509-parser` for certificate parsing.

mod extract;
mod types;
mod verifier;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::ClientConfig;
use tokio_rustls::TlsConnector;

use extract::{
    asn1_to_utc, extract_certificate_sans, first_common_name, first_organization, is_self_signed,
    is_wildcard,
};
use verifier::AcceptAnyCertVerifier;

pub use types::TlsCertificateInfo;

fn inspector_config() -> Result<ClientConfig> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .context("Failed to select TLS protocol versions")?
        .dangerous()
        .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
        .with_no_client_auth();
    Ok(config)
}

/// Retrieves certificate information from `host:port`.
///
/// `host` may be a hostname (sent as SNI) or an IP literal (no SNI is sent).
///
/// # Errors
///
/// Returns an error if:
/// - `host` is not a valid server name
/// - TCP connection fails or exceeds `tcp_timeout`
/// - TLS handshake fails or exceeds `tls_timeout`
/// - No certificate is presented, or it cannot be parsed
pub async fn inspect_certificate(
    host: &str,
    port: u16,
    tcp_timeout: Duration,
    tls_timeout: Duration,
) -> Result<TlsCertificateInfo> {
    log::debug!("Inspecting TLS certificate for {host}:{port}");

    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| anyhow!("Invalid server name {host}: {e}"))?;

    let sock = match tokio::time::timeout(tcp_timeout, TcpStream::connect((host, port))).await {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => return Err(anyhow!("Failed to connect to {host}:{port}: {e}")),
        Err(_) => {
            return Err(anyhow!(
                "TCP connection timeout for {host}:{port} ({tcp_timeout:?})"
            ))
        }
    };

    let connector = TlsConnector::from(Arc::new(inspector_config()?));
    let tls_stream = match tokio::time::timeout(tls_timeout, connector.connect(server_name, sock))
        .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => return Err(anyhow!("TLS handshake failed for {host}:{port}: {e}")),
        Err(_) => {
            return Err(anyhow!(
                "TLS handshake timeout for {host}:{port} ({tls_timeout:?})"
            ))
        }
    };

    let connection = tls_stream.get_ref().1;
    let protocol_version = connection
        .protocol_version()
        .map(|v| format!("{v:?}"))
        .unwrap_or_else(|| "Unknown".to_string());
    let cipher_suite = connection
        .negotiated_cipher_suite()
        .map(|cs| format!("{:?}", cs.suite()));

    let leaf = connection
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| anyhow!("{host}:{port} presented no certificate"))?;
    let (_, cert) = x509_parser::parse_x509_certificate(leaf.as_ref())
        .map_err(|e| anyhow!("Failed to parse certificate from {host}:{port}: {e}"))?;

    let issuer = cert.issuer().to_string();
    let subject = cert.subject().to_string();
    let subject_cn = first_common_name(cert.subject());
    let validity = cert.validity();

    let info = TlsCertificateInfo {
        protocol_version,
        cipher_suite,
        issuer_org: first_organization(cert.issuer()),
        self_signed: is_self_signed(&issuer, &subject),
        wildcard: is_wildcard(subject_cn.as_deref()),
        valid_from: asn1_to_utc(&validity.not_before)?,
        valid_to: asn1_to_utc(&validity.not_after)?,
        subject_alternative_names: extract_certificate_sans(&cert),
        issuer,
        subject,
        subject_cn,
    };

    log::debug!(
        "TLS certificate for {host}: subject={}, issuer={}, self_signed={}",
        info.subject,
        info.issuer,
        info.self_signed
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    /// Binds then releases a local port so nothing is listening on it.
    async fn closed_port() -> u16 {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    }

    #[test]
    fn test_inspector_config_builds() {
        assert!(inspector_config().is_ok());
    }

    #[tokio::test]
    async fn test_closed_port_fails_fast() {
        let port = closed_port().await;
        let start = Instant::now();

        let result = inspect_certificate(
            "127.0.0.1",
            port,
            Duration::from_secs(2),
            Duration::from_secs(2),
        )
        .await;

        assert!(result.is_err());
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_plain_http_server_fails_handshake() {
        let server = wiremock::MockServer::start().await;
        let port = server.address().port();

        let result = inspect_certificate(
            "127.0.0.1",
            port,
            Duration::from_secs(2),
            Duration::from_secs(2),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_server_name_is_error() {
        let result = inspect_certificate(
            "not a host",
            443,
            Duration::from_secs(1),
            Duration::from_secs(1),
        )
        .await;
        assert!(result.is_err());
    }

    /// Serves one TLS handshake with a freshly generated self-signed
    /// `*.test` certificate. Returns the listening port.
    async fn self_signed_tls_server() -> u16 {
        use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
        use tokio_rustls::TlsAcceptor;

        let mut params =
            rcgen::CertificateParams::new(vec!["*.test".to_string(), "127.0.0.1".to_string()])
                .unwrap();
        params.distinguished_name = rcgen::DistinguishedName::new();
        params
            .distinguished_name
            .push(rcgen::DnType::CommonName, "*.test");
        params
            .distinguished_name
            .push(rcgen::DnType::OrganizationName, "Recon Test Org");
        let key_pair = rcgen::KeyPair::generate().unwrap();
        let cert = params.self_signed(&key_pair).unwrap();
        let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));

        let provider = Arc::new(rustls::crypto::ring::default_provider());
        let server_config = rustls::ServerConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()
            .unwrap()
            .with_no_client_auth()
            .with_single_cert(vec![cert.der().clone()], key)
            .unwrap();
        let acceptor = TlsAcceptor::from(Arc::new(server_config));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            if let Ok((stream, _)) = listener.accept().await {
                let _ = acceptor.accept(stream).await;
            }
        });
        port
    }

    #[tokio::test]
    async fn test_reads_untrusted_self_signed_certificate() {
        let port = self_signed_tls_server().await;

        let info = inspect_certificate(
            "127.0.0.1",
            port,
            Duration::from_secs(2),
            Duration::from_secs(2),
        )
        .await
        .unwrap();

        assert!(info.self_signed);
        assert!(info.wildcard);
        assert_eq!(info.subject_cn.as_deref(), Some("*.test"));
        assert_eq!(info.issuer_org.as_deref(), Some("Recon Test Org"));
        assert!(info.valid_to > info.valid_from);
        assert!(info.cipher_suite.is_some());
        assert!(info
            .subject_alternative_names
            .iter()
            .any(|san| san == "*.test"));
        assert!(info
            .subject_alternative_names
            .iter()
            .any(|san| san == "127.0.0.1"));
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_inspect_live_certificate() {
        let info = inspect_certificate(
            "example.com",
            443,
            Duration::from_secs(5),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        assert!(!info.self_signed);
        assert!(info.valid_to > info.valid_from);
        assert!(info.subject_alternative_names.iter().any(|s| s.contains("example.com")));
    }
}
