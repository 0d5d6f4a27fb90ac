use async_trait::async_trait;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

const UNKNOWN_CLIENT_IP: &str = "unknown";

/// Address of the client that made the request. Behind a proxy that is the first
/// `X-Forwarded-For` entry, otherwise the peer address of the connection.
pub struct ClientIp(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty());
        if let Some(forwarded) = forwarded {
            return Ok(ClientIp(forwarded.to_string()));
        }
        let client_ip = match parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            Some(ConnectInfo(address)) => address.ip().to_string(),
            None => String::from(UNKNOWN_CLIENT_IP),
        };
        Ok(ClientIp(client_ip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn client_ip_of(request: Request<()>) -> String {
        let (mut parts, _) = request.into_parts();
        match ClientIp::from_request_parts(&mut parts, &()).await {
            Ok(ClientIp(client_ip)) => client_ip,
            Err(never) => match never {},
        }
    }

    #[tokio::test]
    async fn first_forwarded_address_wins() {
        let request = Request::builder()
            .header("x-forwarded-for", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap();

        assert_eq!(client_ip_of(request).await, "203.0.113.7");
    }

    #[tokio::test]
    async fn falls_back_to_the_peer_address() {
        let mut request = Request::builder().body(()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([198, 51, 100, 4], 52100))));

        assert_eq!(client_ip_of(request).await, "198.51.100.4");
    }

    #[tokio::test]
    async fn unknown_without_header_or_peer() {
        let request = Request::builder().body(()).unwrap();

        assert_eq!(client_ip_of(request).await, "unknown");
    }
}
