//! Conversions from external infrastructure errors into domain errors.

use mountview_domain::MountviewError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MountviewError);

impl From<InfraError> for MountviewError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MountviewError> for InfraError {
    fn from(value: MountviewError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMountviewError {
    fn into_mountview(self) -> MountviewError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MountviewError */
/* -------------------------------------------------------------------------- */

impl IntoMountviewError for HttpError {
    fn into_mountview(self) -> MountviewError {
        if self.is_timeout() {
            return MountviewError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return MountviewError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return MountviewError::Upstream(format!("undecodable HTTP response: {self}"));
        }

        MountviewError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_mountview())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::Client;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn connection_refused_maps_to_network() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: MountviewError = InfraError::from(error).into();
        assert_eq!(mapped, MountviewError::Network("HTTP connection failure".into()));
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client
            .get(server.uri())
            .send()
            .await
            .unwrap()
            .json::<serde_json::Value>()
            .await
            .unwrap_err();

        let mapped: MountviewError = InfraError::from(error).into();
        assert!(matches!(mapped, MountviewError::Upstream(_)));
    }
}
