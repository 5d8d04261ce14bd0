//! Conversions from external infrastructure errors into domain errors.

use deskhub_domain::DeskHubError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DeskHubError);

impl From<InfraError> for DeskHubError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DeskHubError> for InfraError {
    fn from(value: DeskHubError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoDeskHubError {
    fn into_deskhub(self) -> DeskHubError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DeskHubError */
/* -------------------------------------------------------------------------- */

impl IntoDeskHubError for HttpError {
    fn into_deskhub(self) -> DeskHubError {
        if self.is_timeout() {
            return DeskHubError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DeskHubError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => DeskHubError::Auth(message),
                404 => DeskHubError::NotFound(message),
                429 => DeskHubError::Network(message),
                400..=499 => DeskHubError::InvalidInput(message),
                _ => DeskHubError::Network(message),
            };
        }

        if self.is_decode() {
            return DeskHubError::Internal(format!("failed to decode HTTP body: {self}"));
        }

        DeskHubError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_deskhub())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → DeskHubError */
/* -------------------------------------------------------------------------- */

impl IntoDeskHubError for std::io::Error {
    fn into_deskhub(self) -> DeskHubError {
        match self.kind() {
            std::io::ErrorKind::NotFound => DeskHubError::NotFound("file not found".into()),
            std::io::ErrorKind::PermissionDenied => {
                DeskHubError::Internal("permission denied".into())
            }
            _ => DeskHubError::Internal(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_deskhub())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use tokio::runtime::Runtime;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[test]
    fn http_status_401_maps_to_auth_error() {
        Runtime::new().unwrap().block_on(async {
            let error = status_error(StatusCode::UNAUTHORIZED).await;
            let mapped: DeskHubError = InfraError::from(error).into();
            match mapped {
                DeskHubError::Auth(msg) => assert!(msg.contains("401")),
                other => panic!("expected auth error, got {:?}", other),
            }
        });
    }

    #[test]
    fn http_status_404_maps_to_not_found() {
        Runtime::new().unwrap().block_on(async {
            let error = status_error(StatusCode::NOT_FOUND).await;
            let mapped: DeskHubError = InfraError::from(error).into();
            match mapped {
                DeskHubError::NotFound(msg) => assert!(msg.contains("404")),
                other => panic!("expected not found, got {:?}", other),
            }
        });
    }

    #[test]
    fn http_status_503_maps_to_network_error() {
        Runtime::new().unwrap().block_on(async {
            let error = status_error(StatusCode::SERVICE_UNAVAILABLE).await;
            let mapped: DeskHubError = InfraError::from(error).into();
            match mapped {
                DeskHubError::Network(msg) => assert!(msg.contains("503")),
                other => panic!("expected network error, got {:?}", other),
            }
        });
    }

    #[test]
    fn io_not_found_maps_to_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let mapped: DeskHubError = InfraError::from(err).into();
        match mapped {
            DeskHubError::NotFound(_) => {}
            other => panic!("expected not found, got {:?}", other),
        }
    }
}
