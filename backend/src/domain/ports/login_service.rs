//! Driving port for login.
//!
//! Inbound adapters call this port to turn credentials into the user id
//! stored in the session. Everything tenant-scoped downstream keys off that
//! id, so the port never returns a blank or padded identifier.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Username accepted by the fixture authenticators.
pub const FIXTURE_USERNAME: &str = "admin";
/// Password accepted by the fixture authenticators.
pub const FIXTURE_PASSWORD: &str = "password";
/// User id issued to the fixture login.
pub const FIXTURE_USER_ID: &str = "user-42";

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// In-memory authenticator for development and tests.
///
/// `admin` / `password` authenticates as [`FIXTURE_USER_ID`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

/// Shared check used by every fixture-backed authenticator.
pub(crate) fn authenticate_fixture(credentials: &LoginCredentials) -> Result<UserId, Error> {
    if credentials.username() != FIXTURE_USERNAME || credentials.password() != FIXTURE_PASSWORD {
        return Err(Error::unauthorized("invalid credentials"));
    }
    UserId::new(FIXTURE_USER_ID)
        .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))
}

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        authenticate_fixture(credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("admin", "password", true)]
    #[case("admin", "wrong", false)]
    #[case("cashier", "password", false)]
    #[tokio::test]
    async fn fixture_login_accepts_only_the_fixture_pair(
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let creds =
            LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        match (should_succeed, FixtureLoginService.authenticate(&creds).await) {
            (true, Ok(id)) => assert_eq!(id.as_ref(), FIXTURE_USER_ID),
            (false, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(id)) => panic!("expected failure, got success: {id}"),
        }
    }
}
