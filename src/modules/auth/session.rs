use crate::config::app_config;
use cookie::{time, Cookie, SameSite};
use http::HeaderValue;
use rand_chacha::ChaCha8Rng;
use rand_core::RngCore;

pub const SESSION_ID_COOKIE_NAME: &str = "sid";
pub const SESSION_DAYS_DURATION: i64 = 5;

/// a u128 that identifies a account session stored on the `session` database table
#[derive(Clone, Copy, Debug)]
pub struct SessionId(u128);

impl SessionId {
    /// Creates a random session token from a random number generator
    pub fn generate_new(rng: &mut ChaCha8Rng) -> Self {
        let mut u128_pool = [0u8; 16];

        rng.fill_bytes(&mut u128_pool);

        Self(u128::from_le_bytes(u128_pool))
    }

    /// Creates a session id from a database value created by `into_database_value`
    ///
    /// returns `None` on error
    pub fn from_database_value(bytes: Vec<u8>) -> Option<Self> {
        <[u8; 16]>::try_from(bytes.as_slice())
            .ok()
            .map(|b| SessionId(u128::from_le_bytes(b)))
    }

    /// Converts the session id into a vec of bytes to be stored as binary
    pub fn into_database_value(self) -> Vec<u8> {
        self.0.to_le_bytes().to_vec()
    }

    /// converts the token into a session cookie
    fn into_cookie<'a>(self) -> Cookie<'a> {
        let mut cookie = Cookie::new(SESSION_ID_COOKIE_NAME, self.0.to_string());

        cookie.set_path("/");
        cookie.set_secure(!app_config().is_development);
        cookie.set_same_site(SameSite::Strict);
        cookie.set_max_age(time::Duration::days(SESSION_DAYS_DURATION));

        cookie
    }

    /// converts the token into a session cookie and parses it into a header value to be sent as a "Set-Cookie" header
    ///
    /// reference: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Set-Cookie
    pub fn into_set_cookie_header(self) -> HeaderValue {
        // unwrap here since a cookie constructed from the cookie crate should always
        // be converted to a valid cookie string and therefore a valid header value
        self.into_cookie().to_string().parse::<HeaderValue>().unwrap()
    }
}

impl From<u128> for SessionId {
    fn from(v: u128) -> Self {
        SessionId(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;

    #[test]
    fn session_id_database_value_roundtrip() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let id = SessionId::generate_new(&mut rng);
        let restored = SessionId::from_database_value(id.into_database_value())
            .expect("16 byte value should convert back");

        assert_eq!(id.0, restored.0);
    }

    #[test]
    fn malformed_database_values_are_rejected() {
        assert!(SessionId::from_database_value(vec![1, 2, 3]).is_none());
    }
}
