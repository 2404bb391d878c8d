use rocket::{
    http::Status,
    request::{FromRequest, Outcome},
    Request,
};

use crate::error::Error;

/// The admin bearer secret as presented by the client, via
/// `Authorization: Bearer <token>`. Extracting the guard does not authorize
/// anything by itself; handlers compare it against the target survey's
/// token. Routes where the token is optional take `Option<BearerToken>`.
#[derive(Debug, Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BearerToken {
    type Error = Error;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let header = req.headers().get_one("Authorization");
        match header.and_then(|value| value.strip_prefix("Bearer ")) {
            Some(token) if !token.trim().is_empty() => {
                Outcome::Success(Self(token.trim().to_string()))
            }
            _ => Outcome::Failure((
                Status::Forbidden,
                Error::BadRequest("Missing bearer token".to_string()),
            )),
        }
    }
}
