use async_graphql::{SimpleObject, ID};
use database::User;

/// The user making the request, as seen by the client
#[derive(Debug, Default, SimpleObject)]
pub(crate) struct Viewer {
    /// The viewer's user ID
    id: Option<ID>,
    /// The viewer's session token
    token: Option<String>,
    /// The URL of the viewer's avatar
    avatar: Option<String>,
    /// Whether the viewer has connected a payment wallet
    has_wallet: Option<bool>,
    /// Whether the viewer was looked up, always true once the server has responded
    did_request: bool,
}

impl From<Option<User>> for Viewer {
    fn from(user: Option<User>) -> Self {
        match user {
            Some(user) => Viewer {
                has_wallet: Some(user.has_wallet()),
                id: Some(ID::from(user.id)),
                token: Some(user.token),
                avatar: Some(user.avatar),
                did_request: true,
            },
            None => Viewer {
                did_request: true,
                ..Default::default()
            },
        }
    }
}
