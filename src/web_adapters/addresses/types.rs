use serde::{Deserialize, Serialize};
use use_cases::addresses::types::AddressVisible;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: &str, href: String) -> Self {
        Self {
            rel: rel.to_string(),
            href,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressResource {
    #[serde(flatten)]
    pub address: AddressVisible,
    pub links: Vec<Link>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressCollection {
    pub addresses: Vec<AddressResource>,
    pub links: Vec<Link>,
}

/// `{api}/users/{user_id}`
pub fn user_href(api_url: &str, user_id: &str) -> String {
    format!("{}/users/{}", api_url, user_id)
}

/// `{api}/users/{user_id}/addresses`
pub fn addresses_href(api_url: &str, user_id: &str) -> String {
    format!("{}/addresses", user_href(api_url, user_id))
}

/// `{api}/users/{user_id}/addresses/{address_id}`
pub fn address_href(api_url: &str, user_id: &str, address_id: &str) -> String {
    format!("{}/{}", addresses_href(api_url, user_id), address_id)
}
