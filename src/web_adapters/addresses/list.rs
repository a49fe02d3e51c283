use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{address_adapter::AddressAdapter, user_adapter::UserAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::addresses::list::get_addresses;

use crate::{
    addresses::types::{
        address_href, addresses_href, user_href, AddressCollection, AddressResource, Link,
    },
    utils::{api_url, response_401, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: String,
}

#[tracing::instrument(name = "Listing a user's addresses", skip(db, user, settings))]
#[get("/{user_id}/addresses")]
pub async fn list_addresses_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    settings: Data<Settings>,
) -> HttpResponse {
    match user {
        Some(_) => {
            let user_id = path_param.into_inner().user_id;
            match get_addresses(
                user_id.clone(),
                UserAdapter::init(&db),
                AddressAdapter::init(&db),
            )
            .await
            {
                Ok(addresses) => {
                    let api_url = api_url(&settings);
                    HttpResponse::Ok().json(AddressCollection {
                        addresses: addresses
                            .into_iter()
                            .map(|address| AddressResource {
                                links: vec![Link::new(
                                    "self",
                                    address_href(&api_url, &user_id, &address.address_id),
                                )],
                                address,
                            })
                            .collect(),
                        links: vec![
                            Link::new("user", user_href(&api_url, &user_id)),
                            Link::new("self", addresses_href(&api_url, &user_id)),
                        ],
                    })
                }
                Err(e) => response_500(e),
            }
        }
        None => response_401(),
    }
}
