use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{address_adapter::AddressAdapter, user_adapter::UserAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{addresses::get::get_address, UseCaseError};

use crate::{
    addresses::types::{address_href, addresses_href, user_href, AddressResource, Link},
    utils::{api_url, response_401, response_404, response_500},
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: String,
    address_id: String,
}

#[tracing::instrument(name = "Getting a user's address", skip(db, user, settings))]
#[get("/{user_id}/addresses/{address_id}")]
pub async fn get_address_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
    settings: Data<Settings>,
) -> HttpResponse {
    match user {
        Some(_) => {
            let PathParam {
                user_id,
                address_id,
            } = path_param.into_inner();
            match get_address(
                user_id.clone(),
                address_id,
                UserAdapter::init(&db),
                AddressAdapter::init(&db),
            )
            .await
            {
                Ok(address) => {
                    let api_url = api_url(&settings);
                    HttpResponse::Ok().json(AddressResource {
                        links: vec![
                            Link::new("user", user_href(&api_url, &user_id)),
                            Link::new("addresses", addresses_href(&api_url, &user_id)),
                            Link::new(
                                "self",
                                address_href(&api_url, &user_id, &address.address_id),
                            ),
                        ],
                        address,
                    })
                }
                Err(e) => match &e {
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
