use actix_web::{http, test, HttpMessage};
use entities::{sea_orm_active_enums::RoleEnum, user};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use use_cases::users::types::{UserUpdateRequest, UserVisible};

use crate::utils::{init_app, Connections};
use common::factory;

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    factory::user_role(user.id, RoleEnum::User)
        .insert(&db)
        .await?;

    let req_body = UserUpdateRequest {
        first_name: "new_first_name".to_string(),
        last_name: "new_last_name".to_string(),
    };

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", user.user_id))
        .set_json(req_body.clone())
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: UserVisible = test::read_body_json(resp).await;
    assert_eq!(res.first_name, req_body.first_name);
    assert_eq!(res.last_name, req_body.last_name);
    assert_eq!(res.user_id, user.user_id);
    assert_eq!(res.email, user.email);
    assert_eq!(res.roles, vec![RoleEnum::User]);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_eq!(user_in_db.first_name, req_body.first_name);
    assert_eq!(user_in_db.last_name, req_body.last_name);
    assert_eq!(user_in_db.user_id, user.user_id);
    assert_eq!(user_in_db.email, user.email);
    assert_eq!(user_in_db.password, user.password);
    assert_eq!(
        user_in_db.email_verification_status,
        user.email_verification_status
    );
    assert!(user_in_db.updated_at > user.updated_at);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_first_name_is_empty() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", user.user_id))
        .set_json(UserUpdateRequest {
            first_name: "".to_string(),
            last_name: "new_last_name".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert_eq!(user_in_db.last_name, user.last_name);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{}", user.user_id))
        .set_json(UserUpdateRequest {
            first_name: "new_first_name".to_string(),
            last_name: "new_last_name".to_string(),
        })
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn not_found_if_non_existent_user_id() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::put()
        .uri("/api/users/thisPublicIdDoesNotExist")
        .set_json(UserUpdateRequest {
            first_name: "new_first_name".to_string(),
            last_name: "new_last_name".to_string(),
        })
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
