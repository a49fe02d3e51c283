use actix_web::{http, test, HttpMessage};
use entities::sea_orm_active_enums::RoleEnum;
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::users::types::UserVisible;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let other_user = factory::user()
        .email_verification_status(false)
        .insert(&db)
        .await?;
    factory::user_role(other_user.id, RoleEnum::User)
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", other_user.user_id))
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let res: UserVisible = test::read_body_json(resp).await;
    assert_eq!(res.user_id, other_user.user_id);
    assert_eq!(res.email, other_user.email);
    assert_eq!(res.first_name, other_user.first_name);
    assert_eq!(res.last_name, other_user.last_name);
    assert!(!res.email_verification_status);
    assert_eq!(res.roles, vec![RoleEnum::User]);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_if_not_logged_in() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", user.user_id))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn not_found_if_non_existent_user_id() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri("/api/users/thisPublicIdDoesNotExist")
        .to_request();
    req.extensions_mut().insert(user.clone());

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
