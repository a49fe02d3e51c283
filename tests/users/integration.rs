use actix_web::{http, test};
use common::auth::tokens::{issue_token, TokenPurpose};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::users::types::{LoginRequest, LoginResponse, UserVisible};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn login_then_access_with_bearer_token() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .password(factory::HASHED_PASSWORD)
        .insert(&db)
        .await?;

    let login_req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(LoginRequest {
            email: user.email.to_string(),
            password: "password".to_string(),
        })
        .to_request();
    let res = test::call_service(&app, login_req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    let login: LoginResponse = test::read_body_json(res).await;

    let check_req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", login.user_id))
        .insert_header((
            http::header::AUTHORIZATION,
            format!("Bearer {}", login.token),
        ))
        .to_request();
    let res = test::call_service(&app, check_req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    let res: UserVisible = test::read_body_json(res).await;
    assert_eq!(res.user_id, user.user_id);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_with_invalid_bearer_token() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", user.user_id))
        .insert_header((http::header::AUTHORIZATION, "Bearer v4.local.forged"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_with_token_of_deleted_user() -> Result<(), DbErr> {
    let Connections { app, settings, .. } = init_app().await?;
    let token = issue_token(
        "thisPublicIdDoesNotExist",
        TokenPurpose::Access,
        &settings,
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header((http::header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}

#[actix_web::test]
async fn unauthorized_with_non_access_token() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;
    let user = factory::user().insert(&db).await?;
    let token = issue_token(
        &user.user_id,
        TokenPurpose::PasswordReset,
        &settings,
    )
    .unwrap();

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header((http::header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

    Ok(())
}
