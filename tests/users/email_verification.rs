use actix_web::{http, test};
use chrono::{Duration, Utc};
use common::auth::tokens::{issue_token_expiring_at, TokenPurpose};
use entities::user;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, Set};
use use_cases::users::types::{EmailRequest, OperationName, OperationStatus};

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

#[actix_web::test]
async fn resend_then_verify() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .email_verification_status(false)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/email-verification/resend")
        .set_json(EmailRequest {
            email: user.email.clone(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    let res: OperationStatus = test::read_body_json(res).await;
    assert_eq!(res, OperationStatus::success(OperationName::ResendEmailVerification));

    let token = user::Entity::find_by_id(user.id)
        .one(&db)
        .await?
        .unwrap()
        .email_verification_token
        .unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/email-verification?token={}", token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);
    let res: OperationStatus = test::read_body_json(res).await;
    assert_eq!(res, OperationStatus::success(OperationName::VerifyEmail));

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(user_in_db.email_verification_status);
    assert_eq!(user_in_db.email_verification_token, None);

    // The token is cleared, so it cannot be used twice.
    let req = test::TestRequest::get()
        .uri(&format!("/api/users/email-verification?token={}", token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn not_found_if_unknown_token() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/api/users/email-verification?token=v4.local.unknown")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_token_expired() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;
    let user = factory::user()
        .email_verification_status(false)
        .insert(&db)
        .await?;
    let token = issue_token_expiring_at(
        &user.user_id,
        TokenPurpose::EmailVerification,
        Utc::now() - Duration::minutes(1),
        &settings,
    )
    .unwrap();
    let mut active_user = user.clone().into_active_model();
    active_user.email_verification_token = Set(Some(token.clone()));
    active_user.update(&db).await?;

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/email-verification?token={}", token))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::BAD_REQUEST);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(!user_in_db.email_verification_status);

    Ok(())
}

#[actix_web::test]
async fn not_found_on_resend_if_already_verified() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/email-verification/resend")
        .set_json(EmailRequest {
            email: user.email.clone(),
        })
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
