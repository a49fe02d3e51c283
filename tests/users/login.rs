use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, DbErr};
use use_cases::users::types::{LoginRequest, LoginResponse};
use uuid::Uuid;

use crate::utils::{init_app, Connections};
use common::factory::{self, *};

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user()
        .password(factory::HASHED_PASSWORD)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(login_request(&user.email, "password"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let authorization = res
        .headers()
        .get(http::header::AUTHORIZATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let user_id_header = res
        .headers()
        .get("UserID")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let body: LoginResponse = test::read_body_json(res).await;
    assert_eq!(body.user_id, user.user_id);
    assert_eq!(user_id_header, user.user_id);
    assert_eq!(authorization, format!("Bearer {}", body.token));
    assert!(body.token.starts_with("v4.local."));

    Ok(())
}

#[actix_web::test]
async fn email_case_does_not_matter() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(login_request(&user.email.to_uppercase(), "password"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    let body: LoginResponse = test::read_body_json(res).await;
    assert_eq!(body.user_id, user.user_id);

    Ok(())
}

#[actix_web::test]
async fn block_too_many_attempts_on_incorrect_password() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;
    let user = factory::user()
        .password(factory::HASHED_PASSWORD)
        .insert(&db)
        .await?;

    for _ in 0..settings.application.max_login_attempts {
        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(login_request(&user.email, "passworda"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    }

    // Locked now, even with the correct password.
    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(login_request(&user.email, "password"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert!(body["error"].as_str().unwrap().contains("locked"));

    Ok(())
}

#[actix_web::test]
async fn successful_login_resets_attempt_count() -> Result<(), DbErr> {
    let Connections {
        app, db, settings, ..
    } = init_app().await?;
    let user = factory::user()
        .password(factory::HASHED_PASSWORD)
        .insert(&db)
        .await?;

    for password in ["passworda"]
        .repeat((settings.application.max_login_attempts - 1) as usize)
        .into_iter()
        .chain(["password"])
        .chain(["passworda"].repeat((settings.application.max_login_attempts - 1) as usize))
    {
        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(login_request(&user.email, password))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::post()
        .uri("/api/users/login")
        .set_json(login_request(&user.email, "password"))
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), http::StatusCode::OK);

    Ok(())
}

mod unauthorized {
    use super::*;

    #[actix_web::test]
    async fn incorrect_email() -> Result<(), DbErr> {
        let Connections { app, .. } = init_app().await?;

        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(login_request(
                &format!("{}@test.com", Uuid::now_v7()),
                "password",
            ))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[actix_web::test]
    async fn incorrect_password() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;
        let user = factory::user()
            .password(factory::HASHED_PASSWORD)
            .insert(&db)
            .await?;

        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(login_request(&user.email, "passworda"))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);
        assert!(res.headers().get(http::header::AUTHORIZATION).is_none());

        Ok(())
    }

    #[actix_web::test]
    async fn email_not_verified() -> Result<(), DbErr> {
        let Connections { app, db, .. } = init_app().await?;
        let user = factory::user()
            .password(factory::HASHED_PASSWORD)
            .email_verification_status(false)
            .insert(&db)
            .await?;

        let req = test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(login_request(&user.email, "password"))
            .to_request();

        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), http::StatusCode::UNAUTHORIZED);

        Ok(())
    }
}
