use actix_web::{http, test};
use common::{
    auth::{
        password::verify_password,
        tokens::{verify_token, TokenPurpose},
    },
    settings::types::{EmailSettings, Settings},
};
use db_adapters::user_adapter::UserAdapter;
use entities::{address, sea_orm_active_enums::*, user, user_role};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use use_cases::{
    addresses::types::AddressCreateRequest,
    users::{
        create::create_user,
        types::{UserCreateRequest, UserVisible},
    },
};

use crate::utils::{init_app, Connections};
use common::factory;

fn create_request(email: &str) -> UserCreateRequest {
    UserCreateRequest {
        first_name: "Lynx".to_string(),
        last_name: "Levin".to_string(),
        email: email.to_string(),
        password: "secret password".to_string(),
        addresses: vec![],
    }
}

fn unique_email() -> String {
    format!("{}@test.com", uuid::Uuid::now_v7())
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let email = unique_email();
    let req_body = UserCreateRequest {
        addresses: vec![AddressCreateRequest {
            street_name: "1-2-3 Shibuya".to_string(),
            city: "Tokyo".to_string(),
            country: "Japan".to_string(),
            postal_code: "150-0002".to_string(),
            r#type: AddressType::Billing,
        }],
        ..create_request(&email)
    };

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(req_body.clone())
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: UserVisible = test::read_body_json(resp).await;
    assert_eq!(res.user_id.len(), 30);
    assert_eq!(res.email, email);
    assert_eq!(res.first_name, req_body.first_name);
    assert_eq!(res.last_name, req_body.last_name);
    assert_eq!(res.roles, vec![RoleEnum::User]);
    // Mail delivery is disabled in testing, so accounts are created verified.
    assert!(res.email_verification_status);

    let user_in_db = user::Entity::find()
        .filter(user::Column::UserId.eq(res.user_id.clone()))
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(user_in_db.email, email);
    assert_ne!(user_in_db.password, req_body.password);
    assert!(verify_password(&user_in_db.password, req_body.password.as_bytes()).is_ok());
    assert!(verify_password(&user_in_db.password, b"another password").is_err());

    let roles_in_db = user_role::Entity::find()
        .filter(user_role::Column::UserId.eq(user_in_db.id))
        .all(&db)
        .await?;
    assert_eq!(roles_in_db.len(), 1);
    assert_eq!(roles_in_db[0].role, RoleEnum::User);

    let addresses_in_db = address::Entity::find()
        .filter(address::Column::UserId.eq(user_in_db.id))
        .all(&db)
        .await?;
    assert_eq!(addresses_in_db.len(), 1);
    assert_eq!(addresses_in_db[0].address_id.len(), 30);
    assert_eq!(addresses_in_db[0].city, "Tokyo");
    assert_eq!(addresses_in_db[0].r#type, AddressType::Billing);

    Ok(())
}

#[actix_web::test]
async fn response_never_contains_password() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(create_request(&unique_email()))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: serde_json::Value = test::read_body_json(resp).await;
    assert!(res.get("password").is_none());
    assert!(res.get("id").is_none());
    assert!(!res.to_string().contains("secret password"));

    Ok(())
}

#[actix_web::test]
async fn conflict_if_duplicate_email() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(create_request(&user.email))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CONFLICT);

    let count = user::Entity::find()
        .filter(user::Column::Email.eq(user.email.clone()))
        .count(&db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_email_or_password_is_empty() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    for req_body in [
        create_request(""),
        UserCreateRequest {
            password: "".to_string(),
            ..create_request(&unique_email())
        },
    ] {
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(req_body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);
    }

    Ok(())
}

#[actix_web::test]
async fn nothing_is_stored_if_an_address_cannot_be_stored() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let email = unique_email();
    let address = AddressCreateRequest {
        street_name: "1-2-3 Shibuya".to_string(),
        city: "Tokyo".to_string(),
        country: "Japan".to_string(),
        postal_code: "150-0002".to_string(),
        r#type: AddressType::Shipping,
    };
    // Postgres rejects NUL bytes in text columns.
    let broken_address = AddressCreateRequest {
        street_name: "1-2-3\u{0}Shibuya".to_string(),
        ..address.clone()
    };

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(UserCreateRequest {
            addresses: vec![address.clone(), broken_address],
            ..create_request(&email)
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::INTERNAL_SERVER_ERROR);

    let count = user::Entity::find()
        .filter(user::Column::Email.eq(email.clone()))
        .count(&db)
        .await?;
    assert_eq!(count, 0);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(UserCreateRequest {
            addresses: vec![address],
            ..create_request(&email)
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    Ok(())
}

#[actix_web::test]
async fn email_is_case_insensitive() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;
    let email = unique_email();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(create_request(&email.to_uppercase()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CREATED);

    let res: UserVisible = test::read_body_json(resp).await;
    assert_eq!(res.email, email);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(create_request(&email))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CONFLICT);

    Ok(())
}

#[actix_web::test]
async fn unverified_user_gets_a_verification_token() -> Result<(), DbErr> {
    let Connections { db, settings, .. } = init_app().await?;
    let settings = Settings {
        email: EmailSettings {
            no_verify: false,
            ..settings.email.clone()
        },
        ..settings
    };
    let email = unique_email();

    let res = create_user(
        UserCreateRequest {
            first_name: "Doe,".to_string(),
            last_name: "John".to_string(),
            ..create_request(&email)
        },
        &settings,
        UserAdapter::init(&db),
    )
    .await
    .unwrap();
    assert!(!res.user.email_verification_status);

    let issued = res.email_verification.unwrap();
    assert_eq!(issued.email, email);
    assert_eq!(issued.recipient_name, Some("Doe, John".to_string()));
    assert_eq!(
        verify_token(&issued.token, TokenPurpose::EmailVerification, &settings).unwrap(),
        res.user.user_id
    );

    let user_in_db = user::Entity::find()
        .filter(user::Column::UserId.eq(res.user.user_id.clone()))
        .one(&db)
        .await?
        .unwrap();
    assert!(!user_in_db.email_verification_status);
    assert_eq!(user_in_db.email_verification_token, Some(issued.token));

    Ok(())
}
