mod common;

use shared::{
    abstract_trait::JwtServiceTrait,
    domain::requests::{LoginRequest, RegisterRequest},
    errors::ServiceError,
    model::UserRole,
    service::TransitionPolicy,
};

fn jane() -> RegisterRequest {
    RegisterRequest {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        password: "secret123".into(),
    }
}

#[tokio::test]
async fn register_then_login_issues_role_claim() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;
    let auth = &state.di_container.auth_service;

    let registered = auth.register_user(&jane()).await.unwrap();
    assert_eq!(registered.message, "User created successfully");
    assert_eq!(registered.data.role, UserRole::Customer);

    let login = auth
        .login_user(&LoginRequest {
            email: "jane@example.com".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap();

    let claims = state.jwt_config.verify_token(&login.data.token).unwrap();
    assert_eq!(claims.sub, registered.data.id);
    assert!(!claims.is_admin());
}

#[tokio::test]
async fn duplicate_registration_fails() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;
    let auth = &state.di_container.auth_service;

    auth.register_user(&jane()).await.unwrap();
    let err = auth.register_user(&jane()).await.unwrap_err();

    assert!(matches!(err, ServiceError::AlreadyExists(msg) if msg == "User already exists"));
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;
    let auth = &state.di_container.auth_service;
    auth.register_user(&jane()).await.unwrap();

    let wrong_password = auth
        .login_user(&LoginRequest {
            email: "jane@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    let unknown_email = auth
        .login_user(&LoginRequest {
            email: "ghost@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(wrong_password.to_string(), "Invalid credentials");
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn seeded_admin_carries_admin_role() {
    let state = common::state_with(TransitionPolicy::Unconstrained).await;

    let admin = state
        .di_container
        .auth_service
        .register_with_role(&jane(), UserRole::Admin)
        .await
        .unwrap();

    let me = state
        .di_container
        .auth_service
        .get_me(admin.data.id)
        .await
        .unwrap();
    assert_eq!(me.data.role, UserRole::Admin);
}
