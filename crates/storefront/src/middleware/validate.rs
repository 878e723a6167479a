use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

type Rejection = (StatusCode, axum::Json<Value>);

/// JSON body that has been deserialized and validated.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let payload = json!({
                        "status": "error",
                        "message": rejection.body_text(),
                    });
                    (rejection.status(), axum::Json(payload))
                })?;

        json_value.validate().map_err(validation_rejection)?;

        Ok(Self(json_value))
    }
}

/// Query string that has been deserialized and validated.
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                let payload = json!({
                    "status": "error",
                    "message": rejection.body_text(),
                });
                (rejection.status(), axum::Json(payload))
            })?;

        value.validate().map_err(validation_rejection)?;

        Ok(Self(value))
    }
}

fn validation_rejection(errors: ValidationErrors) -> Rejection {
    let payload = json!({
        "status": "error",
        "message": format_validation_errors(&errors),
        "details": format_validation_errors_detailed(&errors),
    });
    (StatusCode::BAD_REQUEST, axum::Json(payload))
}

fn error_message(field: &str, error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "email" => "Invalid email format".to_string(),
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            _ => format!("Invalid {field}"),
        })
}

/// Flattens nested struct and list errors into `path: message` pairs.
fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<(String, String)>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push((path.clone(), error_message(field, error)));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut pairs = Vec::new();
    collect(errors, "", &mut pairs);
    pairs.sort();

    if pairs.is_empty() {
        "Validation failed".to_string()
    } else {
        pairs
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut pairs = Vec::new();
    collect(errors, "", &mut pairs);

    let mut error_map = serde_json::Map::new();
    for (field, message) in pairs {
        let entry = error_map
            .entry(field)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(messages) = entry {
            messages.push(Value::String(message));
        }
    }

    Value::Object(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::requests::CreateOrderRequest;

    #[test]
    fn nested_errors_carry_their_path() {
        let req: CreateOrderRequest = serde_json::from_value(json!({
            "items": [{ "product_id": uuid::Uuid::new_v4(), "quantity": 0 }]
        }))
        .unwrap();

        let errors = req.validate().unwrap_err();
        let message = format_validation_errors(&errors);

        assert!(message.contains("items[0].quantity"), "{message}");
    }
}
