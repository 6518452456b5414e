use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Success envelope: the payload's fields plus `"success": true`, the shape
/// the web client has always consumed.
#[derive(Debug, Serialize)]
struct Envelope<T: Serialize> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

#[derive(Debug)]
pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            Response::OK(body) => (StatusCode::OK, body),
            Response::Created(body) => (StatusCode::CREATED, body),
        };

        (
            status,
            Json(Envelope {
                success: true,
                body,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        message: String,
    }

    #[test]
    fn envelope_flattens_payload_next_to_success_flag() {
        let envelope = Envelope {
            success: true,
            body: Payload {
                message: "Product added".to_string(),
            },
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Product added");
    }

    #[test]
    fn created_maps_to_201() {
        let response = Response::Created(Payload {
            message: "ok".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
