//! Standard success envelope: `{statusCode, data, message, success}`.
//! The matching error envelope is produced by [`crate::error::AppError`].

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with the standard envelope.
    pub fn ok(data: T, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            status_code: 200,
            data,
            message: message.into(),
            success: true,
        })
    }

    /// 201 Created with the standard envelope.
    pub fn created(data: T, message: impl Into<String>) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            status_code: 201,
            data,
            message: message.into(),
            success: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_has_the_standard_fields() {
        let envelope = ApiResponse {
            status_code: 200,
            data: serde_json::json!({"x": 1}),
            message: "done".to_string(),
            success: true,
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["data"]["x"], 1);
        assert_eq!(json["message"], "done");
        assert_eq!(json["success"], true);
    }
}
