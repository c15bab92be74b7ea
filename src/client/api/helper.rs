use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;

async fn error_message(response: Response) -> String {
    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    }
}

/// Parses a JSON success body or turns the error body into an `ApiError`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiError {
            status: 500,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let message = error_message(response).await;
        Err(ApiError { status, message })
    }
}

/// Parses responses without a body (204 No Content)
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        let message = error_message(response).await;
        Err(ApiError { status, message })
    }
}

pub fn get(url: &str) -> Request {
    Request::get(url)
}

pub fn post(url: &str) -> Request {
    Request::post(url).header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url).header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url)
}

/// Attaches the admin bearer token
pub fn authorized(request: Request, token: &str) -> Request {
    request.header("Authorization", &format!("Bearer {}", token))
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to send request: {}", e),
    })
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError {
        status: 500,
        message: format!("Failed to serialize request: {}", e),
    })
}

/// Percent-encodes a query parameter value
pub fn encode_query(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
