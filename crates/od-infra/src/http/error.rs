use od_core::ports::ApiError;
use reqwest::StatusCode;

pub(crate) fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else if let Some(status) = error.status() {
        map_status_code(status, String::new())
    } else {
        ApiError::Network(error.to_string())
    }
}

pub(crate) fn map_status_code(code: StatusCode, body: String) -> ApiError {
    match code {
        StatusCode::NOT_FOUND => ApiError::NotFound(body),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => ApiError::Timeout,
        _ if code.is_server_error() => ApiError::Server {
            status: code.as_u16(),
        },
        _ => ApiError::UnexpectedStatus {
            status: code.as_u16(),
            body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_api_errors() {
        assert_eq!(
            map_status_code(StatusCode::NOT_FOUND, "gone".into()),
            ApiError::NotFound("gone".into())
        );
        assert_eq!(
            map_status_code(StatusCode::GATEWAY_TIMEOUT, String::new()),
            ApiError::Timeout
        );
        assert_eq!(
            map_status_code(StatusCode::BAD_GATEWAY, String::new()),
            ApiError::Server { status: 502 }
        );
        assert_eq!(
            map_status_code(StatusCode::BAD_REQUEST, "name is required".into()),
            ApiError::UnexpectedStatus {
                status: 400,
                body: "name is required".into()
            }
        );
    }
}
