//! RPC request handler module
//!
//! This module contains the JSON-RPC handler that feeds requests through the
//! service dispatcher.

use crate::{
    infrastructure::{
        dispatch::ServiceDispatcher,
        http::models::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestContext},
    },
    shared::logging::LoggingUtils,
};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::instrument;
use warp::http::StatusCode;
use warp::Reply;

/// Handle a JSON-RPC request
#[instrument(skip_all, fields(method = %request.method))]
pub async fn handle_rpc_request(
    request: JsonRpcRequest,
    dispatcher: Arc<ServiceDispatcher>,
) -> Result<impl Reply, Infallible> {
    let context = RequestContext::new(request.method.clone());

    if let Err(error) = request.validate_request() {
        let response = JsonRpcResponse::error(error, request.id.clone());
        return Ok(warp::reply::with_status(warp::reply::json(&response), StatusCode::BAD_REQUEST));
    }

    LoggingUtils::log_request(&context.request_id, &request.method, request.params.as_ref());

    match dispatcher.dispatch(&request.method, request.params.as_ref()) {
        Ok(result) => {
            LoggingUtils::log_success(&context.request_id, &request.method, context.elapsed_ms());
            let response = JsonRpcResponse::success(result, request.id);
            Ok(warp::reply::with_status(warp::reply::json(&response), StatusCode::OK))
        }
        Err(e) => {
            LoggingUtils::log_error(&context.request_id, &request.method, &e, context.elapsed_ms());
            let response = JsonRpcResponse::error(JsonRpcError::from(&e), request.id);
            Ok(warp::reply::with_status(warp::reply::json(&response), e.http_status_code()))
        }
    }
}

/// Turn body and routing rejections into JSON-RPC error envelopes
pub async fn handle_rejection(rejection: warp::Rejection) -> Result<impl Reply, Infallible> {
    let (error, status) = if rejection.find::<warp::filters::body::BodyDeserializeError>().is_some() {
        (JsonRpcError::parse_error(), StatusCode::BAD_REQUEST)
    } else if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            JsonRpcError::invalid_request("request body too large"),
            StatusCode::PAYLOAD_TOO_LARGE,
        )
    } else if rejection.find::<warp::reject::LengthRequired>().is_some() {
        (
            JsonRpcError::invalid_request("Content-Length header is required"),
            StatusCode::LENGTH_REQUIRED,
        )
    } else if rejection.is_not_found() {
        (JsonRpcError::invalid_request("not found"), StatusCode::NOT_FOUND)
    } else {
        (JsonRpcError::invalid_request("unsupported request"), StatusCode::BAD_REQUEST)
    };

    let response = JsonRpcResponse::error(error, None);
    Ok(warp::reply::with_status(warp::reply::json(&response), status))
}
