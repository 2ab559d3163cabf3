//! Route registration and handler type erasure.
//!
//! # Responsibilities
//! - Bind (method, pattern, parameter type, handler) into one registration
//! - Erase the parameter and response types behind boxed closures so the
//!   route table stores homogeneous routes
//! - Decode request bodies against the declared parameter type
//!
//! # Design Decisions
//! - Types are erased at registration, not at dispatch; the stored decoder
//!   and handler are plain `Fn` trait objects
//! - A route without a declared parameter type never touches the body
//! - An empty body against a declared parameter type decodes to `None`
//!   rather than failing

use std::any::Any;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec;
use crate::dispatch::envelope::{RawEnvelope, ResponseEnvelope};
use crate::dispatch::error::{DispatchFailure, HandlerError};
use crate::routing::method::HttpMethod;
use crate::routing::pattern::{InvalidPatternError, PathPattern, RouteParams};

type BoxedParam = Box<dyn Any + Send>;
type Decoder = Box<dyn Fn(&[u8]) -> Result<BoxedParam, serde_json::Error> + Send + Sync>;
type ErasedHandler =
    Box<dyn Fn(Option<BoxedParam>, &RouteParams) -> Result<RawEnvelope, DispatchFailure> + Send + Sync>;

/// An immutable registration of (method, path pattern, parameter type,
/// handler). Owned by the route table it was added to.
pub struct Route {
    method: HttpMethod,
    pattern: PathPattern,
    decoder: Option<Decoder>,
    handler: ErasedHandler,
}

impl Route {
    /// Register a handler that takes a JSON body of type `P`.
    ///
    /// The handler receives `None` when the request body is empty, `Some`
    /// otherwise. Decode failures abort the request on the generic failure
    /// path before any transactional scope opens.
    pub fn with_body<P, R, F>(
        method: HttpMethod,
        pattern: &str,
        handler: F,
    ) -> Result<Self, InvalidPatternError>
    where
        P: DeserializeOwned + Send + 'static,
        R: Serialize + 'static,
        F: Fn(Option<P>, &RouteParams) -> Result<ResponseEnvelope<R>, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        let pattern = PathPattern::compile(pattern)?;
        let decoder: Decoder =
            Box::new(|bytes| codec::decode::<P>(bytes).map(|param| Box::new(param) as BoxedParam));
        let erased: ErasedHandler = Box::new(move |param, route_params| {
            let param = match param {
                Some(boxed) => match boxed.downcast::<P>() {
                    Ok(typed) => Some(*typed),
                    // Unreachable when the route's own decoder produced the
                    // value; kept as a checked failure rather than a panic.
                    Err(_) => return Err(DispatchFailure::ParamType),
                },
                None => None,
            };
            encode_envelope(handler(param, route_params)?)
        });

        Ok(Self {
            method,
            pattern,
            decoder: Some(decoder),
            handler: erased,
        })
    }

    /// Register a handler with no declared parameter type.
    ///
    /// The request body, if any, is ignored entirely.
    pub fn without_body<R, F>(
        method: HttpMethod,
        pattern: &str,
        handler: F,
    ) -> Result<Self, InvalidPatternError>
    where
        R: Serialize + 'static,
        F: Fn(&RouteParams) -> Result<ResponseEnvelope<R>, HandlerError> + Send + Sync + 'static,
    {
        let pattern = PathPattern::compile(pattern)?;
        let erased: ErasedHandler =
            Box::new(move |_param, route_params| encode_envelope(handler(route_params)?));

        Ok(Self {
            method,
            pattern,
            decoder: None,
            handler: erased,
        })
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The pattern string this route was registered with.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// True if this route declared a parameter type.
    pub fn expects_body(&self) -> bool {
        self.decoder.is_some()
    }

    pub(crate) fn match_path(&self, path: &str) -> Option<RouteParams> {
        self.pattern.match_path(path)
    }

    /// Decode the request body against the declared parameter type.
    ///
    /// `None` when the route has no parameter type or the body is empty.
    pub(crate) fn decode_body(&self, body: &[u8]) -> Result<Option<BoxedParam>, DispatchFailure> {
        match &self.decoder {
            Some(decoder) if !body.is_empty() => decoder(body)
                .map(Some)
                .map_err(DispatchFailure::Decode),
            _ => Ok(None),
        }
    }

    pub(crate) fn invoke(
        &self,
        param: Option<BoxedParam>,
        route_params: &RouteParams,
    ) -> Result<RawEnvelope, DispatchFailure> {
        (self.handler)(param, route_params)
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern.as_str())
            .field("expects_body", &self.expects_body())
            .finish()
    }
}

fn encode_envelope<R: Serialize>(
    envelope: ResponseEnvelope<R>,
) -> Result<RawEnvelope, DispatchFailure> {
    let (payload, status) = envelope.into_parts();
    let payload = match payload {
        Some(value) => Some(codec::encode(&value).map_err(DispatchFailure::Encode)?),
        None => None,
    };
    Ok(RawEnvelope { payload, status })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_body_route_decodes_and_invokes() {
        let route = Route::with_body(HttpMethod::Post, "/items", |item: Option<Item>, _params| {
            let item = item.expect("body expected in this test");
            Ok(ResponseEnvelope::with_payload(item.name))
        })
        .unwrap();

        let param = route.decode_body(br#"{"name":"a"}"#).unwrap();
        let envelope = route.invoke(param, &RouteParams::default()).unwrap();
        assert_eq!(envelope.payload.as_deref(), Some(br#""a""#.as_slice()));
        assert_eq!(envelope.status, None);
    }

    #[test]
    fn test_empty_body_decodes_to_none() {
        let route = Route::with_body(HttpMethod::Post, "/items", |item: Option<Item>, _params| {
            assert!(item.is_none());
            Ok(ResponseEnvelope::<()>::empty())
        })
        .unwrap();

        let param = route.decode_body(b"").unwrap();
        assert!(param.is_none());
        route.invoke(param, &RouteParams::default()).unwrap();
    }

    #[test]
    fn test_malformed_body_is_decode_failure() {
        let route = Route::with_body(HttpMethod::Post, "/items", |_item: Option<Item>, _params| {
            Ok(ResponseEnvelope::<()>::empty())
        })
        .unwrap();

        let failure = route.decode_body(b"{not json").unwrap_err();
        assert!(matches!(failure, DispatchFailure::Decode(_)));
    }

    #[test]
    fn test_bodyless_route_ignores_body() {
        let route = Route::without_body(HttpMethod::Get, "/ping", |_params| {
            Ok(ResponseEnvelope::with_payload("pong"))
        })
        .unwrap();

        assert!(!route.expects_body());
        let param = route.decode_body(b"ignored").unwrap();
        assert!(param.is_none());
    }
}
