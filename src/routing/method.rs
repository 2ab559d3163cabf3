//! HTTP method enumeration with per-method default status codes.

/// HTTP methods the route table can register handlers for.
///
/// Each variant carries two default status codes: one used when a handler
/// returns a payload, one used when it returns none. An explicit status
/// override on the response envelope takes priority over both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
    Patch,
}

impl HttpMethod {
    /// Parse a request method string.
    ///
    /// Unknown methods yield `None`, which the dispatcher treats as
    /// "no route", never as a failure.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "HEAD" => Some(Self::Head),
            "PATCH" => Some(Self::Patch),
            _ => None,
        }
    }

    /// Default status when the handler returned a payload.
    pub fn default_status(self) -> u16 {
        match self {
            Self::Post => 201,
            _ => 200,
        }
    }

    /// Default status when the handler returned no payload.
    ///
    /// Reads report absence (404); mutations report completion (204).
    pub fn default_status_no_content(self) -> u16 {
        match self {
            Self::Get | Self::Head => 404,
            Self::Post | Self::Put | Self::Delete | Self::Patch => 204,
        }
    }

    /// The canonical uppercase method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
