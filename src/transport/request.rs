use std::fmt;

/// HTTP methods the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload.
///
/// JSON bodies arrive already serialized. Multipart bodies never get an explicit
/// `Content-Type`; reqwest writes it together with the boundary.
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(String),
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// Everything needed to issue one call: path, method, headers and body.
#[derive(Debug)]
pub struct RequestSpec {
    pub path: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// POST with a body the caller has already serialized to JSON.
    pub fn post_json(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Method::Post, path).with_body(RequestBody::Json(body.into()))
    }

    pub fn post_multipart(path: impl Into<String>, form: reqwest::multipart::Form) -> Self {
        Self::new(Method::Post, path).with_body(RequestBody::Multipart(form))
    }

    /// Add or override a header. Later values win over earlier ones and over defaults.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}
