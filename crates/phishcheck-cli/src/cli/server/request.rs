//! Minimal HTTP/1.1 request reader: request line, headers, optional body.

use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

/// Upper bound on request line plus headers.
pub const MAX_HEAD_BYTES: usize = 8 * 1024;
/// Upper bound on a request body (form posts are tiny).
pub const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("connection closed before a request was sent")]
    Closed,
    #[error("malformed request line: {0:?}")]
    BadRequestLine(String),
    #[error("malformed header line: {0:?}")]
    BadHeader(String),
    #[error("request head exceeds {MAX_HEAD_BYTES} bytes")]
    HeadTooLarge,
    #[error("request is not valid UTF-8")]
    NotUtf8,
    #[error("invalid Content-Length: {0:?}")]
    BadContentLength(String),
    #[error("body of {0} bytes exceeds {MAX_BODY_BYTES} bytes")]
    BodyTooLarge(usize),
    #[error("connection closed before the {0}-byte body was read")]
    IncompleteBody(usize),
    #[error("timed out reading request")]
    Timeout,
    #[error("i/o: {0}")]
    Io(#[from] io::Error),
}

impl RequestError {
    /// True when the peer sent something we should answer with 400.
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            RequestError::Closed | RequestError::Timeout | RequestError::Io(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    /// Request target without its query string.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    /// Case-insensitive header lookup (first match).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of `name` in an `application/x-www-form-urlencoded` body.
    pub fn form_field(&self, name: &str) -> Option<String> {
        url::form_urlencoded::parse(&self.body)
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

/// Reads one line of the request head, charging it against `budget`.
async fn read_head_line<R>(
    reader: &mut R,
    budget: &mut usize,
) -> Result<Option<String>, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let limit = (*budget as u64).saturating_add(1);
    let n = match (&mut *reader).take(limit).read_line(&mut line).await {
        Ok(n) => n,
        Err(e) if e.kind() == io::ErrorKind::InvalidData => return Err(RequestError::NotUtf8),
        Err(e) => return Err(e.into()),
    };
    if n == 0 {
        return Ok(None);
    }
    if n > *budget {
        return Err(RequestError::HeadTooLarge);
    }
    *budget -= n;
    let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
    Ok(Some(trimmed))
}

/// Reads a full request from `reader`.
pub async fn read_request<R>(reader: &mut R) -> Result<Request, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut budget = MAX_HEAD_BYTES;

    let request_line = read_head_line(reader, &mut budget)
        .await?
        .ok_or(RequestError::Closed)?;
    let mut parts = request_line.split_whitespace();
    let (method, target, version) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(m), Some(t), Some(v), None) if v.starts_with("HTTP/") => (m, t, v),
        _ => return Err(RequestError::BadRequestLine(request_line.clone())),
    };
    tracing::trace!(method, target, version, "request line");

    let path = target.split_once('?').map_or(target, |(p, _)| p).to_string();

    let mut headers = Vec::new();
    loop {
        let line = read_head_line(reader, &mut budget)
            .await?
            .ok_or_else(|| RequestError::BadHeader(String::new()))?;
        if line.is_empty() {
            break;
        }
        let (name, value) = line
            .split_once(':')
            .ok_or_else(|| RequestError::BadHeader(line.clone()))?;
        headers.push((name.trim().to_string(), value.trim().to_string()));
    }

    let mut request = Request {
        method: method.to_string(),
        path,
        headers,
        body: Vec::new(),
    };

    if let Some(raw) = request.header("content-length") {
        let len: usize = raw
            .parse()
            .map_err(|_| RequestError::BadContentLength(raw.to_string()))?;
        if len > MAX_BODY_BYTES {
            return Err(RequestError::BodyTooLarge(len));
        }
        let mut body = vec![0u8; len];
        reader.read_exact(&mut body).await.map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => RequestError::IncompleteBody(len),
            _ => RequestError::Io(e),
        })?;
        request.body = body;
    }

    Ok(request)
}
