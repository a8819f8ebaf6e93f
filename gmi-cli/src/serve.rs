//! Single-shot request handling for inetd mode
//!
//!     The handler reads exactly one request line from the line source, takes the second
//!     whitespace-separated field as the resource path, and resolves it under the document
//!     root. If and only if the resolved path is a regular file with the `.gmi` extension,
//!     the file is converted and written after a minimal fixed-status response preamble.
//!
//!     Every other request - missing field, empty resource, wrong extension, nonexistent
//!     file - is a silent no-op: nothing is written and no error is raised. That
//!     permissiveness is part of the handler's observed contract and must not be hardened
//!     into explicit error responses.

use gmi_parser::gmi::loader::{DocumentLoader, LoaderError};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

const RESPONSE_PREAMBLE: &str = "HTTP/1.0 200 OK\r\nContent-Type: text/html; charset=utf-8\r\n\r\n";

/// Error that can occur while answering a request
#[derive(Debug)]
pub enum ServeError {
    /// Reading the request or writing the response failed
    Io(io::Error),
    /// Loading or converting the resource failed
    Loader(LoaderError),
}

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServeError::Io(err) => write!(f, "IO error: {}", err),
            ServeError::Loader(err) => write!(f, "conversion error: {}", err),
        }
    }
}

impl std::error::Error for ServeError {}

impl From<io::Error> for ServeError {
    fn from(err: io::Error) -> Self {
        ServeError::Io(err)
    }
}

impl From<LoaderError> for ServeError {
    fn from(err: LoaderError) -> Self {
        ServeError::Loader(err)
    }
}

/// Answer one request from `request`, writing the response (if any) to `out`.
///
/// Unservable requests return `Ok(())` without touching `out`. The response preamble is
/// written before conversion starts, so a conversion failure can leave the preamble as
/// partial output; the error still propagates to the caller.
pub fn handle_request<R: BufRead, W: Write>(
    root_dir: &Path,
    mut request: R,
    mut out: W,
) -> Result<(), ServeError> {
    let mut request_line = String::new();
    request.read_line(&mut request_line)?;

    let resource = match request_line.split_whitespace().nth(1) {
        Some(resource) => resource,
        None => return Ok(()),
    };

    let resource = resource.strip_prefix('/').unwrap_or(resource);
    if resource.is_empty() {
        return Ok(());
    }

    let resource_path = root_dir.join(resource);
    if resource_path.extension().and_then(|ext| ext.to_str()) != Some("gmi")
        || !resource_path.is_file()
    {
        return Ok(());
    }

    let loader = DocumentLoader::from_path(&resource_path)?;
    out.write_all(RESPONSE_PREAMBLE.as_bytes())?;
    let document = loader.parse()?;
    out.write_all(gmi_html::serialize_to_html(&document).as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn request_to(root: &Path, request_line: &str) -> Vec<u8> {
        let mut out = Vec::new();
        handle_request(root, request_line.as_bytes(), &mut out).expect("handler succeeds");
        out
    }

    #[test]
    fn test_serves_existing_gmi_file() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("page.gmi"), "# Served\n").unwrap();

        let output = request_to(root.path(), "GET /page.gmi HTTP/1.0\r\n");
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("HTTP/1.0 200 OK\r\n"));
        assert!(output.contains("Content-Type: text/html; charset=utf-8\r\n\r\n"));
        assert!(output.contains("<h1>Served</h1>"));
    }

    #[test]
    fn test_missing_file_writes_nothing() {
        let root = tempfile::tempdir().unwrap();

        let output = request_to(root.path(), "GET /absent.gmi HTTP/1.0\r\n");
        assert!(output.is_empty());
    }

    #[test]
    fn test_wrong_extension_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("secret.txt"), "not gemtext").unwrap();

        let output = request_to(root.path(), "GET /secret.txt HTTP/1.0\r\n");
        assert!(output.is_empty());
    }

    #[test]
    fn test_malformed_request_writes_nothing() {
        let root = tempfile::tempdir().unwrap();

        assert!(request_to(root.path(), "GET\r\n").is_empty());
        assert!(request_to(root.path(), "\r\n").is_empty());
        assert!(request_to(root.path(), "GET / HTTP/1.0\r\n").is_empty());
    }
}
