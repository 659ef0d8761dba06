//! Shared-secret request gate
//!
//! A coarse check of the request path and `key` query parameter against
//! configured values. Plain string comparison, not authentication.

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Why a request was turned away
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    #[error("Bad Request")]
    Endpoint,
    #[error("Bad Shared Key")]
    SharedKey,
}

/// Check that `path` is `/<endpoint>` and `key` equals `shared_key`.
///
/// `path` is the raw request path; it is percent-decoded before comparing.
/// A missing `key` parameter is compared as the empty string.
pub fn check_request(
    path: &str,
    key: Option<&str>,
    endpoint: &str,
    shared_key: &str,
) -> Result<(), GateRejection> {
    let path = percent_decode_str(path)
        .decode_utf8()
        .map_err(|_| GateRejection::Endpoint)?;
    if path.strip_prefix('/') != Some(endpoint) {
        return Err(GateRejection::Endpoint);
    }

    if key.unwrap_or_default() != shared_key {
        return Err(GateRejection::SharedKey);
    }

    Ok(())
}
