//! Client address resolution behind reverse proxies

use axum::http::HeaderMap;

/// Header set by proxies such as nginx with the connecting client address
pub const X_REAL_IP: &str = "x-real-ip";

/// Comma separated hop list, client-nearest first
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Resolve the originating client IP of a request.
///
/// `X-Forwarded-For` wins over `X-Real-Ip`. Without either header the peer
/// address is used with everything after its last `:` removed, so
/// `"[::1]:1234"` becomes `"[::1]"`.
pub fn client_ip(headers: &HeaderMap, remote_addr: &str) -> String {
    let real_ip = header_str(headers, X_REAL_IP);
    let forwarded_for = header_str(headers, X_FORWARDED_FOR);

    if real_ip.is_empty() && forwarded_for.is_empty() {
        return strip_port(remote_addr).to_string();
    }

    if !forwarded_for.is_empty() {
        return forwarded_for
            .split(',')
            .map(str::trim)
            .next()
            .unwrap_or_default()
            .to_string();
    }

    real_ip.to_string()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn strip_port(addr: &str) -> &str {
    match addr.rfind(':') {
        Some(idx) => &addr[..idx],
        None => addr,
    }
}
