// tests/collect_http.rs
//
// End-to-end poll against a throwaway local HTTP server serving fixtures.
//
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use cm_scrape::config::ScrapeOptions;
use cm_scrape::core::net;
use cm_scrape::{Error, scrape};
use serde_json::Value;

const STATUS: &str = include_str!("fixtures/cmconnectionstatus.html");
const INFO: &str = include_str!("fixtures/cmswinfo.html");

/// Serve `routes` (path → status, body) for up to `requests` connections.
/// Returns the base URL.
fn serve(routes: &[(&str, u16, &str)], requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: HashMap<String, (u16, String)> = routes
        .iter()
        .map(|(p, c, b)| (p.to_string(), (*c, b.to_string())))
        .collect();

    thread::spawn(move || {
        for stream in listener.incoming().take(requests) {
            let Ok(mut stream) = stream else { continue };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }
            let req = String::from_utf8_lossy(&buf);
            let path = req.split_whitespace().nth(1).unwrap_or("/").to_string();
            let (code, body) = routes.get(&path).cloned().unwrap_or((404, "not found".into()));
            let reason = if code == 200 { "OK" } else { "Error" };
            let resp = format!(
                "HTTP/1.1 {code} {reason}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(resp.as_bytes());
        }
    });

    format!("http://{addr}")
}

fn opts(base_url: String) -> ScrapeOptions {
    ScrapeOptions { base_url, ..Default::default() }
}

#[test]
fn full_poll_produces_record() {
    let base = serve(
        &[("/cmconnectionstatus.html", 200, STATUS), ("/cmswinfo.html", 200, INFO)],
        2,
    );
    let rec = scrape::collect(&opts(base)).unwrap();

    assert_eq!(rec.requests["connectionstatus"].response_length, STATUS.len());
    assert_eq!(rec.requests["swinfo"].response_length, INFO.len());
    assert_eq!(rec.status.len(), 11);
    assert_eq!(rec.status["firmware_version"], "AB01.01.009.32.01_122319_183.0A.NSH");
    assert_eq!(rec.downstream.len(), 25);
    assert_eq!(rec.upstream.len(), 5);

    let v: Value = serde_json::from_str(&rec.to_json().unwrap()).unwrap();
    let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
    // serde_json's default map sorts keys; order on the wire is checked in record.rs
    assert_eq!(keys.len(), 4);
    for k in ["requests", "status", "downstream", "upstream"] {
        assert!(v.get(k).is_some(), "missing {k}");
    }
    assert_eq!(v["downstream"]["3"]["power"], "0.6 dBmV");
    assert_eq!(v["upstream"]["4"]["channel"], "1");
}

#[test]
fn fetch_reports_length_of_raw_body() {
    let base = serve(&[("/x", 200, "héllo")], 1);
    let res = net::http_get(&format!("{base}/x")).unwrap();
    assert_eq!(res.body, "héllo");
    assert_eq!(res.byte_length, 6);
}

#[test]
fn non_200_on_status_page_aborts() {
    let base = serve(&[("/cmconnectionstatus.html", 500, "boom"), ("/cmswinfo.html", 200, INFO)], 1);
    let err = scrape::collect(&opts(base)).unwrap_err();
    match err {
        Error::Status { url, status } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/cmconnectionstatus.html"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_200_on_info_page_aborts() {
    let base = serve(&[("/cmconnectionstatus.html", 200, STATUS)], 2);
    let err = scrape::collect(&opts(base)).unwrap_err();
    assert!(matches!(err, Error::Status { status: 404, .. }), "{err}");
    assert!(err.to_string().contains("cmswinfo.html"));
}

#[test]
fn connection_refused_is_a_request_error() {
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let err = scrape::collect(&opts(format!("http://127.0.0.1:{port}"))).unwrap_err();
    assert!(matches!(err, Error::Request { .. }), "{err}");
}

#[test]
fn layout_change_is_fatal() {
    let base = serve(
        &[("/cmconnectionstatus.html", 200, "<html><table></table></html>"), ("/cmswinfo.html", 200, INFO)],
        2,
    );
    let err = scrape::collect(&opts(base)).unwrap_err();
    assert!(matches!(err, Error::MissingTable { page: "connectionstatus", index: 1, found: 1 }), "{err}");
}

#[test]
fn transport_failure_outranks_layout_error() {
    // status page is unusable, but the info page's 404 is what gets reported
    let base = serve(&[("/cmconnectionstatus.html", 200, "<html><table></table></html>")], 2);
    let err = scrape::collect(&opts(base)).unwrap_err();
    match err {
        Error::Status { url, status } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/cmswinfo.html"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
