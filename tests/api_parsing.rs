use gdp_compare::api::parse_records;
use gdp_compare::reshape::reshape;
use gdp_compare::{Client, Config, FetchError};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

const SAMPLE: &str = r#"
[
  {"Country":"Mexico","Category":"GDP","DateTime":"2021-12-31T00:00:00","Value":1272.84,
   "Frequency":"Yearly","HistoricalDataSymbol":"WGDPMEXI","LastUpdate":"2022-07-01T09:55:00"},
  {"Country":"Sweden","Category":"GDP","DateTime":"2021-12-31T00:00:00","Value":627.44,
   "Frequency":"Yearly","HistoricalDataSymbol":"WGDPSWED","LastUpdate":"2022-07-01T09:55:00"}
]
"#;

fn client_for(base_url: &str) -> Client {
    let cfg = Config {
        base_url: base_url.to_string(),
        ..Config::with_api_key("guest:guest")
    };
    Client::new(cfg).unwrap()
}

/// Serve exactly one HTTP response and hand back the request line.
fn serve_once(status: &str, body: &'static str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).unwrap();
        request_line
    });
    (format!("http://{addr}"), handle)
}

#[test]
fn parse_sample_json() {
    let records = parse_records(SAMPLE).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].country, "Mexico");
    assert_eq!(records[0].date_time, "2021-12-31T00:00:00");
    assert_eq!(records[0].value, Some(1272.84));
    assert_eq!(records[1].frequency, "Yearly");
}

#[test]
fn missing_category_and_frequency_default_to_empty() {
    let records = parse_records(r#"[{"DateTime":"2020","Country":"Mexico","Value":1}]"#).unwrap();
    assert_eq!(records[0].category, "");
    assert_eq!(records[0].frequency, "");
}

const WITH_NULL: &str = r#"
[
  {"Country":"Mexico","Category":"GDP","DateTime":"2019-12-31T00:00:00","Value":1268.87},
  {"Country":"Sweden","Category":"GDP","DateTime":"2019-12-31T00:00:00","Value":null},
  {"Country":"Mexico","Category":"GDP","DateTime":"2020-12-31T00:00:00","Value":1090.51}
]
"#;

#[test]
fn null_value_keeps_the_other_records() {
    let records = parse_records(WITH_NULL).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].value, None);

    let rows = reshape(&records);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Mexico"), Some(1268.87));
    assert_eq!(rows[0].get("Sweden"), None);
    assert_eq!(rows[1].get("Mexico"), Some(1090.51));
}

#[test]
fn non_json_body_is_a_decode_error() {
    let err = parse_records("<html>oops</html>").unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn url_embeds_countries_indicator_and_key() {
    let client = client_for("https://api.tradingeconomics.com");
    let url = client.historical_url(&["Mexico".into(), "New Zealand".into()]);
    assert_eq!(
        url,
        "https://api.tradingeconomics.com/historical/country/Mexico,New%20Zealand/indicator/gdp?c=guest%3Aguest"
    );
    let shown = client.redacted_url(&["Mexico".into()]);
    assert!(shown.ends_with("?c=***"));
    assert!(!shown.contains("guest"));
}

#[test]
fn empty_country_list_is_rejected() {
    let client = client_for("http://127.0.0.1:1");
    assert!(matches!(client.fetch(&[]), Err(FetchError::NoCountries)));
}

#[test]
fn fetch_returns_records_from_server() {
    let (base, handle) = serve_once("200 OK", SAMPLE);
    let client = client_for(&base);
    let records = client.fetch(&["Mexico".into(), "Sweden".into()]).unwrap();
    assert_eq!(records.len(), 2);

    let request_line = handle.join().unwrap();
    assert!(request_line.starts_with(
        "GET /historical/country/Mexico,Sweden/indicator/gdp?c=guest%3Aguest "
    ));
}

#[test]
fn html_body_from_server_is_a_decode_error() {
    let (base, handle) = serve_once("200 OK", "<html>oops</html>");
    let client = client_for(&base);
    let err = client.fetch(&["Mexico".into(), "Sweden".into()]).unwrap_err();
    handle.join().unwrap();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn rejected_credential_surfaces_as_status_error() {
    let (base, handle) = serve_once("401 Unauthorized", r#"{"Message":"No Access"}"#);
    let client = client_for(&base);
    let err = client.fetch(&["Mexico".into(), "Sweden".into()]).unwrap_err();
    handle.join().unwrap();
    match err {
        FetchError::Status { status, url, .. } => {
            assert_eq!(status, 401);
            assert!(!url.contains("guest"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unreachable_host_is_a_transport_error() {
    // Bind and drop to obtain a port nothing listens on.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = client_for(&format!("http://127.0.0.1:{port}"));
    let err = client.fetch(&["Mexico".into()]).unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}
