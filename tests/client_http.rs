use aram_dashboard::api::client::StatsApiClient;
use aram_dashboard::api::{ChampionQuery, StatsApi};
use aram_dashboard::config::Config;
use aram_dashboard::error::AppError;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

/// Serves one canned response per connection and hands back the request lines.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, thread::JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }
            seen.push(request_line.trim_end().to_string());

            let reason = if status == 200 { "OK" } else { "Error" };
            write!(
                stream,
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                body.len(),
                body
            )
            .unwrap();
            stream.flush().unwrap();
        }
        seen
    });

    (format!("http://{}/api", addr), handle)
}

fn client(base_url: &str) -> StatsApiClient {
    StatsApiClient::new(&Config::default().with_base_url(base_url))
}

#[test]
fn champions_request_carries_paging_and_filters() {
    let (base, server) = serve(vec![(
        200,
        r#"{"champions": [{"championId": 1, "name": "Annie", "tier": "S"}],
            "pagination": {"current_page": 2, "total_pages": 3}}"#,
    )]);

    let page = client(&base)
        .champions(&ChampionQuery {
            page: 2,
            champion_type: "全部".to_string(),
            sort: "KDA".to_string(),
        })
        .unwrap();

    assert_eq!(page.champions[0].name, "Annie");
    assert_eq!(page.pagination.map(|p| p.total_pages), Some(3));

    let seen = server.join().unwrap();
    assert!(seen[0].starts_with("GET /api/champions?"));
    assert!(seen[0].contains("page=2"));
    assert!(seen[0].contains("limit=12"));
    assert!(seen[0].contains("sort=KDA"));
}

#[test]
fn detail_path_is_percent_encoded() {
    let (base, server) = serve(vec![(200, r#"{"tips": []}"#)]);

    let detail = client(&base).champion_detail("Kog Maw").unwrap();
    assert_eq!(detail.tips, Some(Vec::new()));
    assert_eq!(detail.basic_info, None);

    let seen = server.join().unwrap();
    assert_eq!(seen[0], "GET /api/champions/Kog%20Maw HTTP/1.1");
}

#[test]
fn error_status_surfaces_the_backend_message() {
    let (base, server) = serve(vec![(503, r#"{"error": "Database unavailable"}"#)]);

    let err = client(&base).version().unwrap_err();
    assert_eq!(
        err,
        AppError::HttpError("Database unavailable (HTTP 503)".to_string())
    );
    assert!(err.is_fetch_failure());
    server.join().unwrap();
}

#[test]
fn malformed_body_is_a_json_error() {
    let (base, server) = serve(vec![(200, "<html>not json</html>")]);

    let err = client(&base).synergy_matrix(20).unwrap_err();
    assert!(matches!(err, AppError::JsonError(_)));

    let seen = server.join().unwrap();
    assert!(seen[0].starts_with("GET /api/synergy-matrix?limit=20"));
}

#[test]
fn empty_search_makes_no_request() {
    // Nothing listens here; any connection attempt would fail.
    let found = client("http://127.0.0.1:9/api").search("").unwrap();
    assert!(found.results.is_empty());
}
