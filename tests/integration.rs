//! End-to-end tests driving the real server over raw HTTP/1.1.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use gatehouse::{Server, ServerConfig};

// Helper to start a server on an ephemeral port
async fn start_test_server() -> SocketAddr {
    let server = Server::bind("127.0.0.1:0", ServerConfig::default())
        .await
        .expect("failed to bind test server");
    let addr = server.local_addr();
    tokio::spawn(server.start());
    addr
}

// Helper to send one request and read the full response
async fn send_request(
    addr: SocketAddr,
    method: &str,
    path: &str,
    session: Option<&str>,
    form_body: Option<&str>,
) -> String {
    let mut stream = TcpStream::connect(addr).await.expect("failed to connect");

    let mut request = format!("{} {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n", method, path);
    if let Some(token) = session {
        request.push_str(&format!("Cookie: gatehouse_session={}\r\n", token));
    }
    match form_body {
        Some(body) => {
            request.push_str(&format!(
                "Content-Type: application/x-www-form-urlencoded\r\nContent-Length: {}\r\n\r\n{}",
                body.len(),
                body
            ));
        }
        None => request.push_str("\r\n"),
    }

    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).to_string()
}

// Helper to pull the session token out of a Set-Cookie header
fn extract_session(response: &str) -> Option<String> {
    for line in response.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        if !name.eq_ignore_ascii_case("set-cookie") {
            continue;
        }
        if let Some(rest) = value.trim().strip_prefix("gatehouse_session=") {
            let token = rest.split(';').next().unwrap_or("").to_string();
            if !token.is_empty() {
                return Some(token);
            }
        }
    }
    None
}

#[tokio::test]
async fn test_landing_page() {
    let addr = start_test_server().await;
    let response = send_request(addr, "GET", "/", None, None).await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Gatehouse"));
}

#[tokio::test]
async fn test_dashboard_requires_session() {
    let addr = start_test_server().await;

    // No cookie at all
    let response = send_request(addr, "GET", "/dashboard", None, None).await;
    assert!(response.starts_with("HTTP/1.1 302"));
    assert!(response.contains("Location: /login"));

    // A made-up token is just as anonymous
    let response = send_request(addr, "GET", "/dashboard", Some("bogus-token"), None).await;
    assert!(response.starts_with("HTTP/1.1 302"));
    assert!(response.contains("Location: /login"));
}

#[tokio::test]
async fn test_register_validation_errors() {
    let addr = start_test_server().await;

    // Missing password redisplays the form with the generic message
    let response = send_request(
        addr,
        "POST",
        "/register",
        None,
        Some("email=alice%40example.com"),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Email and password are required."));
    assert!(extract_session(&response).is_none());

    // Empty email likewise
    let response =
        send_request(addr, "POST", "/register", None, Some("email=&password=pw123")).await;
    assert!(response.contains("Email and password are required."));
}

#[tokio::test]
async fn test_full_registration_flow() {
    let addr = start_test_server().await;

    // Register alice and pick up the session cookie
    let response = send_request(
        addr,
        "POST",
        "/register",
        None,
        Some("email=alice%40example.com&password=pw123"),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 302"));
    assert!(response.contains("Location: /dashboard"));
    let session = extract_session(&response).expect("registration should set a session cookie");

    // Dashboard greets the registered identity
    let response = send_request(addr, "GET", "/dashboard", Some(&session), None).await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Welcome, alice@example.com"));

    // Logout bounces home and kills the session
    let response = send_request(addr, "GET", "/logout", Some(&session), None).await;
    assert!(response.starts_with("HTTP/1.1 302"));
    assert!(response.contains("Location: /"));

    let response = send_request(addr, "GET", "/dashboard", Some(&session), None).await;
    assert!(response.starts_with("HTTP/1.1 302"));
    assert!(response.contains("Location: /login"));

    // Wrong password stays on the login form
    let response = send_request(
        addr,
        "POST",
        "/login",
        None,
        Some("email=alice%40example.com&password=wrong"),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("Invalid credentials."));
    assert!(extract_session(&response).is_none());

    // Correct password restores dashboard access
    let response = send_request(
        addr,
        "POST",
        "/login",
        None,
        Some("email=alice%40example.com&password=pw123"),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 302"));
    let session = extract_session(&response).expect("login should set a session cookie");

    let response = send_request(addr, "GET", "/dashboard", Some(&session), None).await;
    assert!(response.contains("Welcome, alice@example.com"));

    // Re-registering alice fails regardless of password
    let response = send_request(
        addr,
        "POST",
        "/register",
        None,
        Some("email=alice%40example.com&password=other"),
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"));
    assert!(response.contains("User already exists."));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let addr = start_test_server().await;
    let response = send_request(addr, "GET", "/nope", None, None).await;
    assert!(response.starts_with("HTTP/1.1 404"));
}
