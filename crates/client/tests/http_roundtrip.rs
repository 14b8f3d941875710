//! Exercises the client against a one-shot local HTTP responder.

use roster_client::{EmployeeClient, Error};
use roster_config::ApiConfig;
use roster_protocol::{Employee, Gender, ProfileColor, Salutation};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A captured HTTP request.
struct Captured {
    head: String,
    body: String,
}

/// Accepts a single connection, captures the request, and answers with the
/// given status line and body.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .map(|(_, value)| value.trim().parse::<usize>().unwrap())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body =
            String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len(),
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();

        Captured {
            head,
            body: request_body,
        }
    });

    (base_url, handle)
}

fn client_for(base_url: &str) -> EmployeeClient {
    EmployeeClient::new(&ApiConfig::new(base_url, "users")).unwrap()
}

fn john() -> Employee {
    Employee {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        employee_id: 42,
        gross_salary: 1_234_567,
        salutation: Salutation::Mr,
        gender: Gender::M,
        color: ProfileColor::Red,
    }
}

#[tokio::test]
async fn list_employees_decodes_listing() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"_embedded":{"users":[
            {"firstName":"Grace","lastName":"Hopper","employeeId":1,"grossSalary":98000,
             "salutation":"MRS","gender":"F","color":"GREEN"},
            {"firstName":"Alan","lastName":"Turing","employeeId":2,"grossSalary":87000,
             "salutation":"DR","gender":"M","color":"BLUE"}
        ]}}"#,
    )
    .await;

    let employees = client_for(&base_url).list_employees().await.unwrap();
    let names: Vec<String> = employees.iter().map(Employee::full_name).collect();
    assert_eq!(names, ["Grace Hopper", "Alan Turing"]);

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with("GET /users HTTP/1.1"));
}

#[tokio::test]
async fn list_employees_reports_status_errors() {
    let (base_url, server) = serve_once("500 Internal Server Error", "{}").await;

    let err = client_for(&base_url).list_employees().await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 500, .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn list_employees_rejects_unexpected_body() {
    let (base_url, server) = serve_once("200 OK", r#"{"users":[]}"#).await;

    let err = client_for(&base_url).list_employees().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn create_employee_posts_json_record() {
    let (base_url, server) = serve_once("201 Created", "").await;

    client_for(&base_url).create_employee(&john()).await.unwrap();

    let captured = server.await.unwrap();
    assert!(captured.head.starts_with("POST /users HTTP/1.1"));
    let posted: serde_json::Value = serde_json::from_str(&captured.body).unwrap();
    assert_eq!(posted["firstName"], "John");
    assert_eq!(posted["grossSalary"], 1_234_567);
    assert_eq!(posted["salutation"], "MR");
    assert_eq!(posted["color"], "RED");
}

#[tokio::test]
async fn create_employee_reports_status_errors() {
    let (base_url, server) = serve_once("400 Bad Request", "").await;

    let err = client_for(&base_url).create_employee(&john()).await.unwrap_err();
    assert!(matches!(err, Error::Status { status: 400, .. }));
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client_for(&base_url).list_employees().await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}
