#[cfg(test)]
mod tests {
    use crate::{
        errors::{AppError, SyncError},
        providers::google::{
            drive::{find_query, multipart_body},
            oauth::parse_redirect,
            service_message,
            sheets::spreadsheet_body,
        },
    };
    use serde_json::json;

    #[test]
    fn redirect_yields_the_authorization_code() {
        let code = parse_redirect("GET /?state=abc&code=4%2F0Ad-xyz&scope=email HTTP/1.1", "abc")
            .expect("expected a code");
        assert_eq!(code, "4/0Ad-xyz");
    }

    #[test]
    fn redirect_with_wrong_state_is_denied() {
        assert!(matches!(
            parse_redirect("GET /?state=other&code=123 HTTP/1.1", "abc"),
            Err(AppError::Sync(SyncError::AuthorizationDenied(_)))
        ));
    }

    #[test]
    fn redirect_carrying_an_error_is_denied() {
        let result = parse_redirect("GET /?error=access_denied&state=abc HTTP/1.1", "abc");
        assert_eq!(
            result.map_err(|e| e.to_string()),
            Err("sync error: authorization denied: access_denied".to_string())
        );
    }

    #[test]
    fn malformed_redirects_are_denied() {
        for line in ["", "GET", "GET /?state=abc HTTP/1.1"] {
            assert!(
                matches!(
                    parse_redirect(line, "abc"),
                    Err(AppError::Sync(SyncError::AuthorizationDenied(_)))
                ),
                "expected '{}' to be denied",
                line
            );
        }
    }

    #[test]
    fn service_message_reads_both_error_shapes() {
        let api = json!({ "error": { "code": 403, "message": "Insufficient Permission" } });
        assert_eq!(
            service_message(&api.to_string()).as_deref(),
            Some("Insufficient Permission")
        );
        let oauth = json!({ "error": "invalid_grant", "error_description": "Bad Request" });
        assert_eq!(
            service_message(&oauth.to_string()).as_deref(),
            Some("Bad Request")
        );
        let bare = json!({ "error": "invalid_client" });
        assert_eq!(
            service_message(&bare.to_string()).as_deref(),
            Some("invalid_client")
        );
        assert_eq!(service_message("<html>502</html>"), None);
    }

    #[test]
    fn find_query_escapes_quotes() {
        assert_eq!(
            find_query("coach's data.json"),
            "name='coach\\'s data.json' and trashed=false and 'me' in owners"
        );
    }

    #[test]
    fn multipart_body_holds_metadata_and_content() {
        let body = String::from_utf8(multipart_body("data.json", b"{\"players\":[]}"))
            .expect("expected utf-8");
        assert!(body.contains("\"name\":\"data.json\""));
        assert!(body.contains("\r\n\r\n{\"players\":[]}\r\n--"));
        assert!(body.trim_end().ends_with("--"));
        assert_eq!(body.matches("Content-Type:").count(), 2);
    }

    #[test]
    fn spreadsheet_body_has_one_sheet_with_every_row() {
        let rows = vec![
            vec!["Player Name".to_string(), "01/08/25".to_string()],
            vec!["Ana".to_string(), "P".to_string()],
        ];
        let body = spreadsheet_body("Attendance Sheet - 01/08/2025", "Attendance", &rows);
        assert_eq!(
            body["properties"]["title"],
            json!("Attendance Sheet - 01/08/2025")
        );
        assert_eq!(body["sheets"].as_array().map(|s| s.len()), Some(1));
        assert_eq!(body["sheets"][0]["properties"]["title"], json!("Attendance"));
        let row_data = &body["sheets"][0]["data"][0]["rowData"];
        assert_eq!(row_data.as_array().map(|r| r.len()), Some(2));
        assert_eq!(
            row_data[1]["values"][1]["userEnteredValue"]["stringValue"],
            json!("P")
        );
    }
}
