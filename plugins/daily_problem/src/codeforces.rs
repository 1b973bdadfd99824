use kovi::serde_json;

use crate::error::FetchError;

const URL: &str = "https://codeforces.com/api/problemset.problems";
const UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36";
const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub contest_id: i64,
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    pub fn url(&self) -> String {
        format!(
            "https://codeforces.com/problemset/problem/{}/{}",
            self.contest_id, self.index
        )
    }
}

#[derive(serde::Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    result: Option<Catalog>,
}

#[derive(serde::Deserialize)]
struct Catalog {
    problems: Vec<Problem>,
}

/// 拉取完整题库，一次选题只访问一次接口
pub async fn fetch_problems() -> Result<Vec<Problem>, FetchError> {
    let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
    let mut header = reqwest::header::HeaderMap::new();
    header.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_static(UA),
    );
    let res = client.get(URL).headers(header).send().await?;

    let body = res.text().await?;
    parse_catalog(&body)
}

/// 把接口返回的 JSON 信封解析成题目列表
pub(crate) fn parse_catalog(body: &str) -> Result<Vec<Problem>, FetchError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|_| FetchError::Malformed)?;

    if envelope.status != "OK" {
        return Err(FetchError::BadStatus(
            envelope.comment.unwrap_or_else(|| "unknown".to_string()),
        ));
    }

    match envelope.result {
        Some(catalog) => Ok(catalog.problems),
        None => Err(FetchError::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "status": "OK",
        "result": {
            "problems": [
                {
                    "contestId": 1,
                    "index": "A",
                    "name": "Theatre Square",
                    "rating": 1000,
                    "tags": ["math"]
                },
                {
                    "contestId": 2,
                    "index": "B",
                    "name": "Unrated One",
                    "tags": []
                }
            ]
        }
    }"#;

    #[test]
    fn parses_ok_envelope() {
        let problems = parse_catalog(OK_BODY).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].contest_id, 1);
        assert_eq!(problems[0].rating, Some(1000));
        assert_eq!(problems[0].tags, vec!["math".to_string()]);
        // rating 可以缺失，缺失不是错误
        assert_eq!(problems[1].rating, None);
    }

    #[test]
    fn rejects_failed_status() {
        let body = r#"{"status": "FAILED", "comment": "problemset is down"}"#;
        match parse_catalog(body) {
            Err(FetchError::BadStatus(comment)) => assert_eq!(comment, "problemset is down"),
            _ => panic!("expected BadStatus"),
        }
    }

    #[test]
    fn rejects_garbage_body() {
        assert!(matches!(
            parse_catalog("<html></html>"),
            Err(FetchError::Malformed)
        ));
        // status OK 但缺少 result 同样按格式错误处理
        assert!(matches!(
            parse_catalog(r#"{"status": "OK"}"#),
            Err(FetchError::Malformed)
        ));
    }

    #[test]
    fn url_matches_problemset_layout() {
        let problem = Problem {
            contest_id: 1,
            index: "A".to_string(),
            name: "Theatre Square".to_string(),
            rating: Some(1000),
            tags: vec![],
        };
        assert_eq!(
            problem.url(),
            "https://codeforces.com/problemset/problem/1/A"
        );
    }
}
