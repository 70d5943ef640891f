//! 控制台输出模块
use crate::{
    error::Result,
    types::{ApiReply, GenerateContentResponse},
};
use std::io::Write;

/// 启动时的横幅
pub const BANNER: &str = "Testing AI_MEE with Gemini API...";

/// 收到 200 时的横幅
pub const SUCCESS_BANNER: &str = "SUCCESS! API is working!";

/// 密钥无效时服务端返回的错误原因
const INVALID_KEY_REASON: &str = "API_KEY_INVALID";

/// 输出启动横幅
pub fn banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", BANNER)?;
    Ok(())
}

/// 输出一次调用的结果
///
/// 请求失败只会被打印，不会向上传播；返回的错误只来自写入 `out`
pub fn report<W: Write>(out: &mut W, reply: Result<ApiReply>) -> Result<()> {
    match reply {
        Ok(reply) if reply.is_success() => {
            writeln!(out, "{}", SUCCESS_BANNER)?;
            match GenerateContentResponse::from_body(&reply.body) {
                Ok(resp) => {
                    if let Some(text) = resp.first_text() {
                        writeln!(out, "Gemini says: {}", text)?;
                    }
                }
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }
        Ok(reply) => {
            writeln!(out, "Error: {}", reply.status.as_u16())?;
            writeln!(out, "{}", reply.body)?;
            if reply.body.contains(INVALID_KEY_REASON) {
                writeln!(out, "   Check that your API key is valid")?;
            }
        }
        Err(e) => writeln!(out, "Error: {}", e)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeminiError;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn render(reply: Result<ApiReply>) -> String {
        let mut out = Vec::new();
        report(&mut out, reply).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn reply(status: StatusCode, body: &str) -> Result<ApiReply> {
        Ok(ApiReply {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn test_banner() {
        let mut out = Vec::new();
        banner(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Testing AI_MEE with Gemini API...\n");
    }

    #[test]
    fn test_success_prints_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"AI_MEE is ready!"}]}}]}"#;
        assert_eq!(
            render(reply(StatusCode::OK, body)),
            "SUCCESS! API is working!\nGemini says: AI_MEE is ready!\n"
        );
    }

    #[test]
    fn test_success_without_candidates_prints_banner_only() {
        assert_eq!(
            render(reply(StatusCode::OK, r#"{"modelVersion":"gemini-2.0-flash"}"#)),
            "SUCCESS! API is working!\n"
        );
    }

    #[test]
    fn test_success_prints_text_despite_malformed_sibling_fields() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]},"finishReason":1}],"usageMetadata":{"promptTokenCount":null}}"#;
        assert_eq!(
            render(reply(StatusCode::OK, body)),
            "SUCCESS! API is working!\nGemini says: hi\n"
        );
    }

    #[test]
    fn test_success_with_invalid_json_prints_error() {
        let output = render(reply(StatusCode::OK, "not json"));
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("SUCCESS! API is working!"));
        assert!(lines.next().unwrap().starts_with("Error: JSON处理错误: "));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_error_status_prints_code_and_body() {
        assert_eq!(
            render(reply(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")),
            "Error: 500\nupstream exploded\n"
        );
    }

    #[test]
    fn test_invalid_key_adds_hint() {
        let body = r#"{"error":{"code":400,"status":"INVALID_ARGUMENT","details":[{"reason":"API_KEY_INVALID"}]}}"#;
        assert_eq!(
            render(reply(StatusCode::BAD_REQUEST, body)),
            format!("Error: 400\n{}\n   Check that your API key is valid\n", body)
        );
    }

    #[test]
    fn test_failure_prints_description() {
        let output = render(Err(GeminiError::Config("GEMINI_API_KEY not found".into())));
        assert_eq!(output, "Error: 配置错误: GEMINI_API_KEY not found\n");
    }
}
