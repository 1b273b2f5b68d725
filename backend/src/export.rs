use actix_web::HttpResponse;
use actix_web::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use shared::{ExportKind, StudioError};

use crate::error::ApiError;

/// Builds a `text/plain` download for generated content or a fusion report.
pub fn attachment(kind: ExportKind, text: &str) -> Result<HttpResponse, ApiError> {
    if text.trim().is_empty() {
        return Err(StudioError::MissingInput("export text").into());
    }

    let file_name = kind.file_name();
    log::info!("Exporting {} ({} bytes)", file_name, text.len());

    Ok(HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
        .insert_header((
            CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"; filename*=UTF-8''{}",
                file_name,
                urlencoding::encode(file_name)
            ),
        ))
        .body(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sets_download_headers() {
        let response = attachment(ExportKind::MultimodalReport, "## Report").unwrap();
        let disposition = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("filename=\"multimodal-analysis-report.txt\""));
        assert!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
    }

    #[test]
    fn empty_text_is_rejected() {
        assert!(matches!(
            attachment(ExportKind::GeneratedContent, "  "),
            Err(ApiError::Studio(StudioError::MissingInput(_)))
        ));
    }
}
