use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures::TryStreamExt;
use log::info;
use serde_json::json;
use shared::chart::{confidence_chart, correlation_chart, performance_chart, sentiment_chart};
use shared::{
    Channel, ContentLength, ContentType, DetectionAnalysis, DetectionRequest, ExportRequest,
    GenerateRequest, GenerationRequest, ImageSource, MultiModalRequest, MultiModalResponse,
    ProjectInfo, SampleText, StudioError, TextAnalysisResponse, TextRequest, UploadResponse,
    detection, fusion, generator, lexicon, text,
};
use std::path::PathBuf;

use crate::config::SimulationConfig;
use crate::error::ApiError;
use crate::export;
use crate::session::ClientId;
use crate::simulation::Simulator;
use crate::store::image_store::{ImageStore, StoreError};

pub fn configure_routes(
    cfg: &mut web::ServiceConfig,
    static_dir: Option<PathBuf>,
    max_upload_bytes: usize,
) {
    cfg.app_data(json_config(max_upload_bytes))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/images").route(web::post().to(upload_image)))
        .service(web::resource("/api/images/{hash}").route(web::delete().to(delete_image)))
        .service(web::resource("/api/detect").route(web::post().to(detect)))
        .service(web::resource("/api/text/analyze").route(web::post().to(analyze_text)))
        .service(web::resource("/api/text/stats").route(web::post().to(text_stats)))
        .service(web::resource("/api/text/sample").route(web::get().to(sample_text)))
        .service(web::resource("/api/generate").route(web::post().to(generate)))
        .service(web::resource("/api/multimodal").route(web::post().to(multimodal)))
        .service(web::resource("/api/export").route(web::post().to(export_text)))
        .service(web::resource("/api/project").route(web::get().to(project_info)));

    if let Some(dir) = static_dir {
        if dir.is_dir() {
            info!("Serving static files from {}", dir.display());
            cfg.service(Files::new("/static", dir).index_file("index.html"));
        } else {
            log::warn!("STATIC_DIR {} is not a directory, skipping", dir.display());
        }
    }
}

/// JSON bodies may carry a base64 data URL, so the limit leaves room for the
/// encoding overhead on top of the upload limit.
fn json_config(max_upload_bytes: usize) -> web::JsonConfig {
    let limit = (max_upload_bytes / 3)
        .saturating_mul(4)
        .saturating_add(64 * 1024);
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

fn detection_analysis(threshold: f64) -> DetectionAnalysis {
    let report = detection::analyze(&mut rand::rng(), threshold);
    let chart = confidence_chart(&report.objects);
    DetectionAnalysis { report, chart }
}

async fn upload_image(
    store: web::Data<ImageStore>,
    simulator: web::Data<Simulator>,
    config: web::Data<SimulationConfig>,
    client: ClientId,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut upload = None;

    while let Some(mut field) = payload.try_next().await? {
        let mime_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_string();

        let mut image_data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            if image_data.len() + chunk.len() > store.max_bytes() {
                return Err(StoreError::FileTooLarge(image_data.len() + chunk.len()).into());
            }
            image_data.extend_from_slice(&chunk);
        }

        if !image_data.is_empty() {
            upload = Some((image_data, file_name, mime_type));
            break;
        }
    }

    let (image_data, file_name, mime_type) = upload.ok_or(ApiError::NoImagePart)?;
    let image = store.store_image(&image_data, file_name, mime_type).await?;
    info!(
        "Stored image {} ({}, {} bytes) for client {}",
        image.hash, image.file_name, image.size, client.id
    );

    let threshold = config.detection.threshold;
    let detection = simulator
        .run(
            client,
            Channel::Detection,
            simulator.range_for(Channel::Detection),
            || Ok::<_, ApiError>(detection_analysis(threshold)),
        )
        .await?;

    Ok(HttpResponse::Ok().json(UploadResponse {
        image: image.to_image_ref(),
        detection,
    }))
}

async fn delete_image(store: web::Data<ImageStore>, path: web::Path<String>) -> HttpResponse {
    let hash = path.into_inner();
    if store.delete_image(&hash).await {
        info!("Deleted image {}", hash);
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "error": format!("Unknown image: {}", hash) }))
    }
}

/// Re-runs detection on a stored image with a new threshold.
async fn detect(
    store: web::Data<ImageStore>,
    simulator: web::Data<Simulator>,
    client: ClientId,
    body: web::Json<DetectionRequest>,
) -> Result<HttpResponse, ApiError> {
    let DetectionRequest {
        image_hash,
        threshold,
    } = body.into_inner();

    if !(0.0..=1.0).contains(&threshold) {
        return Err(ApiError::InvalidThreshold(threshold));
    }
    if store.get_image(&image_hash).await.is_none() {
        return Err(ApiError::UnknownImage(image_hash));
    }

    let envelope = simulator
        .run(
            client,
            Channel::Detection,
            simulator.rethreshold_range(),
            || Ok::<_, ApiError>(detection_analysis(threshold)),
        )
        .await?;
    Ok(HttpResponse::Ok().json(envelope))
}

async fn analyze_text(
    simulator: web::Data<Simulator>,
    client: ClientId,
    body: web::Json<TextRequest>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner().text;
    if input.trim().is_empty() {
        return Err(StudioError::MissingInput("text").into());
    }

    let envelope = simulator
        .run(
            client,
            Channel::Text,
            simulator.range_for(Channel::Text),
            || {
                let analysis = text::analyze_text(&input)?;
                let chart = sentiment_chart(&analysis.sentiment);
                Ok::<_, ApiError>(TextAnalysisResponse { analysis, chart })
            },
        )
        .await?;
    Ok(HttpResponse::Ok().json(envelope))
}

async fn text_stats(body: web::Json<TextRequest>) -> HttpResponse {
    HttpResponse::Ok().json(text::text_stats(&body.text))
}

async fn sample_text() -> HttpResponse {
    let text = lexicon::sample_text(&mut rand::rng());
    HttpResponse::Ok().json(SampleText {
        text: text.to_string(),
    })
}

fn generation_request(
    form: GenerateRequest,
    config: &SimulationConfig,
) -> Result<GenerationRequest, ApiError> {
    let content_type = if config.generation.lenient_content_type {
        ContentType::parse_or_default(&form.content_type)
    } else {
        ContentType::parse(&form.content_type)?
    };
    let length = match form.length.as_deref() {
        Some(raw) if !raw.trim().is_empty() => ContentLength::parse(raw)?,
        _ => config.generation.length,
    };
    let creativity = form.creativity.unwrap_or(config.generation.creativity);
    if !(generator::MIN_CREATIVITY..=generator::MAX_CREATIVITY).contains(&creativity) {
        return Err(ApiError::InvalidCreativity(creativity));
    }

    Ok(GenerationRequest {
        content_type,
        theme: form.theme.trim().to_string(),
        length,
        creativity,
    })
}

async fn generate(
    simulator: web::Data<Simulator>,
    config: web::Data<SimulationConfig>,
    client: ClientId,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = generation_request(body.into_inner(), &config)?;
    info!(
        "Generating {} content ({}, creativity {}) for client {}",
        request.content_type, request.length, request.creativity, client.id
    );

    let envelope = simulator
        .run(
            client,
            Channel::Generation,
            simulator.range_for(Channel::Generation),
            || Ok::<_, ApiError>(generator::generate(&mut rand::rng(), &request)),
        )
        .await?;
    Ok(HttpResponse::Ok().json(envelope))
}

async fn multimodal(
    store: web::Data<ImageStore>,
    simulator: web::Data<Simulator>,
    client: ClientId,
    body: web::Json<MultiModalRequest>,
) -> Result<HttpResponse, ApiError> {
    let MultiModalRequest {
        image_hash,
        image_data_url,
        text,
    } = body.into_inner();

    let image: Option<ImageSource> = match (image_hash, image_data_url) {
        (Some(hash), _) if !hash.trim().is_empty() => match store.get_image(&hash).await {
            Some(entry) => Some(entry.source()),
            None => return Err(ApiError::UnknownImage(hash)),
        },
        (_, Some(url)) if !url.trim().is_empty() => Some(store.store_data_url(&url).await?.source()),
        _ => None,
    };

    let analysis = fusion::fuse(image.as_ref(), &text)?;
    let envelope = simulator
        .run(
            client,
            Channel::MultiModal,
            simulator.range_for(Channel::MultiModal),
            || {
                let chart = correlation_chart(&analysis);
                Ok::<_, ApiError>(MultiModalResponse { analysis, chart })
            },
        )
        .await?;
    Ok(HttpResponse::Ok().json(envelope))
}

async fn export_text(body: web::Json<ExportRequest>) -> Result<HttpResponse, ApiError> {
    let ExportRequest { kind, text } = body.into_inner();
    export::attachment(kind, &text)
}

async fn project_info() -> HttpResponse {
    HttpResponse::Ok().json(ProjectInfo {
        models: lexicon::model_cards(),
        performance: performance_chart(),
    })
}
