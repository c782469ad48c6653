use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use alusive_ml::chat::{default_catalog, load_encoder, FaqMatcher, SentenceEncoder};
use alusive_ml::config::AppConfig;
use alusive_ml::documents::{DocumentValidationService, HttpSignatureDetector};
use alusive_ml::error::AppError;
use alusive_ml::grants::{ForestModel, GrantPredictor};
use alusive_ml::notify::{LogNotifier, MailTransport, ResendNotifier};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type FaqService = FaqMatcher<Box<dyn SentenceEncoder>>;
pub(crate) type DocumentService = DocumentValidationService<HttpSignatureDetector, MailTransport>;

/// Model-backed services shared by every request.
#[derive(Clone)]
pub(crate) struct Services {
    pub(crate) grants: Arc<GrantPredictor<ForestModel>>,
    pub(crate) chat: Arc<FaqService>,
    pub(crate) documents: Arc<DocumentService>,
}

impl Services {
    pub(crate) fn load(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            grants: Arc::new(load_grant_predictor(config)?),
            chat: Arc::new(load_faq_matcher(config)?),
            documents: Arc::new(build_document_service(config)?),
        })
    }
}

pub(crate) fn load_grant_predictor(
    config: &AppConfig,
) -> Result<GrantPredictor<ForestModel>, AppError> {
    let model = ForestModel::from_path(&config.grants.model_path)?;
    let predictor = GrantPredictor::new(Arc::new(model), config.grants.policy)?;
    Ok(predictor)
}

pub(crate) fn load_faq_matcher(config: &AppConfig) -> Result<FaqService, AppError> {
    let encoder = load_encoder(&config.chat.embedding_model_dir)?;
    let matcher = FaqMatcher::new(encoder, default_catalog(), config.chat.threshold)?;
    info!(
        encoder = matcher.encoder().name(),
        faqs = matcher.faqs().len(),
        threshold = matcher.threshold(),
        "loaded chat matcher"
    );
    Ok(matcher)
}

pub(crate) fn build_mail_transport(config: &AppConfig) -> Result<MailTransport, AppError> {
    match &config.mail.resend_api_key {
        Some(key) => {
            let notifier = ResendNotifier::new(key.clone(), config.documents.http_timeout)?;
            Ok(MailTransport::Resend(notifier))
        }
        None => {
            warn!("RESEND_API_KEY not set; document emails will only be logged");
            Ok(MailTransport::Log(LogNotifier))
        }
    }
}

pub(crate) fn build_document_service(config: &AppConfig) -> Result<DocumentService, AppError> {
    let detector = HttpSignatureDetector::new(
        config.documents.scorer_url.clone(),
        config.documents.http_timeout,
    )?;
    let transport = build_mail_transport(config)?;
    info!(
        scorer = detector.endpoint(),
        mail = transport.name(),
        "document validation configured"
    );
    Ok(DocumentValidationService::new(
        Arc::new(detector),
        Arc::new(transport),
        config.validation_settings(),
    ))
}
