use super::SigningPayloadService;
use super::dto::{SigningPayloadDTO, SigningRequestDTO};
use super::validator::validate_signing_request;
use crate::model::signing_payload::SigningPayload;
use crate::model::signing_request::SigningRequest;
use crate::provider::signature_format::model::TransformationContext;
use crate::service::error::SigningError;

impl SigningPayloadService {
    /// Produces the canonical signing payload for a request
    ///
    /// The request signature is verified before anything else, the
    /// document is only resolved for trusted requests.
    ///
    /// # Arguments
    ///
    /// * `request` - signed request of the trusted backend
    pub async fn produce(&self, request: SigningRequest) -> Result<SigningPayload, SigningError> {
        self.request_verifier.verify(&request)?;
        tracing::debug!(
            format = %request.signature_format,
            mime_type = %request.document.mime_type,
            "Signing request verified"
        );

        let format = validate_signing_request(&request)?;

        let resolved_document = self.document_loader.load(&request.document).await?;
        tracing::debug!(size = resolved_document.content.len(), "Document loaded");

        let strategy = self.signature_format_provider.get_strategy(format)?;

        let context = TransformationContext::new(
            resolved_document,
            request.reference_text,
            request.language,
            request.required_signer,
            format,
            strategy,
        );

        let payload = context.transform()?;
        tracing::debug!(
            %format,
            size = payload.document.len(),
            "Signing payload produced"
        );

        Ok(payload)
    }

    /// Transport form of [`Self::produce`]
    pub async fn produce_dto(
        &self,
        request: SigningRequest,
    ) -> Result<SigningPayloadDTO, SigningError> {
        self.produce(request).await.map(SigningPayloadDTO::from)
    }

    /// Maps the inbound DTO, then behaves as [`Self::produce_dto`]
    pub async fn produce_from_dto(
        &self,
        request: SigningRequestDTO,
    ) -> Result<SigningPayloadDTO, SigningError> {
        let request = SigningRequest::try_from(request)?;
        self.produce_dto(request).await
    }
}
