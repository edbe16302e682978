use crate::{
    config::UploadConfig,
    error::UploadError,
    payload::UploadPayload,
    response::{Outcome, ServerResponse},
};

pub trait FileInput {
    type File;

    fn selected_file(&self) -> Option<Self::File>;
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    type File;

    async fn post(
        &self,
        endpoint: &str,
        payload: UploadPayload<Self::File>,
    ) -> Result<ServerResponse, UploadError>;
}

pub trait Notifier {
    fn alert(&self, message: &str);
}

pub trait DisplayRegion {
    fn replace_text(&self, text: &str);
}

pub struct UploadHandler<I, T, N, D> {
    endpoint: String,
    field_name: String,
    input: I,
    transport: T,
    notifier: N,
    display: D,
}

impl<I, T, N, D> UploadHandler<I, T, N, D>
where
    I: FileInput,
    T: Transport<File = I::File>,
    N: Notifier,
    D: DisplayRegion,
{
    pub fn new(config: &UploadConfig, input: I, transport: T, notifier: N, display: D) -> Self {
        Self {
            endpoint: config.endpoint.to_string(),
            field_name: config.field_name.to_string(),
            input,
            transport,
            notifier,
            display,
        }
    }

    /// Transport and decode errors are returned as is, without touching the
    /// notifier or the display.
    pub async fn submit(&self) -> Result<Outcome, UploadError> {
        let file = self.input.selected_file();
        if file.is_none() {
            log::debug!("No file selected, sending empty '{}' part", self.field_name);
        }
        let payload = UploadPayload::new(self.field_name.as_str(), file);

        log::debug!("POST {}", self.endpoint);
        let response = self.transport.post(&self.endpoint, payload).await?;

        let outcome = response.into_outcome();
        match &outcome {
            Outcome::Alert(message) => {
                log::warn!("Upload rejected: {message}");
                self.notifier.alert(message);
            }
            Outcome::Summary(summary) => {
                log::info!("Received summary ({} bytes)", summary.len());
                self.display.replace_text(summary);
            }
        }
        Ok(outcome)
    }
}
