use gloo::net::http::Request;
use web_sys::{File, HtmlInputElement};
use yew::{Callback, NodeRef};

use crate::{
    error::UploadError,
    handler::{DisplayRegion, FileInput, Notifier, Transport},
    payload::UploadPayload,
    response::ServerResponse,
};

pub struct NodeRefInput(pub NodeRef);

impl FileInput for NodeRefInput {
    type File = File;

    fn selected_file(&self) -> Option<File> {
        self.0.cast::<HtmlInputElement>()?.files()?.get(0)
    }
}

#[derive(Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    type File = File;

    async fn post(
        &self,
        endpoint: &str,
        payload: UploadPayload<File>,
    ) -> Result<ServerResponse, UploadError> {
        let body = payload.into_form_data()?;
        let response = Request::post(endpoint)
            .body(body)
            .map_err(UploadError::Transport)?
            .send()
            .await
            .map_err(UploadError::Transport)?;

        // Only the body decides what happens next.
        log::debug!("{endpoint} answered {} {}", response.status(), response.status_text());

        response.json().await.map_err(UploadError::Decode)
    }
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

pub struct CallbackRegion(pub Callback<String>);

impl DisplayRegion for CallbackRegion {
    fn replace_text(&self, text: &str) {
        self.0.emit(text.to_owned());
    }
}
