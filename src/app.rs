use std::rc::Rc;

use humansize::format_size;
use web_sys::{Event, HtmlInputElement, SubmitEvent};
use yew::html::TargetCast;
use yew::{Component, Context, Html, NodeRef, html};

use crate::{
    config::UploadConfig,
    dom::{AlertNotifier, CallbackRegion, FetchTransport, NodeRefInput},
    handler::UploadHandler,
};

type BrowserHandler = UploadHandler<NodeRefInput, FetchTransport, AlertNotifier, CallbackRegion>;

pub struct SelectedFile {
    name: String,
    human_size: String,
}

pub enum Msg {
    Submit,
    Selected(Option<web_sys::FileList>),
    Summary(String),
}

pub struct App {
    input: NodeRef,
    handler: Rc<BrowserHandler>,
    selected: Option<SelectedFile>,
    summary: String,
}

impl Component for App {
    type Message = Msg;
    type Properties = UploadConfig;

    fn create(ctx: &Context<Self>) -> Self {
        let input = NodeRef::default();
        let handler = UploadHandler::new(
            ctx.props(),
            NodeRefInput(input.clone()),
            FetchTransport,
            AlertNotifier,
            CallbackRegion(ctx.link().callback(Msg::Summary)),
        );

        Self {
            input,
            handler: Rc::new(handler),
            selected: None,
            summary: String::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                // Every submission runs on its own; nothing is queued or cancelled.
                let handler = self.handler.clone();
                yew::platform::spawn_local(async move {
                    if let Err(e) = handler.submit().await {
                        log::error!("Upload failed: {e}");
                    }
                });
                false
            }
            Msg::Selected(files) => {
                self.selected = files
                    .map(gloo::file::FileList::from)
                    .and_then(|files| files.first().cloned())
                    .map(|file| SelectedFile {
                        name: file.name(),
                        human_size: format_size(file.size(), humansize::BINARY),
                    });
                true
            }
            Msg::Summary(summary) => {
                self.summary = summary;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = ctx.props();

        html! {
            <>
                <main>
                    <h1>{ "upload-to-summary" }</h1>
                    <form
                        id={config.form_id.clone()}
                        onsubmit={ctx.link().callback(|event: SubmitEvent| {
                            event.prevent_default();
                            Msg::Submit
                        })}
                    >
                        <label>
                            <p>{ "Choose a video to summarize" }</p>
                            <input
                                type="file"
                                id={config.input_id.clone()}
                                name={config.field_name.clone()}
                                ref={self.input.clone()}
                                onchange={ctx.link().callback(|e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    Msg::Selected(input.files())
                                })}
                            />
                        </label>
                        { for self.selected.as_ref().map(Self::view_selected) }
                        <button type="submit">{ "Upload" }</button>
                    </form>
                    <div id={config.summary_id.clone()}>{ &self.summary }</div>
                </main>
            </>
        }
    }
}

impl App {
    fn view_selected(file: &SelectedFile) -> Html {
        html! {
            <div class="selected">
                <div>{ &file.name }</div>
                <div>{ &file.human_size }</div>
            </div>
        }
    }
}
