use yew::{AttrValue, Properties};

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct UploadConfig {
    pub endpoint: AttrValue,
    pub field_name: AttrValue,
    pub form_id: AttrValue,
    pub input_id: AttrValue,
    pub summary_id: AttrValue,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: AttrValue::Static("/upload"),
            field_name: AttrValue::Static("file"),
            form_id: AttrValue::Static("uploadForm"),
            input_id: AttrValue::Static("file"),
            summary_id: AttrValue::Static("summary"),
        }
    }
}

impl UploadConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<AttrValue>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}
