use web_sys::{Blob, File, FormData};

use crate::error::UploadError;

#[derive(Debug, Clone, PartialEq)]
pub struct UploadPayload<F> {
    pub field: String,
    pub file: Option<F>,
}

impl<F> UploadPayload<F> {
    pub fn new(field: impl Into<String>, file: Option<F>) -> Self {
        Self {
            field: field.into(),
            file,
        }
    }
}

impl UploadPayload<File> {
    /// With no file selected an empty part with an empty filename is sent,
    /// the same thing a plain HTML form submits for an empty file input.
    pub fn into_form_data(self) -> Result<FormData, UploadError> {
        let form_data = FormData::new()?;
        match self.file {
            Some(file) => {
                form_data.append_with_blob_and_filename(&self.field, &file, &file.name())?
            }
            None => form_data.append_with_blob_and_filename(&self.field, &Blob::new()?, "")?,
        }
        Ok(form_data)
    }
}
