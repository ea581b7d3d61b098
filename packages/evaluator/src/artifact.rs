/// Generated file handed to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, mime_type: &'static str, contents: String) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type,
            contents,
        }
    }
}
