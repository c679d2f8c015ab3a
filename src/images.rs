use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct GenerationInput {
    pub prompt: String,
    pub aspect_ratio: String,
    pub output_format: String,
    pub negative_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ImageGenerationRequest {
    pub input: GenerationInput,
}

#[derive(Debug, Deserialize)]
pub struct ImageGenerationResponse {
    pub output: GenerationOutput,
}

/// The generation API returns either an object wrapping the result URL or a
/// bare URL string. `Wrapped` is tried first so an object wins; anything
/// else is taken as the URL itself.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenerationOutput {
    Wrapped { url: String },
    Plain(String),
}

impl GenerationOutput {
    pub fn into_url(self) -> String {
        match self {
            GenerationOutput::Wrapped { url } => url,
            GenerationOutput::Plain(url) => url,
        }
    }
}
